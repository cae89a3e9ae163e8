// Copyright 2017 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/*!
Union, subtraction and negation of character classes.

Every operation checks its operands against the compatibility rules before
computing anything, and fails with an error naming the rendered operands when
they are violated:

* Classes of opposite polarity never mix. `[a-z] | [[:^digit:]]` fails, and so does
  `[^a-z] - [0-9]`.
* The Unicode word shorthand `\w` (and `\W`) never takes part in a
  subtraction.
* The any-character class `.` cannot be negated.
* A subtraction that leaves no characters fails.

A single character (or a one character string, or a [`Token`](enum.Token.html))
is accepted wherever a class is, on either side of an operation, and is
treated as the class matching only that character.
*/

use std::ops::{BitOr, Not, Sub};

use crate::class::ClassValue;
use crate::error::{Error, ErrorKind, Result, SetOp};
use crate::kind::{ClassKind, Polarity};

/// A named character that is awkward to type or to read in source code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Token {
    /// `\`
    Backslash,
    /// `•`
    Bullet,
    /// U+000D
    CarriageReturn,
    /// `©`
    Copyright,
    /// `÷`
    Division,
    /// `€`
    Euro,
    /// U+000C
    FormFeed,
    /// `∞`
    Infinity,
    /// `×`
    Multiplication,
    /// U+000A
    Newline,
    /// `£`
    Pound,
    /// `®`
    Registered,
    /// U+0020
    Space,
    /// U+0009
    Tab,
    /// `™`
    Trademark,
    /// U+000B
    VerticalTab,
    /// `¥`
    Yen,
}

impl Token {
    /// Return the character this token stands for.
    pub fn as_char(&self) -> char {
        use self::Token::*;
        match *self {
            Backslash => '\\',
            Bullet => '\u{2022}',
            CarriageReturn => '\r',
            Copyright => '\u{A9}',
            Division => '\u{F7}',
            Euro => '\u{20AC}',
            FormFeed => '\x0C',
            Infinity => '\u{221E}',
            Multiplication => '\u{D7}',
            Newline => '\n',
            Pound => '\u{A3}',
            Registered => '\u{AE}',
            Space => ' ',
            Tab => '\t',
            Trademark => '\u{2122}',
            VerticalTab => '\x0B',
            Yen => '\u{A5}',
        }
    }
}

/// A value that may stand in for a class in a class operation.
///
/// Anything that converts into an `Operand` can be passed to
/// `ClassValue::union` and `ClassValue::subtract`. Bare characters, tokens
/// and strings are promoted to the class matching just that character when
/// the operation runs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operand {
    /// A class.
    Class(ClassValue),
    /// A single character.
    Char(char),
    /// A named character.
    Token(Token),
    /// A string, which must hold exactly one character.
    Text(String),
}

impl Operand {
    /// Convert this operand into a class.
    ///
    /// This fails with `InvalidOperand` for a string that does not hold
    /// exactly one character.
    pub fn normalize(self) -> Result<ClassValue> {
        match self {
            Operand::Class(cls) => Ok(cls),
            Operand::Char(c) => Ok(ClassValue::literal(c)),
            Operand::Token(tok) => Ok(ClassValue::literal(tok.as_char())),
            Operand::Text(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(ClassValue::literal(c)),
                    _ => Err(Error::with_operands(
                        ErrorKind::InvalidOperand { operand: text.clone() },
                        vec![])),
                }
            }
        }
    }

    /// Return the union of this operand and a class, with this operand on
    /// the left.
    pub fn union(self, rhs: &ClassValue) -> Result<ClassValue> {
        self.normalize()?.union(rhs)
    }

    /// Subtract a class from this operand.
    ///
    /// Since the left operand is a single character, this either fails with
    /// `EmptyClassResult` or returns the operand unchanged.
    pub fn subtract(self, rhs: &ClassValue) -> Result<ClassValue> {
        self.normalize()?.subtract(rhs)
    }
}

impl From<ClassValue> for Operand {
    fn from(cls: ClassValue) -> Operand {
        Operand::Class(cls)
    }
}

impl<'a> From<&'a ClassValue> for Operand {
    fn from(cls: &'a ClassValue) -> Operand {
        Operand::Class(cls.clone())
    }
}

impl From<char> for Operand {
    fn from(c: char) -> Operand {
        Operand::Char(c)
    }
}

impl From<Token> for Operand {
    fn from(tok: Token) -> Operand {
        Operand::Token(tok)
    }
}

impl<'a> From<&'a str> for Operand {
    fn from(text: &'a str) -> Operand {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Operand {
        Operand::Text(text)
    }
}

impl ClassValue {
    /// Return the union of this class and `other`.
    ///
    /// Both operands must have the same polarity. For two positive classes
    /// the result matches every character matched by either. For two
    /// negated classes the union applies to the excluded characters, so
    /// `[^a-d] | [^b-k]` is `[^a-k]`. A union of negated classes that
    /// excludes every character fails with `EmptyClassResult`. A union with
    /// the any-character class is the any-character class. When the combined
    /// set is exactly the set of a shorthand, the result renders as that
    /// shorthand, so `[0-4] | [5-9]` is `[[:digit:]]`.
    pub fn union<O: Into<Operand>>(&self, other: O) -> Result<ClassValue> {
        let rhs = other.into().normalize()?;
        let polarity = check_polarity(SetOp::Union, self, &rhs)?;
        if self.kind() == ClassKind::Universal
            || rhs.kind() == ClassKind::Universal
        {
            trace!("union with {} absorbs the other operand",
                   ClassValue::any());
            return Ok(ClassValue::any());
        }
        let set = self.ranges().union(rhs.ranges());
        if polarity == Polarity::Negative && set.is_full() {
            return Err(operation_error(
                ErrorKind::EmptyClassResult, self, &rhs));
        }
        let kind = ClassKind::infer(polarity, &set);
        if kind.shorthand().is_none() {
            if let Some(s) = self.kind().shorthand().or(rhs.kind().shorthand()) {
                debug!("union widened {} into an enumerated class",
                       s.syntax(polarity == Polarity::Negative));
            }
        }
        trace!("union of {:?} and {:?} is {:?} with {} ranges",
               self.kind(), rhs.kind(), kind, set.ranges().len());
        Ok(ClassValue::from_parts(kind, set))
    }

    /// Return this class with the characters of `other` removed.
    ///
    /// For two negated classes the subtraction applies to the excluded
    /// characters, so `[^a-e] - [^d-k]` is `[^a-c]`.
    ///
    /// Both operands must have the same polarity, and neither may be the
    /// Unicode word shorthand. Subtracting from the any-character class
    /// yields the negation of the subtrahend, so `. - [[:digit:]]` is
    /// `[[:^digit:]]`, and fails with `EmptyClassResult` when the subtrahend
    /// matches every character. The result always has an enumerated kind
    /// otherwise; a shorthand with characters removed from it no longer has
    /// a shorthand. Ranges that are emptied by
    /// the subtraction are dropped, and the operation fails with
    /// `EmptyClassResult` only when no character at all remains.
    pub fn subtract<O: Into<Operand>>(&self, other: O) -> Result<ClassValue> {
        let rhs = other.into().normalize()?;
        let polarity = check_polarity(SetOp::Difference, self, &rhs)?;
        if self.kind().is_global_word() || rhs.kind().is_global_word() {
            return Err(operation_error(
                ErrorKind::GlobalShorthandSubtractionUnsupported, self, &rhs));
        }
        if self.kind() == ClassKind::Universal {
            return match rhs.kind().negate() {
                Some(kind) if !rhs.ranges().is_full() => {
                    trace!("{} less {:?} is its negation", self, rhs.kind());
                    Ok(ClassValue::from_parts(kind, rhs.ranges().clone()))
                }
                _ => Err(operation_error(
                    ErrorKind::EmptyClassResult, self, &rhs)),
            };
        }
        let set = self.ranges().difference(rhs.ranges());
        if set.is_empty() {
            return Err(operation_error(
                ErrorKind::EmptyClassResult, self, &rhs));
        }
        if let Some(s) = self.kind().shorthand() {
            debug!("subtraction turned {} into an enumerated class",
                   s.syntax(polarity == Polarity::Negative));
        }
        trace!("{:?} less {:?} leaves {} ranges",
               self.kind(), rhs.kind(), set.ranges().len());
        Ok(ClassValue::from_parts(ClassKind::plain(polarity), set))
    }

    /// Return the class matching exactly the characters this class does not.
    ///
    /// This fails with `CannotNegateUniversal` for the any-character class,
    /// and with `EmptyClassResult` for a class that matches every character.
    /// Negating twice gives back the original class.
    pub fn negate(&self) -> Result<ClassValue> {
        match self.kind().negate() {
            Some(kind) if kind.polarity() == Polarity::Negative
                && self.ranges().is_full() =>
            {
                Err(Error::with_operands(
                    ErrorKind::EmptyClassResult, vec![self.to_string()]))
            }
            Some(kind) => {
                Ok(ClassValue::from_parts(kind, self.ranges().clone()))
            }
            None => Err(Error::with_operands(
                ErrorKind::CannotNegateUniversal, vec![self.to_string()])),
        }
    }
}

fn check_polarity(
    op: SetOp,
    lhs: &ClassValue,
    rhs: &ClassValue,
) -> Result<Polarity> {
    let polarity = lhs.polarity();
    if polarity != rhs.polarity() {
        return Err(operation_error(
            ErrorKind::IncompatibleClassPolarity { op: op }, lhs, rhs));
    }
    Ok(polarity)
}

fn operation_error(
    kind: ErrorKind,
    lhs: &ClassValue,
    rhs: &ClassValue,
) -> Error {
    Error::with_operands(kind, vec![lhs.to_string(), rhs.to_string()])
}

impl<O: Into<Operand>> BitOr<O> for ClassValue {
    type Output = Result<ClassValue>;

    fn bitor(self, rhs: O) -> Result<ClassValue> {
        self.union(rhs)
    }
}

impl<'a, O: Into<Operand>> BitOr<O> for &'a ClassValue {
    type Output = Result<ClassValue>;

    fn bitor(self, rhs: O) -> Result<ClassValue> {
        self.union(rhs)
    }
}

impl BitOr<ClassValue> for char {
    type Output = Result<ClassValue>;

    fn bitor(self, rhs: ClassValue) -> Result<ClassValue> {
        Operand::Char(self).union(&rhs)
    }
}

impl BitOr<ClassValue> for Token {
    type Output = Result<ClassValue>;

    fn bitor(self, rhs: ClassValue) -> Result<ClassValue> {
        Operand::Token(self).union(&rhs)
    }
}

impl<O: Into<Operand>> Sub<O> for ClassValue {
    type Output = Result<ClassValue>;

    fn sub(self, rhs: O) -> Result<ClassValue> {
        self.subtract(rhs)
    }
}

impl<'a, O: Into<Operand>> Sub<O> for &'a ClassValue {
    type Output = Result<ClassValue>;

    fn sub(self, rhs: O) -> Result<ClassValue> {
        self.subtract(rhs)
    }
}

impl Sub<ClassValue> for char {
    type Output = Result<ClassValue>;

    fn sub(self, rhs: ClassValue) -> Result<ClassValue> {
        Operand::Char(self).subtract(&rhs)
    }
}

impl Sub<ClassValue> for Token {
    type Output = Result<ClassValue>;

    fn sub(self, rhs: ClassValue) -> Result<ClassValue> {
        Operand::Token(self).subtract(&rhs)
    }
}

impl Not for ClassValue {
    type Output = Result<ClassValue>;

    fn not(self) -> Result<ClassValue> {
        self.negate()
    }
}

impl<'a> Not for &'a ClassValue {
    type Output = Result<ClassValue>;

    fn not(self) -> Result<ClassValue> {
        self.negate()
    }
}
