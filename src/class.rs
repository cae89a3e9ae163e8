// Copyright 2017 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::ascii::AsciiClass;
use crate::error::{Error, ErrorKind, Result};
use crate::interval::RangeSet;
use crate::kind::{ClassKind, Polarity, Shorthand};
use crate::print::Printer;
use crate::unicode::Script;

/// A character class: a pattern that matches exactly one character out of a
/// set.
///
/// A class is a set of characters together with a kind. The kind says
/// whether the class matches the set or its complement, and whether the set
/// is a predefined one with a shorthand escape. Classes are built with the
/// `any_*` and `any_but_*` constructors and combined with `union`,
/// `subtract` and `negate` (or `|`, `-` and `!`), each of which returns a new
/// class.
///
/// A class is converted to pattern syntax with its `Display` impl or with a
/// configured [`Printer`](struct.Printer.html). The text it renders to is a
/// self-contained unit that may be quantified without further grouping.
///
/// A class never matches nothing: every operation that would produce an
/// empty class fails instead.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ClassValue {
    kind: ClassKind,
    set: RangeSet,
}

impl ClassValue {
    pub(crate) fn from_parts(kind: ClassKind, set: RangeSet) -> ClassValue {
        ClassValue { kind: kind, set: set }
    }

    /// A class matching exactly the given character.
    pub(crate) fn literal(c: char) -> ClassValue {
        ClassValue::positive(RangeSet::from_singles(Some(c)))
    }

    fn positive(set: RangeSet) -> ClassValue {
        ClassValue::from_parts(ClassKind::Positive, set)
    }

    fn shorthand(shorthand: Shorthand) -> ClassValue {
        ClassValue::from_parts(
            ClassKind::GlobalShorthand(shorthand), shorthand.ranges())
    }

    /// Flip the polarity of a class known not to be `Universal`.
    fn inverted(self) -> ClassValue {
        match self.kind.negate() {
            Some(kind) => ClassValue::from_parts(kind, self.set),
            None => self,
        }
    }

    /// Matches any character, including a line feed.
    pub fn any() -> ClassValue {
        ClassValue::from_parts(ClassKind::Universal, RangeSet::full())
    }

    /// Matches an ASCII letter, `[A-Za-z]`.
    pub fn any_letter() -> ClassValue {
        ClassValue::positive(AsciiClass::Alpha.ranges())
    }

    /// Matches an ASCII lower case letter, `[a-z]`.
    pub fn any_lowercase_letter() -> ClassValue {
        ClassValue::positive(AsciiClass::Lower.ranges())
    }

    /// Matches an ASCII upper case letter, `[A-Z]`.
    pub fn any_uppercase_letter() -> ClassValue {
        ClassValue::positive(AsciiClass::Upper.ranges())
    }

    /// Matches an ASCII decimal digit, `[[:digit:]]`.
    pub fn any_digit() -> ClassValue {
        ClassValue::shorthand(Shorthand::Digit)
    }

    /// Matches an ASCII word character, `[0-9A-Z_a-z]`.
    ///
    /// See `any_unicode_word_char` for the Unicode aware variant.
    pub fn any_word_char() -> ClassValue {
        ClassValue::positive(AsciiClass::Word.ranges())
    }

    /// Matches a Unicode word character, `\w`.
    ///
    /// This class cannot take part in a subtraction, since what remains of
    /// it has no concise form.
    pub fn any_unicode_word_char() -> ClassValue {
        ClassValue::shorthand(Shorthand::Word)
    }

    /// Matches an ASCII punctuation character.
    pub fn any_punctuation() -> ClassValue {
        ClassValue::positive(AsciiClass::Punct.ranges())
    }

    /// Matches an ASCII whitespace character, `[[:space:]]`.
    pub fn any_whitespace() -> ClassValue {
        ClassValue::shorthand(Shorthand::Space)
    }

    /// Matches any one of the given characters.
    ///
    /// This fails with `NoCharacters` if no characters are given.
    pub fn any_from<I>(chars: I) -> Result<ClassValue>
    where I: IntoIterator<Item=char>
    {
        let set = RangeSet::from_singles(chars);
        if set.is_empty() {
            return Err(Error::new(ErrorKind::NoCharacters));
        }
        Ok(ClassValue::positive(set))
    }

    /// Matches any character from `start` to `end`, inclusive.
    ///
    /// This fails with `InvalidRange` if `start` comes after `end`.
    pub fn any_between(start: char, end: char) -> Result<ClassValue> {
        RangeSet::from_range(start, end).map(ClassValue::positive)
    }

    /// Matches a letter of the given script.
    pub fn any_script_letter(script: Script) -> ClassValue {
        ClassValue::positive(script.letters())
    }

    /// Matches a letter of the script with the given name.
    ///
    /// This fails with `UnknownScript` if no script has that name. See
    /// `Script::from_name` for the names that are recognized.
    pub fn any_script_letter_named(name: &str) -> Result<ClassValue> {
        match Script::from_name(name) {
            Some(script) => Ok(ClassValue::any_script_letter(script)),
            None => Err(Error::new(ErrorKind::UnknownScript {
                name: name.to_string(),
            })),
        }
    }

    /// Matches a character of the given POSIX class.
    pub fn ascii(class: AsciiClass) -> ClassValue {
        ClassValue::positive(class.ranges())
    }

    /// Matches anything but an ASCII letter, `[^A-Za-z]`.
    pub fn any_but_letter() -> ClassValue {
        ClassValue::any_letter().inverted()
    }

    /// Matches anything but an ASCII lower case letter, `[^a-z]`.
    pub fn any_but_lowercase_letter() -> ClassValue {
        ClassValue::any_lowercase_letter().inverted()
    }

    /// Matches anything but an ASCII upper case letter, `[^A-Z]`.
    pub fn any_but_uppercase_letter() -> ClassValue {
        ClassValue::any_uppercase_letter().inverted()
    }

    /// Matches anything but an ASCII decimal digit, `[[:^digit:]]`.
    pub fn any_but_digit() -> ClassValue {
        ClassValue::any_digit().inverted()
    }

    /// Matches anything but an ASCII word character, `[^0-9A-Z_a-z]`.
    pub fn any_but_word_char() -> ClassValue {
        ClassValue::any_word_char().inverted()
    }

    /// Matches anything but a Unicode word character, `\W`.
    pub fn any_but_unicode_word_char() -> ClassValue {
        ClassValue::any_unicode_word_char().inverted()
    }

    /// Matches anything but an ASCII punctuation character.
    pub fn any_but_punctuation() -> ClassValue {
        ClassValue::any_punctuation().inverted()
    }

    /// Matches anything but an ASCII whitespace character, `[[:^space:]]`.
    pub fn any_but_whitespace() -> ClassValue {
        ClassValue::any_whitespace().inverted()
    }

    /// Matches anything but the given characters.
    pub fn any_but_from<I>(chars: I) -> Result<ClassValue>
    where I: IntoIterator<Item=char>
    {
        ClassValue::any_from(chars)?.negate()
    }

    /// Matches anything outside of `start` to `end`.
    ///
    /// This fails with `EmptyClassResult` if the range covers every
    /// character.
    pub fn any_but_between(start: char, end: char) -> Result<ClassValue> {
        ClassValue::any_between(start, end)?.negate()
    }

    /// Matches anything but a letter of the given script.
    pub fn any_but_script_letter(script: Script) -> ClassValue {
        ClassValue::any_script_letter(script).inverted()
    }

    /// Return the kind of this class.
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Return the polarity family of this class.
    pub fn polarity(&self) -> Polarity {
        self.kind.polarity()
    }

    /// Return the set of characters of this class.
    ///
    /// For negative kinds this is the set of characters the class does *not*
    /// match.
    pub fn ranges(&self) -> &RangeSet {
        &self.set
    }

    /// Returns true if and only if this class matches the given character.
    pub fn is_match(&self, c: char) -> bool {
        match self.kind {
            ClassKind::Universal => true,
            ClassKind::Positive | ClassKind::GlobalShorthand(_) => {
                self.set.contains(c)
            }
            ClassKind::Negative | ClassKind::NegatedGlobalShorthand(_) => {
                !self.set.contains(c)
            }
        }
    }

    /// If this class matches exactly one character, then return it.
    pub fn as_literal(&self) -> Option<char> {
        match self.kind {
            ClassKind::Positive => self.set.single(),
            _ => None,
        }
    }

    /// Returns false if and only if this class is a single literal
    /// character, which is rendered without any class syntax.
    pub fn is_class(&self) -> bool {
        self.as_literal().is_none()
    }
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Printer::new().print(self, f)
    }
}
