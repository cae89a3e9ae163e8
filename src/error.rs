// Copyright 2017 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::result;

/// A type alias for results produced by building or combining classes.
pub type Result<T> = result::Result<T, Error>;

/// An error that occurred while building or combining character classes.
///
/// Every error is detected eagerly at the offending operation. The operands
/// are recorded in their rendered form so that the message identifies what
/// was being combined, e.g., `[a-z]` and `[[:^digit:]]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    /// The kind of error.
    pub kind: ErrorKind,
    /// The rendered operands involved, left to right. This is empty for
    /// errors raised while constructing a class from raw characters.
    pub operands: Vec<String>,
}

/// The type of an error that occurred while building or combining classes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A range was requested whose start comes after its end.
    InvalidRange {
        /// The requested start of the range.
        start: char,
        /// The requested end of the range.
        end: char,
    },
    /// An operand could not be interpreted as exactly one character.
    InvalidOperand {
        /// The offending operand, verbatim.
        operand: String,
    },
    /// An enumerated class was requested from zero characters.
    NoCharacters,
    /// A union or subtraction mixed a positive class with a negated one.
    IncompatibleClassPolarity {
        /// The operation that was attempted.
        op: SetOp,
    },
    /// The Unicode word character shorthand was used as an operand of a
    /// subtraction.
    GlobalShorthandSubtractionUnsupported,
    /// The "any character" class was negated.
    CannotNegateUniversal,
    /// An operation produced a class that matches no character: a
    /// subtraction removed every character, or a negated class would
    /// exclude every character.
    EmptyClassResult,
    /// No script table is known under the given name.
    UnknownScript {
        /// The name that was looked up.
        name: String,
    },
}

/// A binary set operation between two classes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetOp {
    /// Set union, spelled `|`.
    Union,
    /// Set subtraction, spelled `-`.
    Difference,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error { kind: kind, operands: vec![] }
    }

    pub(crate) fn with_operands(kind: ErrorKind, operands: Vec<String>) -> Error {
        debug!("rejected class operation: {} ({})", kind, operands.join(", "));
        Error { kind: kind, operands: operands }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)?;
        if !self.operands.is_empty() {
            write!(f, " (operands: {})", self.operands.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ErrorKind::*;
        match *self {
            InvalidRange { start, end } => {
                write!(
                    f,
                    "invalid range {:?}-{:?}, start must not come after end",
                    start, end)
            }
            InvalidOperand { ref operand } => {
                write!(f, "{:?} is not a class or a single character", operand)
            }
            NoCharacters => {
                write!(f, "a class needs at least one character")
            }
            IncompatibleClassPolarity { op } => {
                write!(f, "cannot {} a negated class and a non-negated class",
                       op)
            }
            GlobalShorthandSubtractionUnsupported => {
                write!(f, "the Unicode word character class cannot take part \
                           in a subtraction")
            }
            CannotNegateUniversal => {
                write!(f, "the any-character class cannot be negated")
            }
            EmptyClassResult => {
                write!(f, "the operation produced a class matching nothing")
            }
            UnknownScript { ref name } => {
                write!(f, "unknown script '{}'", name)
            }
        }
    }
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SetOp::Union => write!(f, "union"),
            SetOp::Difference => write!(f, "subtract"),
        }
    }
}
