// Copyright 2017 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::interval::RangeSet;
use crate::unicode;

/// The kind of a character class.
///
/// The kind decides both how a class is rendered and which operations it may
/// take part in. Kinds fall into two polarity families: `Positive`,
/// `GlobalShorthand` and `Universal` match the characters of their set,
/// while `Negative` and `NegatedGlobalShorthand` match every character
/// outside of it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ClassKind {
    /// An enumerated class, e.g., `[a-z0-9]`.
    Positive,
    /// A negated enumerated class, e.g., `[^a-z0-9]`.
    Negative,
    /// A predefined class written as a single unit, e.g., `[[:digit:]]` or
    /// `\w`.
    GlobalShorthand(Shorthand),
    /// A negated predefined class written as a single unit, e.g.,
    /// `[[:^digit:]]` or `\W`.
    NegatedGlobalShorthand(Shorthand),
    /// Any character at all, including a line feed.
    Universal,
}

/// Whether a class matches its set or the complement of its set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Polarity {
    /// The class matches the characters in its set.
    Positive,
    /// The class matches the characters outside of its set.
    Negative,
}

/// The predefined classes that have a shorthand spelling.
///
/// Each shorthand is spelled so that the `regex` crate matches exactly its
/// predefined set. In Unicode mode `\d` and `\s` match non-ASCII digits and
/// spaces, so the ASCII sets use the named ASCII classes instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Shorthand {
    /// ASCII decimal digits, spelled `[[:digit:]]`.
    Digit,
    /// ASCII whitespace, spelled `[[:space:]]`.
    Space,
    /// Unicode word characters, spelled `\w`.
    Word,
}

impl ClassKind {
    /// Return the polarity family of this kind.
    pub fn polarity(&self) -> Polarity {
        match *self {
            ClassKind::Positive
            | ClassKind::GlobalShorthand(_)
            | ClassKind::Universal => Polarity::Positive,
            ClassKind::Negative
            | ClassKind::NegatedGlobalShorthand(_) => Polarity::Negative,
        }
    }

    /// Return the shorthand of this kind, if it has one, regardless of
    /// polarity.
    pub fn shorthand(&self) -> Option<Shorthand> {
        match *self {
            ClassKind::GlobalShorthand(s)
            | ClassKind::NegatedGlobalShorthand(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if and only if this is the Unicode word shorthand, in
    /// either polarity.
    pub fn is_global_word(&self) -> bool {
        self.shorthand() == Some(Shorthand::Word)
    }

    /// Return the kind with the opposite polarity.
    ///
    /// `Universal` has no opposite, so `None` is returned for it.
    pub fn negate(&self) -> Option<ClassKind> {
        match *self {
            ClassKind::Positive => Some(ClassKind::Negative),
            ClassKind::Negative => Some(ClassKind::Positive),
            ClassKind::GlobalShorthand(s) => {
                Some(ClassKind::NegatedGlobalShorthand(s))
            }
            ClassKind::NegatedGlobalShorthand(s) => {
                Some(ClassKind::GlobalShorthand(s))
            }
            ClassKind::Universal => None,
        }
    }

    /// Return the enumerated kind of the given polarity.
    pub fn plain(polarity: Polarity) -> ClassKind {
        match polarity {
            Polarity::Positive => ClassKind::Positive,
            Polarity::Negative => ClassKind::Negative,
        }
    }

    /// Return the kind a class of the given polarity and set should have.
    ///
    /// This is a shorthand kind when the set is exactly the predefined set of
    /// a shorthand, and the enumerated kind otherwise.
    pub fn infer(polarity: Polarity, set: &RangeSet) -> ClassKind {
        match (Shorthand::matching(set), polarity) {
            (Some(s), Polarity::Positive) => ClassKind::GlobalShorthand(s),
            (Some(s), Polarity::Negative) => {
                ClassKind::NegatedGlobalShorthand(s)
            }
            (None, polarity) => ClassKind::plain(polarity),
        }
    }
}

impl Shorthand {
    /// All shorthands, widest first.
    pub const ALL: [Shorthand; 3] =
        [Shorthand::Word, Shorthand::Digit, Shorthand::Space];

    /// Return the predefined set of characters of this shorthand.
    pub fn ranges(&self) -> RangeSet {
        match *self {
            Shorthand::Digit => RangeSet::from_table(DIGIT),
            Shorthand::Space => RangeSet::from_table(SPACE),
            Shorthand::Word => unicode::perl_word().clone(),
        }
    }

    /// Return the stand-alone spelling of this shorthand, in either
    /// polarity.
    pub fn syntax(&self, negated: bool) -> &'static str {
        match *self {
            Shorthand::Digit if negated => "[[:^digit:]]",
            Shorthand::Digit => "[[:digit:]]",
            Shorthand::Space if negated => "[[:^space:]]",
            Shorthand::Space => "[[:space:]]",
            Shorthand::Word if negated => r"\W",
            Shorthand::Word => r"\w",
        }
    }

    /// Return the spelling of this shorthand as an item inside a bracket
    /// expression.
    pub fn bracket_item(&self) -> &'static str {
        match *self {
            Shorthand::Digit => "[:digit:]",
            Shorthand::Space => "[:space:]",
            Shorthand::Word => r"\w",
        }
    }

    /// Find the shorthand whose predefined set is exactly `set`.
    fn matching(set: &RangeSet) -> Option<Shorthand> {
        Shorthand::ALL.iter().cloned().find(|s| match *s {
            // Borrow the word table rather than copying it.
            Shorthand::Word => unicode::perl_word() == set,
            _ => s.ranges() == *set,
        })
    }
}

const DIGIT: &[(char, char)] = &[('0', '9')];

const SPACE: &[(char, char)] = &[('\t', '\r'), (' ', ' ')];
