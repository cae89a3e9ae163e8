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

/// The POSIX character classes, restricted to ASCII.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AsciiClass {
    /// `[0-9A-Za-z]`
    Alnum,
    /// `[A-Za-z]`
    Alpha,
    /// `[\x00-\x7F]`
    Ascii,
    /// `[\t ]`
    Blank,
    /// `[\x00-\x1F\x7F]`
    Cntrl,
    /// `[0-9]`
    Digit,
    /// `[!-~]`
    Graph,
    /// `[a-z]`
    Lower,
    /// `[ -~]`
    Print,
    /// `[!-/:-@\[-`{-~]`
    Punct,
    /// `[\t\n\v\f\r ]`
    Space,
    /// `[A-Z]`
    Upper,
    /// `[0-9A-Za-z_]`
    Word,
    /// `[0-9A-Fa-f]`
    Xdigit,
}

impl AsciiClass {
    /// Return the class with the given POSIX name, e.g., `cntrl` for
    /// `AsciiClass::Cntrl`.
    ///
    /// If no class has that name, then `None` is returned.
    pub fn from_name(name: &str) -> Option<AsciiClass> {
        use self::AsciiClass::*;
        match name {
            "alnum" => Some(Alnum),
            "alpha" => Some(Alpha),
            "ascii" => Some(Ascii),
            "blank" => Some(Blank),
            "cntrl" => Some(Cntrl),
            "digit" => Some(Digit),
            "graph" => Some(Graph),
            "lower" => Some(Lower),
            "print" => Some(Print),
            "punct" => Some(Punct),
            "space" => Some(Space),
            "upper" => Some(Upper),
            "word" => Some(Word),
            "xdigit" => Some(Xdigit),
            _ => None,
        }
    }

    /// Return the characters of this class.
    pub fn ranges(&self) -> RangeSet {
        RangeSet::from_table(self.table())
    }

    fn table(&self) -> &'static [(char, char)] {
        use self::AsciiClass::*;
        match *self {
            Alnum => &[('0', '9'), ('A', 'Z'), ('a', 'z')],
            Alpha => &[('A', 'Z'), ('a', 'z')],
            Ascii => &[('\x00', '\x7F')],
            Blank => &[('\t', '\t'), (' ', ' ')],
            Cntrl => &[('\x00', '\x1F'), ('\x7F', '\x7F')],
            Digit => &[('0', '9')],
            Graph => &[('!', '~')],
            Lower => &[('a', 'z')],
            Print => &[(' ', '~')],
            Punct => &[('!', '/'), (':', '@'), ('[', '`'), ('{', '~')],
            Space => &[('\t', '\r'), (' ', ' ')],
            Upper => &[('A', 'Z')],
            Word => &[('0', '9'), ('A', 'Z'), ('_', '_'), ('a', 'z')],
            Xdigit => &[('0', '9'), ('A', 'F'), ('a', 'f')],
        }
    }
}
