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
This module provides a printer for character classes.

The printed form of a class is valid pattern syntax for the `regex` crate and
is self-contained: it may be quantified or concatenated without wrapping it in
a group.
*/

use std::fmt;

use regex_syntax::is_meta_character;

use crate::class::ClassValue;
use crate::interval::RangeSet;
use crate::kind::{ClassKind, Shorthand};

/// A builder for constructing a printer.
///
/// Note that since a printer doesn't have any configuration knobs that can
/// fail, this builder never returns an error.
#[derive(Clone, Debug)]
pub struct PrinterBuilder {
    collapse_literals: bool,
    shorthands: bool,
    dot_matches_new_line: bool,
}

impl Default for PrinterBuilder {
    fn default() -> PrinterBuilder {
        PrinterBuilder::new()
    }
}

impl PrinterBuilder {
    /// Create a new printer builder with a default configuration.
    pub fn new() -> PrinterBuilder {
        PrinterBuilder {
            collapse_literals: true,
            shorthands: false,
            dot_matches_new_line: false,
        }
    }

    /// Build a printer using the current configuration.
    pub fn build(&self) -> Printer {
        Printer { config: self.clone() }
    }

    /// When enabled (the default), a class matching exactly one character is
    /// printed as that character, escaped if necessary, rather than as a
    /// one element bracket expression.
    pub fn collapse_literals(&mut self, yes: bool) -> &mut PrinterBuilder {
        self.collapse_literals = yes;
        self
    }

    /// When enabled, the characters of a shorthand are written as its
    /// bracket item whenever all of them are present, e.g., `[[:digit:]a-f]`
    /// instead of `[0-9a-f]`.
    ///
    /// This is disabled by default.
    pub fn shorthands(&mut self, yes: bool) -> &mut PrinterBuilder {
        self.shorthands = yes;
        self
    }

    /// When enabled, the any-character class is printed as `(?s:.)`, which
    /// matches a line feed no matter which flags surround it. Otherwise it is
    /// printed as `.`, which relies on the `s` flag being set by the pattern
    /// it is embedded in.
    ///
    /// This is disabled by default.
    pub fn dot_matches_new_line(&mut self, yes: bool) -> &mut PrinterBuilder {
        self.dot_matches_new_line = yes;
        self
    }
}

/// A printer for a character class.
///
/// A printer converts a class to its pattern syntax. A printer is cheap to
/// build and may be reused.
#[derive(Clone, Debug)]
pub struct Printer {
    config: PrinterBuilder,
}

impl Default for Printer {
    fn default() -> Printer {
        Printer::new()
    }
}

impl Printer {
    /// Create a new printer with the default configuration.
    pub fn new() -> Printer {
        PrinterBuilder::new().build()
    }

    /// Print the given class to the given writer. The writer must implement
    /// `fmt::Write`. Typical implementations of `fmt::Write` that can be used
    /// here are a `fmt::Formatter` (which is available in `fmt::Display`
    /// implementations) or a `&mut String`.
    pub fn print<W: fmt::Write>(
        &mut self,
        class: &ClassValue,
        wtr: W,
    ) -> fmt::Result {
        Writer { config: &self.config, wtr: wtr }.write_class(class)
    }
}

struct Writer<'p, W> {
    config: &'p PrinterBuilder,
    wtr: W,
}

impl<'p, W: fmt::Write> Writer<'p, W> {
    fn write_class(&mut self, class: &ClassValue) -> fmt::Result {
        match class.kind() {
            ClassKind::Universal if self.config.dot_matches_new_line => {
                self.wtr.write_str("(?s:.)")
            }
            ClassKind::Universal => self.wtr.write_str("."),
            ClassKind::GlobalShorthand(s) => self.wtr.write_str(s.syntax(false)),
            ClassKind::NegatedGlobalShorthand(s) => {
                self.wtr.write_str(s.syntax(true))
            }
            ClassKind::Positive => {
                if self.config.collapse_literals {
                    if let Some(c) = class.as_literal() {
                        return self.write_literal_char(c);
                    }
                }
                self.write_bracket(class.ranges(), false)
            }
            ClassKind::Negative => self.write_bracket(class.ranges(), true),
        }
    }

    fn write_bracket(&mut self, set: &RangeSet, negated: bool) -> fmt::Result {
        self.wtr.write_str(if negated { "[^" } else { "[" })?;
        let mut rest = set.clone();
        if self.config.shorthands {
            for shorthand in Shorthand::ALL.iter() {
                let chars = shorthand.ranges();
                if chars.is_subset(&rest) {
                    self.wtr.write_str(shorthand.bracket_item())?;
                    rest = rest.difference(&chars);
                }
            }
        }
        for range in rest.iter() {
            self.write_class_char(range.start())?;
            if !range.is_single() {
                self.wtr.write_str("-")?;
                self.write_class_char(range.end())?;
            }
        }
        self.wtr.write_str("]")
    }

    fn write_literal_char(&mut self, c: char) -> fmt::Result {
        if is_meta_character(c) {
            self.wtr.write_str("\\")?;
            return self.wtr.write_char(c);
        }
        self.write_char_or_escape(c)
    }

    fn write_class_char(&mut self, c: char) -> fmt::Result {
        if is_class_meta_character(c) {
            self.wtr.write_str("\\")?;
            return self.wtr.write_char(c);
        }
        self.write_char_or_escape(c)
    }

    fn write_char_or_escape(&mut self, c: char) -> fmt::Result {
        match c {
            '\t' => self.wtr.write_str(r"\t"),
            '\n' => self.wtr.write_str(r"\n"),
            '\x0B' => self.wtr.write_str(r"\v"),
            '\x0C' => self.wtr.write_str(r"\f"),
            '\r' => self.wtr.write_str(r"\r"),
            ' ' => self.wtr.write_char(' '),
            c if c.is_control() || c.is_whitespace() => {
                write!(self.wtr, r"\x{{{:X}}}", c as u32)
            }
            c => self.wtr.write_char(c),
        }
    }
}

/// Returns true if the given character has significance inside a bracket
/// expression. These are always escaped there, even where the engine would
/// read them literally.
fn is_class_meta_character(c: char) -> bool {
    match c {
        '\\' | ']' | '[' | '^' | '-' | '&' | '~' => true,
        _ => false,
    }
}
