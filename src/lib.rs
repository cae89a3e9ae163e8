// Copyright 2017 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(missing_docs)]

/*!
This crate provides an algebra over character classes that renders to the
syntax of the `regex` crate.

A [`ClassValue`](struct.ClassValue.html) is a set of characters together with
a [`ClassKind`](enum.ClassKind.html). Classes are combined with union,
subtraction and negation. Each operation checks that its operands can be
combined into a single class and fails with an [`Error`](struct.Error.html)
when they cannot, so that an invalid or empty class is never rendered.

# Example

```
use regex_classes::ClassValue;

let vowels = ClassValue::any_from("aeiou".chars()).unwrap();
let consonants = (ClassValue::any_lowercase_letter() - vowels).unwrap();
assert_eq!(consonants.to_string(), "[b-df-hj-np-tv-z]");

let hex = ClassValue::any_digit()
    .union(ClassValue::any_between('a', 'f').unwrap())
    .unwrap();
assert_eq!(hex.to_string(), "[0-9a-f]");

// A negated class and a non-negated class don't mix.
assert!((ClassValue::any_letter() | ClassValue::any_but_digit()).is_err());
```

# Rendering

Rendering is lazy: a class is converted to text only through its `Display`
impl or a [`Printer`](struct.Printer.html). Ranges are always written in
ascending order and merged, so equal classes render identically. A class of
a single character renders as that character, escaped if needed.

The any-character class renders as `.`, which matches a line feed only when
the `s` flag is enabled by the enclosing pattern. Use
`PrinterBuilder::dot_matches_new_line` to render it as `(?s:.)` instead.

The digit and whitespace classes stand for their ASCII sets and render as
`[[:digit:]]` and `[[:space:]]`, since `\d` and `\s` match Unicode digits and
spaces in the `regex` crate. `\w` stands for the Unicode word characters,
exactly as the `regex` crate defines them, and renders as `\w`.
*/

#[macro_use]
extern crate log;

pub use crate::algebra::{Operand, Token};
pub use crate::ascii::AsciiClass;
pub use crate::class::ClassValue;
pub use crate::error::{Error, ErrorKind, Result, SetOp};
pub use crate::interval::{CodePointRange, RangeSet};
pub use crate::kind::{ClassKind, Polarity, Shorthand};
pub use crate::print::{Printer, PrinterBuilder};
pub use crate::unicode::Script;

mod algebra;
mod ascii;
mod class;
mod error;
mod interval;
mod kind;
pub mod print;
mod unicode;

#[cfg(test)]
mod properties;
