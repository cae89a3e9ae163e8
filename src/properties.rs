// Copyright 2017 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::char;

use quickcheck::{QuickCheck, TestResult, Testable};
use regex::Regex;

use crate::class::ClassValue;
use crate::error::ErrorKind;
use crate::interval::RangeSet;
use crate::kind::{ClassKind, Polarity};
use crate::print::{Printer, PrinterBuilder};

fn qc<T: Testable>(t: T) {
    QuickCheck::new()
        .tests(2_000)
        .max_tests(10_000)
        .quickcheck(t);
}

fn set(pairs: &[(char, char)]) -> RangeSet {
    let ordered = pairs.iter().map(|&(a, b)| if a <= b { (a, b) } else { (b, a) });
    RangeSet::from_ranges(ordered).unwrap()
}

fn class(polarity: Polarity, pairs: &[(char, char)]) -> Option<ClassValue> {
    let set = set(pairs);
    // Negating a full set would exclude every character.
    if set.is_empty() || set.is_full() {
        return None;
    }
    Some(ClassValue::from_parts(ClassKind::infer(polarity, &set), set))
}

/// Characters worth checking membership for: the bounds of every range of
/// the given sets, and their neighbours.
fn samples(sets: &[&RangeSet]) -> Vec<char> {
    let mut chars = vec!['\0', 'a', '\u{D7FF}', '\u{E000}', char::MAX];
    for set in sets {
        for r in set.iter() {
            for &c in &[r.start(), r.end()] {
                let cp = c as u32;
                chars.push(c);
                chars.extend(cp.checked_sub(1).and_then(char::from_u32));
                chars.extend(char::from_u32(cp + 1));
            }
        }
    }
    chars
}

// Canonical form.

#[test]
fn canonicalize_is_idempotent() {
    fn prop(pairs: Vec<(char, char)>) -> bool {
        let once = set(&pairs);
        once.canonicalize() == once
    }
    qc(prop as fn(Vec<(char, char)>) -> bool);
}

#[test]
fn ranges_are_sorted_and_apart() {
    fn prop(pairs: Vec<(char, char)>) -> bool {
        set(&pairs).ranges().windows(2).all(|w| {
            let mut next = w[0].end() as u32 + 1;
            if next == 0xD800 {
                next = 0xE000;
            }
            w[1].start() as u32 > next
        })
    }
    qc(prop as fn(Vec<(char, char)>) -> bool);
}

#[test]
fn canonical_form_keeps_membership() {
    fn prop(pairs: Vec<(char, char)>, c: char) -> bool {
        let expected = pairs.iter().any(|&(a, b)| {
            (a <= c && c <= b) || (b <= c && c <= a)
        });
        set(&pairs).contains(c) == expected
    }
    qc(prop as fn(Vec<(char, char)>, char) -> bool);
}

// Union.

#[test]
fn union_commutes() {
    fn prop(a: Vec<(char, char)>, b: Vec<(char, char)>) -> TestResult {
        let (a, b) = match (class(Polarity::Positive, &a), class(Polarity::Positive, &b)) {
            (Some(a), Some(b)) => (a, b),
            _ => return TestResult::discard(),
        };
        TestResult::from_bool(a.union(&b).unwrap() == b.union(&a).unwrap())
    }
    qc(prop as fn(Vec<(char, char)>, Vec<(char, char)>) -> TestResult);
}

#[test]
fn union_associates() {
    fn prop(
        a: Vec<(char, char)>,
        b: Vec<(char, char)>,
        c: Vec<(char, char)>,
    ) -> TestResult {
        let classes = (
            class(Polarity::Negative, &a),
            class(Polarity::Negative, &b),
            class(Polarity::Negative, &c),
        );
        let (a, b, c) = match classes {
            (Some(a), Some(b), Some(c)) => (a, b, c),
            _ => return TestResult::discard(),
        };
        let left = a.union(&b).and_then(|ab| ab.union(&c));
        let right = b.union(&c).and_then(|bc| a.union(&bc));
        let ok = match (left, right) {
            (Ok(left), Ok(right)) => {
                left == right && left.to_string() == right.to_string()
            }
            // Both sides exclude every character.
            (Err(l), Err(r)) => {
                l.kind == ErrorKind::EmptyClassResult
                    && r.kind == ErrorKind::EmptyClassResult
            }
            _ => false,
        };
        TestResult::from_bool(ok)
    }
    qc(prop as fn(Vec<(char, char)>, Vec<(char, char)>, Vec<(char, char)>)
                  -> TestResult);
}

#[test]
fn union_matches_either() {
    fn prop(a: Vec<(char, char)>, b: Vec<(char, char)>) -> TestResult {
        let (a, b) = match (class(Polarity::Positive, &a), class(Polarity::Positive, &b)) {
            (Some(a), Some(b)) => (a, b),
            _ => return TestResult::discard(),
        };
        let union = a.union(&b).unwrap();
        let ok = samples(&[a.ranges(), b.ranges()]).into_iter().all(|x| {
            union.is_match(x) == (a.is_match(x) || b.is_match(x))
        });
        TestResult::from_bool(ok)
    }
    qc(prop as fn(Vec<(char, char)>, Vec<(char, char)>) -> TestResult);
}

// Subtraction.

#[test]
fn subtraction_matches_left_but_not_right() {
    fn prop(a: Vec<(char, char)>, b: Vec<(char, char)>) -> TestResult {
        let (a, b) = match (class(Polarity::Positive, &a), class(Polarity::Positive, &b)) {
            (Some(a), Some(b)) => (a, b),
            _ => return TestResult::discard(),
        };
        let samples = samples(&[a.ranges(), b.ranges()]);
        let ok = match a.subtract(&b) {
            Ok(diff) => samples.into_iter().all(|x| {
                diff.is_match(x) == (a.is_match(x) && !b.is_match(x))
            }),
            Err(err) => {
                err.kind == ErrorKind::EmptyClassResult
                    && a.ranges().is_subset(b.ranges())
            }
        };
        TestResult::from_bool(ok)
    }
    qc(prop as fn(Vec<(char, char)>, Vec<(char, char)>) -> TestResult);
}

#[test]
fn subtraction_of_negated_classes_removes_excluded_chars() {
    fn prop(a: Vec<(char, char)>, b: Vec<(char, char)>) -> TestResult {
        let (a, b) = match (class(Polarity::Negative, &a), class(Polarity::Negative, &b)) {
            (Some(a), Some(b)) => (a, b),
            _ => return TestResult::discard(),
        };
        let diff = match a.subtract(&b) {
            Ok(diff) => diff,
            Err(_) => return TestResult::from_bool(a.ranges().is_subset(b.ranges())),
        };
        let ok = diff.kind() == ClassKind::Negative
            && diff.ranges() == &a.ranges().difference(b.ranges());
        TestResult::from_bool(ok)
    }
    qc(prop as fn(Vec<(char, char)>, Vec<(char, char)>) -> TestResult);
}

#[test]
fn self_subtraction_is_empty() {
    fn prop(a: Vec<(char, char)>, negated: bool) -> TestResult {
        let polarity = if negated { Polarity::Negative } else { Polarity::Positive };
        let a = match class(polarity, &a) {
            Some(a) if !a.kind().is_global_word() => a,
            _ => return TestResult::discard(),
        };
        let err = a.subtract(&a).unwrap_err();
        TestResult::from_bool(err.kind == ErrorKind::EmptyClassResult)
    }
    qc(prop as fn(Vec<(char, char)>, bool) -> TestResult);
}

// Negation.

#[test]
fn negation_is_an_involution() {
    fn prop(a: Vec<(char, char)>, negated: bool) -> TestResult {
        let polarity = if negated { Polarity::Negative } else { Polarity::Positive };
        let a = match class(polarity, &a) {
            Some(a) => a,
            None => return TestResult::discard(),
        };
        let once = a.negate().unwrap();
        let twice = once.negate().unwrap();
        let flips = samples(&[a.ranges()]).into_iter().all(|x| {
            once.is_match(x) != a.is_match(x)
        });
        TestResult::from_bool(twice == a && flips)
    }
    qc(prop as fn(Vec<(char, char)>, bool) -> TestResult);
}

// Rendering.

#[test]
fn rendering_agrees_with_membership() {
    fn prop(bytes: Vec<u8>, negated: bool) -> TestResult {
        let chars: Vec<char> = bytes.iter().map(|&b| (b & 0x7F) as char).collect();
        let mut cls = match ClassValue::any_from(chars) {
            Ok(cls) => cls,
            Err(_) => return TestResult::discard(),
        };
        if negated {
            cls = cls.negate().unwrap();
        }
        TestResult::from_bool(renders_faithfully(&cls, &mut Printer::new()))
    }
    qc(prop as fn(Vec<u8>, bool) -> TestResult);
}

#[test]
fn rendering_with_shorthands_agrees_with_membership() {
    fn prop(bytes: Vec<u8>, digit: bool, space: bool, negated: bool) -> TestResult {
        let chars: Vec<char> = bytes.iter().map(|&b| (b & 0x7F) as char).collect();
        let mut cls = match ClassValue::any_from(chars) {
            Ok(cls) => cls,
            Err(_) if digit => ClassValue::any_digit(),
            Err(_) if space => ClassValue::any_whitespace(),
            Err(_) => return TestResult::discard(),
        };
        if digit {
            cls = cls.union(&ClassValue::any_digit()).unwrap();
        }
        if space {
            cls = cls.union(&ClassValue::any_whitespace()).unwrap();
        }
        if negated {
            cls = cls.negate().unwrap();
        }
        let mut compressed = PrinterBuilder::new().shorthands(true).build();
        TestResult::from_bool(
            renders_faithfully(&cls, &mut Printer::new())
                && renders_faithfully(&cls, &mut compressed))
    }
    qc(prop as fn(Vec<u8>, bool, bool, bool) -> TestResult);
}

/// Compile the class as rendered by `printer` and compare the regex with the
/// class's membership test on ASCII and on non-ASCII digits, spaces and word
/// characters.
fn renders_faithfully(cls: &ClassValue, printer: &mut Printer) -> bool {
    let mut rendered = String::new();
    printer.print(cls, &mut rendered).unwrap();
    let re = Regex::new(&format!("^{}$", rendered)).unwrap();
    let non_ascii = "\u{663}\u{966}\u{FF15}\u{85}\u{A0}\u{2003}\u{3000}é大";
    (0u8..0x80).map(|b| b as char).chain(non_ascii.chars()).all(|c| {
        re.is_match(&c.to_string()) == cls.is_match(c)
    })
}
