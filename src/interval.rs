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
use std::cmp;
use std::fmt;
use std::slice;

use crate::error::{Error, ErrorKind, Result};

/// A single range of characters represented by Unicode scalar values.
///
/// The range is closed. That is, the start and end of the range are included
/// in the range. A single character is the range whose start and end are
/// equal.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct CodePointRange {
    start: char,
    end: char,
}

impl fmt::Debug for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let show = |c: char| {
            if c.is_whitespace() || c.is_control() {
                format!("0x{:X}", c as u32)
            } else {
                c.to_string()
            }
        };
        f.debug_struct("CodePointRange")
            .field("start", &show(self.start))
            .field("end", &show(self.end))
            .finish()
    }
}

impl CodePointRange {
    /// Create a new range.
    ///
    /// If `start` comes after `end` in code point order, then an
    /// `InvalidRange` error is returned.
    pub fn new(start: char, end: char) -> Result<CodePointRange> {
        if start > end {
            return Err(Error::new(ErrorKind::InvalidRange {
                start: start,
                end: end,
            }));
        }
        Ok(CodePointRange { start: start, end: end })
    }

    /// Create a range containing exactly one character.
    pub fn single(c: char) -> CodePointRange {
        CodePointRange { start: c, end: c }
    }

    /// Create a range from bounds that are known to be ordered, such as
    /// those in a static table.
    fn ordered(a: char, b: char) -> CodePointRange {
        CodePointRange { start: cmp::min(a, b), end: cmp::max(a, b) }
    }

    /// Return the start of this range.
    pub fn start(&self) -> char {
        self.start
    }

    /// Return the end of this range.
    pub fn end(&self) -> char {
        self.end
    }

    /// Returns true if and only if this range contains exactly one character.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if and only if the given character is in this range.
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }

    /// Returns the number of characters in this range.
    ///
    /// Surrogate code points are not characters and are never counted.
    pub fn len(&self) -> usize {
        let (start, end) = (self.start as u32, self.end as u32);
        let mut len = end - start + 1;
        if start < 0xD800 && end > 0xDFFF {
            len -= 0x800;
        }
        len as usize
    }

    /// Returns true if and only if the two ranges overlap or touch, which
    /// means their union is itself a single range.
    fn is_contiguous(&self, other: &CodePointRange) -> bool {
        let (lo, hi) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        match increment(lo.end) {
            None => true,
            Some(next) => hi.start <= next,
        }
    }

    /// Subtract `other` from this range, returning what remains to its left
    /// and to its right. Both remain exactly when `other` falls strictly
    /// inside this range.
    fn difference(
        &self,
        other: &CodePointRange,
    ) -> (Option<CodePointRange>, Option<CodePointRange>) {
        if other.end < self.start {
            return (None, Some(*self));
        }
        if self.end < other.start {
            return (Some(*self), None);
        }
        let left = if other.start > self.start {
            decrement(other.start).map(|end| {
                CodePointRange { start: self.start, end: end }
            })
        } else {
            None
        };
        let right = if other.end < self.end {
            increment(other.end).map(|start| {
                CodePointRange { start: start, end: self.end }
            })
        } else {
            None
        };
        (left, right)
    }
}

/// A canonical set of characters, stored as sorted ranges.
///
/// The ranges of a set are sorted by their start, and no two ranges overlap
/// or touch. (`a-c` and `d-f` touch, so they are always stored as `a-f`.)
/// Consequently, two sets contain the same characters if and only if they
/// are equal.
///
/// A set is never mutated after construction. Every operation returns a new
/// set.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RangeSet {
    ranges: Vec<CodePointRange>,
}

impl RangeSet {
    /// Create a set from a sequence of ranges, in any order. The ranges may
    /// overlap.
    pub fn new<I>(ranges: I) -> RangeSet
    where I: IntoIterator<Item=CodePointRange>
    {
        RangeSet { ranges: canonicalize(ranges.into_iter().collect()) }
    }

    /// Create the set containing no characters.
    pub fn empty() -> RangeSet {
        RangeSet { ranges: vec![] }
    }

    /// Create the set containing every Unicode scalar value.
    pub fn full() -> RangeSet {
        RangeSet {
            ranges: vec![CodePointRange { start: '\0', end: char::MAX }],
        }
    }

    /// Create a set from individual characters. Duplicates and neighbouring
    /// characters are merged.
    pub fn from_singles<I>(chars: I) -> RangeSet
    where I: IntoIterator<Item=char>
    {
        RangeSet::new(chars.into_iter().map(CodePointRange::single))
    }

    /// Create a set from a single range.
    ///
    /// This fails with `InvalidRange` when `start` comes after `end`.
    pub fn from_range(start: char, end: char) -> Result<RangeSet> {
        Ok(RangeSet { ranges: vec![CodePointRange::new(start, end)?] })
    }

    /// Create a set from `(start, end)` pairs.
    ///
    /// This fails with `InvalidRange` on the first pair whose start comes
    /// after its end.
    pub fn from_ranges<I>(pairs: I) -> Result<RangeSet>
    where I: IntoIterator<Item=(char, char)>
    {
        let mut ranges = vec![];
        for (start, end) in pairs {
            ranges.push(CodePointRange::new(start, end)?);
        }
        Ok(RangeSet::new(ranges))
    }

    /// Create a set from a static table of ordered pairs.
    pub(crate) fn from_table(table: &[(char, char)]) -> RangeSet {
        RangeSet::new(
            table.iter().map(|&(s, e)| CodePointRange::ordered(s, e)))
    }

    /// Return this set in canonical form.
    ///
    /// Sets are canonical from construction, so this is the identity. It
    /// exists so that the merge sweep can be checked to be idempotent.
    pub fn canonicalize(&self) -> RangeSet {
        RangeSet { ranges: canonicalize(self.ranges.clone()) }
    }

    /// Return the ranges of this set in ascending order.
    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    /// Return an iterator over the ranges of this set in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, CodePointRange> {
        self.ranges.iter()
    }

    /// Returns true if and only if this set contains no characters.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns true if and only if this set contains every Unicode scalar
    /// value.
    pub fn is_full(&self) -> bool {
        match self.ranges.as_slice() {
            [r] => r.start == '\0' && r.end == char::MAX,
            _ => false,
        }
    }

    /// If this set contains exactly one character, then return it.
    pub fn single(&self) -> Option<char> {
        match self.ranges.as_slice() {
            [r] if r.is_single() => Some(r.start),
            _ => None,
        }
    }

    /// Returns true if and only if the given character is in this set.
    pub fn contains(&self, c: char) -> bool {
        self.ranges
            .binary_search_by(|r| {
                if r.end < c {
                    cmp::Ordering::Less
                } else if r.start > c {
                    cmp::Ordering::Greater
                } else {
                    cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Returns true if and only if every character of this set is also in
    /// `other`.
    pub fn is_subset(&self, other: &RangeSet) -> bool {
        self.difference(other).is_empty()
    }

    /// Return the union of this set and `other`.
    pub fn union(&self, other: &RangeSet) -> RangeSet {
        let mut ranges = Vec::with_capacity(
            self.ranges.len() + other.ranges.len());
        ranges.extend_from_slice(&self.ranges);
        ranges.extend_from_slice(&other.ranges);
        RangeSet { ranges: canonicalize(ranges) }
    }

    /// Return the characters of this set that are not in `other`.
    pub fn difference(&self, other: &RangeSet) -> RangeSet {
        // Both sides are sorted and disjoint, so a range of `other` that ends
        // before the current range of `self` can never overlap a later one.
        let mut ranges = vec![];
        let mut b = 0;
        for &range in &self.ranges {
            let mut rest = Some(range);
            while b < other.ranges.len() && other.ranges[b].end < range.start {
                b += 1;
            }
            let mut i = b;
            while let Some(cur) = rest {
                let sub = match other.ranges.get(i) {
                    Some(sub) if sub.start <= cur.end => sub,
                    _ => break,
                };
                let (left, right) = cur.difference(sub);
                if let Some(left) = left {
                    ranges.push(left);
                }
                rest = right;
                i += 1;
            }
            if let Some(cur) = rest {
                ranges.push(cur);
            }
        }
        RangeSet { ranges: canonicalize(ranges) }
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a CodePointRange;
    type IntoIter = slice::Iter<'a, CodePointRange>;

    fn into_iter(self) -> slice::Iter<'a, CodePointRange> {
        self.iter()
    }
}

/// Sort the given ranges by their start, then merge every range that
/// overlaps or touches its predecessor in a single left-to-right sweep.
fn canonicalize(mut ranges: Vec<CodePointRange>) -> Vec<CodePointRange> {
    ranges.sort();
    let mut merged: Vec<CodePointRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if last.is_contiguous(&range) {
                last.end = cmp::max(last.end, range.end);
                continue;
            }
        }
        merged.push(range);
    }
    merged
}

/// The character immediately after `c`, skipping the surrogate block.
fn increment(c: char) -> Option<char> {
    match c {
        '\u{D7FF}' => Some('\u{E000}'),
        c => char::from_u32(c as u32 + 1),
    }
}

/// The character immediately before `c`, skipping the surrogate block.
fn decrement(c: char) -> Option<char> {
    match c {
        '\0' => None,
        '\u{E000}' => Some('\u{D7FF}'),
        c => char::from_u32(c as u32 - 1),
    }
}
