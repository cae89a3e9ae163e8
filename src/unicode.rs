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
use std::sync::OnceLock;

use regex_syntax::hir::{Class, HirKind};
use regex_syntax::Parser;

use crate::interval::RangeSet;

/// Return the set of Unicode word characters, i.e., what `\w` matches in
/// Unicode mode.
///
/// The table is taken from `regex-syntax` on first use, so that this set
/// always agrees with the engine the rendered patterns are compiled by.
pub fn perl_word() -> &'static RangeSet {
    static PERL_WORD: OnceLock<RangeSet> = OnceLock::new();
    PERL_WORD.get_or_init(|| {
        let hir = Parser::new()
            .parse(r"\w")
            .expect("\\w always parses with the default Unicode tables");
        match *hir.kind() {
            HirKind::Class(Class::Unicode(ref cls)) => {
                let table: Vec<(char, char)> = cls.ranges()
                    .iter()
                    .map(|r| (r.start(), r.end()))
                    .collect();
                RangeSet::from_table(&table)
            }
            // A Perl class always translates to a single Unicode class.
            ref kind => unreachable!("\\w parsed to non-class {:?}", kind),
        }
    })
}

/// A writing system with a predefined table of letters.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Script {
    /// The Latin letters plus umlauts and sharp s.
    German,
    /// The modern Greek letters, including accented vowels.
    Greek,
    /// The Cyrillic block.
    Cyrillic,
    /// The CJK unified ideographs.
    Cjk,
    /// The Hebrew block.
    Hebrew,
    /// Hangul compatibility jamo and precomposed Hangul syllables.
    Korean,
}

impl Script {
    /// Look up a script by name.
    ///
    /// Names are matched loosely in the sense of UAX44-LM3, so `Greek`,
    /// `greek` and `is_greek` all name the same script. ISO 15924 codes are
    /// recognized as aliases, e.g., `Cyrl` or `Hang`.
    pub fn from_name(name: &str) -> Option<Script> {
        let mut name = name.to_string();
        ucd_util::symbolic_name_normalize(&mut name);
        match &*name {
            "german" | "deu" => Some(Script::German),
            "greek" | "grek" => Some(Script::Greek),
            "cyrillic" | "cyrl" => Some(Script::Cyrillic),
            "cjk" | "han" | "hani" => Some(Script::Cjk),
            "hebrew" | "hebr" => Some(Script::Hebrew),
            "korean" | "kore" | "hangul" | "hang" => Some(Script::Korean),
            _ => None,
        }
    }

    /// Return the letters of this script.
    pub fn letters(&self) -> RangeSet {
        match *self {
            Script::German => RangeSet::from_table(GERMAN),
            Script::Greek => RangeSet::from_table(GREEK),
            Script::Cyrillic => RangeSet::from_table(CYRILLIC),
            Script::Cjk => RangeSet::from_table(CJK),
            Script::Hebrew => RangeSet::from_table(HEBREW),
            Script::Korean => {
                let syllables: Vec<(char, char)> = ucd_util::RANGE_HANGUL_SYLLABLE
                    .iter()
                    .filter_map(|&(start, end)| {
                        Some((char::from_u32(start)?, char::from_u32(end)?))
                    })
                    .collect();
                RangeSet::from_table(HANGUL_JAMO)
                    .union(&RangeSet::from_table(&syllables))
            }
        }
    }
}

const GERMAN: &[(char, char)] = &[
    ('A', 'Z'), ('a', 'z'),
    ('Ä', 'Ä'), ('Ö', 'Ö'), ('Ü', 'Ü'), ('ß', 'ß'),
    ('ä', 'ä'), ('ö', 'ö'), ('ü', 'ü'), ('ẞ', 'ẞ'),
];

const GREEK: &[(char, char)] = &[('\u{386}', '\u{386}'), ('\u{388}', '\u{3CE}')];

const CYRILLIC: &[(char, char)] = &[('\u{400}', '\u{4FF}')];

const CJK: &[(char, char)] = &[('\u{4E00}', '\u{9FD5}')];

const HEBREW: &[(char, char)] = &[('\u{590}', '\u{5FF}')];

const HANGUL_JAMO: &[(char, char)] = &[('\u{3131}', '\u{314E}')];
