// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore string matching algorithm implementation.
//!
//! The matcher preprocesses its pattern once into a [`BadCharTable`] and a
//! [`GoodSuffixTable`] and can then be run against any number of texts.

use super::tables::{BadCharTable, GoodSuffixTable};
use crate::matching::alphabet::Alphabet;
use crate::matching::error::{MatchError, Result, SymbolRole};
use crate::matching::footprint::TableFootprint;

/// Boyer-Moore pattern matcher returning the leftmost match.
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher {
    /// The pattern symbols
    pattern: Vec<char>,

    /// Bad character rule table
    bad_char_table: BadCharTable,

    /// Good suffix rule table
    good_suffix_table: GoodSuffixTable,
}

impl BoyerMooreMatcher {
    /// Creates a new Boyer-Moore matcher for `pattern` over `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPattern`] for an empty pattern, or
    /// [`MatchError::UnsupportedSymbol`] if the alphabet rejects a pattern
    /// symbol.
    pub fn new(pattern: &str, alphabet: &Alphabet) -> Result<Self> {
        Self::from_symbols(pattern.chars().collect(), alphabet)
    }

    /// Creates a matcher from an already decoded symbol sequence.
    ///
    /// # Errors
    ///
    /// Same as [`BoyerMooreMatcher::new`].
    pub fn from_symbols(pattern: Vec<char>, alphabet: &Alphabet) -> Result<Self> {
        if pattern.is_empty() {
            return Err(MatchError::EmptyPattern);
        }

        let bad_char_table = BadCharTable::new(&pattern, alphabet)?;
        let good_suffix_table = GoodSuffixTable::new(&pattern);

        Ok(Self {
            pattern,
            bad_char_table,
            good_suffix_table,
        })
    }

    /// Finds the first occurrence of the pattern in the text.
    ///
    /// Returns the symbol offset of the leftmost match, or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnsupportedSymbol`] if the alphabet rejects a text
    /// symbol.
    pub fn find_first(&self, text: &str) -> Result<Option<usize>> {
        let text: Vec<char> = text.chars().collect();
        self.find_in(&text)
    }

    /// Finds the first occurrence of the pattern in a decoded text.
    ///
    /// # Errors
    ///
    /// Same as [`BoyerMooreMatcher::find_first`].
    pub fn find_in(&self, text: &[char]) -> Result<Option<usize>> {
        self.bad_char_table.alphabet().check(text, SymbolRole::Text)?;
        Ok(self.scan(text))
    }

    /// Runs the right-to-left scan without validating the text.
    ///
    /// The result is exact for any text: under [`UnmappedPolicy::Reject`] the
    /// pattern holds only mapped symbols, so an unmapped text symbol is treated
    /// as absent from the pattern. Use [`find_in`](Self::find_in) to enforce
    /// the policy on the text as well.
    ///
    /// [`UnmappedPolicy::Reject`]: crate::matching::UnmappedPolicy::Reject
    pub fn scan(&self, text: &[char]) -> Option<usize> {
        let n = text.len();
        let m = self.pattern.len();
        if m > n {
            return None;
        }

        let mut s = 0;
        while s <= n - m {
            // Compare right to left; `j` counts the symbols still unmatched
            let mut j = m;
            while j > 0 && self.pattern[j - 1] == text[s + j - 1] {
                j -= 1;
            }

            if j == 0 {
                return Some(s);
            }

            let mismatch = j - 1;
            let bad_char_shift = self.bad_char_table.shift(text[s + mismatch], mismatch);
            let good_suffix_shift = self.good_suffix_table.shift(mismatch + 1);

            s += usize::try_from(bad_char_shift)
                .unwrap_or(0)
                .max(good_suffix_shift)
                .max(1);
        }

        None
    }

    /// Pattern length in symbols.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// The bad character table built for the pattern.
    pub fn bad_char_table(&self) -> &BadCharTable {
        &self.bad_char_table
    }

    /// The good suffix table built for the pattern.
    pub fn good_suffix_table(&self) -> &GoodSuffixTable {
        &self.good_suffix_table
    }

    /// Combined auxiliary space of both tables in bytes.
    pub fn aux_space_bytes(&self) -> usize {
        self.bad_char_table.bytes() + self.good_suffix_table.bytes()
    }
}
