// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt matcher.

use super::failure::FailureTable;
use crate::matching::footprint::TableFootprint;

/// KMP pattern matcher returning the leftmost match.
///
/// Works on any symbol type with equality; no alphabet is involved.
#[derive(Debug, Clone)]
pub struct KmpMatcher<T = char> {
    pattern: Vec<T>,
    failure_table: FailureTable,
}

impl KmpMatcher<char> {
    /// Creates a matcher for a string pattern.
    pub fn new(pattern: &str) -> Self {
        Self::from_symbols(pattern.chars().collect())
    }

    /// Finds the first occurrence of the pattern in the text.
    ///
    /// Returns the symbol offset of the leftmost match. An empty pattern
    /// matches at offset 0.
    pub fn find_first(&self, text: &str) -> Option<usize> {
        let text: Vec<char> = text.chars().collect();
        self.find_in(&text)
    }
}

impl<T: PartialEq> KmpMatcher<T> {
    /// Creates a matcher from a symbol sequence.
    pub fn from_symbols(pattern: Vec<T>) -> Self {
        let failure_table = FailureTable::new(&pattern);
        Self {
            pattern,
            failure_table,
        }
    }

    /// Finds the first occurrence of the pattern in `text` in O(n).
    ///
    /// The text index never moves backwards.
    pub fn find_in(&self, text: &[T]) -> Option<usize> {
        let m = self.pattern.len();
        if m == 0 {
            return Some(0);
        }

        let lps = self.failure_table.as_slice();
        let mut i = 0;
        let mut k = 0;

        while i < text.len() {
            if text[i] == self.pattern[k] {
                i += 1;
                k += 1;
                if k == m {
                    return Some(i - m);
                }
            } else if k > 0 {
                k = lps[k - 1];
            } else {
                i += 1;
            }
        }

        None
    }

    /// Pattern length in symbols.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// The failure table built for the pattern.
    pub fn failure_table(&self) -> &FailureTable {
        &self.failure_table
    }

    /// Auxiliary space of the failure table in bytes.
    pub fn aux_space_bytes(&self) -> usize {
        self.failure_table.bytes()
    }
}
