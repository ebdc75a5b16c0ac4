// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The KMP failure function (longest proper prefix which is also a suffix).

use std::mem;

use crate::matching::footprint::TableFootprint;

/// Failure table for the Knuth-Morris-Pratt algorithm.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]` that
/// is also a suffix of it. Always `lps[0] == 0` and `lps[i] <= i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureTable {
    lps: Vec<usize>,
}

impl FailureTable {
    /// Builds the failure table for `pattern` in O(m).
    pub fn new<T: PartialEq>(pattern: &[T]) -> Self {
        let m = pattern.len();
        let mut lps = vec![0; m];

        let mut len = 0;
        let mut i = 1;
        while i < m {
            if pattern[i] == pattern[len] {
                len += 1;
                lps[i] = len;
                i += 1;
            } else if len != 0 {
                // Fall back to the next shorter border; `i` stays put
                len = lps[len - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        Self { lps }
    }

    /// Border length at pattern position `i`.
    pub fn get(&self, i: usize) -> Option<usize> {
        self.lps.get(i).copied()
    }

    /// Raw table values.
    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }

    /// Number of entries (the pattern length).
    pub fn len(&self) -> usize {
        self.lps.len()
    }

    /// Whether the table was built for an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.lps.is_empty()
    }
}

impl TableFootprint for FailureTable {
    fn entries(&self) -> usize {
        self.lps.len()
    }

    fn entry_size(&self) -> usize {
        mem::size_of::<usize>()
    }
}
