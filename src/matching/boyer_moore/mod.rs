// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore exact string matching.
//!
//! This module implements the Boyer-Moore search with both the bad character
//! rule and the strong good suffix rule. The pattern is aligned against the
//! text and compared right to left; on a mismatch the alignment advances by
//! the larger of the two rule shifts (and always by at least one).
//!
//! # Example
//!
//! ```
//! use strsearch_lib::matching::{search_boyer_moore, Alphabet};
//!
//! let found = search_boyer_moore("GEMINIEATICECREAM", "ICE", &Alphabet::latin()).unwrap();
//! assert_eq!(found, Some(9));
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m + σ) where m is the pattern length and σ is the alphabet size
//! - Space complexity: O(m + σ)
//! - Best case: O(n/m) comparisons (where n is the text length)
//! - Worst case: O(n*m) comparisons, because this variant stops at the first match
//!   and does not carry the Galil rule

mod matcher;
mod tables;

pub use matcher::BoyerMooreMatcher;
pub use tables::{BadCharTable, GoodSuffixTable};

use super::alphabet::Alphabet;
use super::error::Result;

/// Searches `text` for the leftmost occurrence of `pattern`.
///
/// # Errors
///
/// Returns [`MatchError::EmptyPattern`](super::MatchError::EmptyPattern) for an
/// empty pattern and
/// [`MatchError::UnsupportedSymbol`](super::MatchError::UnsupportedSymbol) when
/// `alphabet` rejects a text or pattern symbol.
pub fn search_boyer_moore(text: &str, pattern: &str, alphabet: &Alphabet) -> Result<Option<usize>> {
    BoyerMooreMatcher::new(pattern, alphabet)?.find_first(text)
}

/// Builds the bad character table for `pattern`.
///
/// # Errors
///
/// Returns [`MatchError::UnsupportedSymbol`](super::MatchError::UnsupportedSymbol)
/// when `alphabet` rejects a pattern symbol.
pub fn build_bad_char_table(pattern: &str, alphabet: &Alphabet) -> Result<BadCharTable> {
    let pattern: Vec<char> = pattern.chars().collect();
    BadCharTable::new(&pattern, alphabet)
}

/// Builds the `m + 1` entry good suffix table for `pattern`.
pub fn build_good_suffix_table(pattern: &str) -> GoodSuffixTable {
    let pattern: Vec<char> = pattern.chars().collect();
    GoodSuffixTable::new(&pattern)
}
