// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt exact string matching.
//!
//! The failure table records, for every pattern prefix, the length of its
//! longest proper border. On a mismatch the pattern index falls back along
//! that border chain instead of rescanning text, giving O(n + m) time and
//! O(m) auxiliary space.
//!
//! ```
//! use strsearch_lib::matching::{build_failure_function, search_kmp};
//!
//! assert_eq!(search_kmp("abcxabcdabcdabcy", "abcdabcy"), Some(8));
//! assert_eq!(build_failure_function("aab").as_slice(), &[0, 1, 0]);
//! ```

mod failure;
mod matcher;

pub use failure::FailureTable;
pub use matcher::KmpMatcher;

/// Searches `text` for the leftmost occurrence of `pattern`.
///
/// An empty pattern matches at offset 0.
pub fn search_kmp(text: &str, pattern: &str) -> Option<usize> {
    KmpMatcher::new(pattern).find_first(text)
}

/// Builds the failure (LPS) table for `pattern`.
pub fn build_failure_function(pattern: &str) -> FailureTable {
    let pattern: Vec<char> = pattern.chars().collect();
    FailureTable::new(&pattern)
}
