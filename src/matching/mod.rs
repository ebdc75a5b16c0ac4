// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact string matching core.
//!
//! Two independent search engines, each with its own preprocessing stage:
//!
//! - [Boyer-Moore](boyer_moore): bad character table + strong good suffix table,
//!   right-to-left comparison with maximal shifting.
//! - [Knuth-Morris-Pratt](kmp): failure (LPS) table, single left-to-right scan
//!   without text backtracking.
//!
//! A brute-force [naive] matcher serves as the reference oracle.
//!
//! Every search returns the leftmost match offset (counted in symbols, not
//! bytes) or `None`. Tables are built per pattern, immutable after
//! construction and never shared between patterns; nothing here touches global
//! state, so independent searches can run on separate threads freely.
//!
//! # Example
//!
//! ```
//! use strsearch_lib::matching::{Algorithm, Alphabet};
//!
//! let alphabet = Alphabet::latin();
//! for algorithm in Algorithm::ALL {
//!     let found = algorithm.search("GEMINIEATICECREAM", "ICE", &alphabet).unwrap();
//!     assert_eq!(found, Some(9));
//! }
//! ```

pub mod alphabet;
pub mod boyer_moore;
mod error;
mod footprint;
pub mod kmp;
pub mod naive;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

// Re-exports
pub use alphabet::{Alphabet, AlphabetKind, UnmappedPolicy};
pub use boyer_moore::{
    build_bad_char_table, build_good_suffix_table, search_boyer_moore, BadCharTable,
    BoyerMooreMatcher, GoodSuffixTable,
};
pub use error::{MatchError, Result, SymbolRole};
pub use footprint::TableFootprint;
pub use kmp::{build_failure_function, search_kmp, FailureTable, KmpMatcher};
pub use naive::{has_substring, naive_find, search_naive};

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Boyer-Moore with bad character and good suffix rules
    BoyerMoore,
    /// Knuth-Morris-Pratt
    Kmp,
    /// Brute-force reference scan
    Naive,
}

impl Algorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Algorithm; 3] = [Self::BoyerMoore, Self::Kmp, Self::Naive];

    /// Runs this algorithm on `text` and `pattern`.
    ///
    /// `alphabet` is consulted by Boyer-Moore only.
    ///
    /// # Errors
    ///
    /// Only Boyer-Moore fails, see [`search_boyer_moore`].
    pub fn search(self, text: &str, pattern: &str, alphabet: &Alphabet) -> Result<Option<usize>> {
        match self {
            Self::BoyerMoore => search_boyer_moore(text, pattern, alphabet),
            Self::Kmp => Ok(search_kmp(text, pattern)),
            Self::Naive => Ok(search_naive(text, pattern)),
        }
    }

    /// Short identifier used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BoyerMoore => "boyer_moore",
            Self::Kmp => "kmp",
            Self::Naive => "naive",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
