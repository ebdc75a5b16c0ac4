//! Searches prepared ahead of timing.
//!
//! Decoding, table construction and alphabet validation all happen before the
//! clock starts, so a timed [`PreparedSearch::find`] covers the scan alone.

use crate::matching::{
    naive_find, Algorithm, Alphabet, BoyerMooreMatcher, KmpMatcher, Result, SymbolRole,
};

/// One algorithm with its pattern preprocessed.
#[derive(Debug, Clone)]
pub enum PreparedSearch {
    /// Boyer-Moore matcher with both tables built
    BoyerMoore(BoyerMooreMatcher),
    /// KMP matcher with its failure table built
    Kmp(KmpMatcher),
    /// The decoded pattern for the brute-force scan
    Naive(Vec<char>),
}

impl PreparedSearch {
    /// Builds `algorithm`'s tables for a decoded pattern.
    ///
    /// # Errors
    ///
    /// Boyer-Moore rejects an empty pattern and pattern symbols the alphabet
    /// cannot map.
    pub fn new(algorithm: Algorithm, pattern: &[char], alphabet: &Alphabet) -> Result<Self> {
        Ok(match algorithm {
            Algorithm::BoyerMoore => {
                Self::BoyerMoore(BoyerMooreMatcher::from_symbols(pattern.to_vec(), alphabet)?)
            }
            Algorithm::Kmp => Self::Kmp(KmpMatcher::from_symbols(pattern.to_vec())),
            Algorithm::Naive => Self::Naive(pattern.to_vec()),
        })
    }

    /// The algorithm this search runs.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::BoyerMoore(_) => Algorithm::BoyerMoore,
            Self::Kmp(_) => Algorithm::Kmp,
            Self::Naive(_) => Algorithm::Naive,
        }
    }

    /// Applies the alphabet policy to a decoded text.
    ///
    /// # Errors
    ///
    /// Boyer-Moore under a rejecting alphabet fails on the first unmapped
    /// text symbol. The other algorithms accept any text.
    pub fn check_text(&self, text: &[char]) -> Result<()> {
        match self {
            Self::BoyerMoore(matcher) => matcher
                .bad_char_table()
                .alphabet()
                .check(text, SymbolRole::Text),
            Self::Kmp(_) | Self::Naive(_) => Ok(()),
        }
    }

    /// Leftmost match in a decoded text.
    ///
    /// Call [`check_text`](Self::check_text) first to enforce the alphabet
    /// policy; the scan itself is exact either way.
    pub fn find(&self, text: &[char]) -> Option<usize> {
        match self {
            Self::BoyerMoore(matcher) => matcher.scan(text),
            Self::Kmp(matcher) => matcher.find_in(text),
            Self::Naive(pattern) => naive_find(text, pattern),
        }
    }
}
