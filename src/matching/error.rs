// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the matching core.

use std::fmt;

/// Which input a rejected symbol came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolRole {
    /// The text being searched
    Text,
    /// The pattern being searched for
    Pattern,
}

impl fmt::Display for SymbolRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Pattern => f.write_str("pattern"),
        }
    }
}

/// Error types for matching operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatchError {
    /// Empty pattern provided to a matcher that cannot preprocess it
    #[error("Pattern cannot be empty")]
    EmptyPattern,

    /// A symbol outside the configured alphabet
    #[error("Unsupported symbol {symbol:?} at {role} position {position} (alphabet size {alphabet_size})")]
    UnsupportedSymbol {
        /// The offending symbol
        symbol: char,
        /// Symbol offset within the text or pattern
        position: usize,
        /// Whether the symbol came from the text or the pattern
        role: SymbolRole,
        /// Size of the alphabet that rejected it
        alphabet_size: usize,
    },
}

/// Result type for matching operations
pub type Result<T> = std::result::Result<T, MatchError>;
