// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Symbol-to-index mapping for the bad character table.
//!
//! An [`Alphabet`] pairs a symbol set ([`AlphabetKind`]) with a policy for
//! symbols outside that set ([`UnmappedPolicy`]). The Latin set covers
//! `A..=Z` (indices `0..26`) and `a..=z` (indices `26..52`); the ASCII set maps
//! every code point below 128 to itself.
//!
//! # Aliasing
//!
//! Under [`UnmappedPolicy::Alias`] every unmapped symbol shares index 0 with
//! `'A'` (Latin) or NUL (ASCII). The bad character table then stores, for that
//! slot, the rightmost position of *any* of the merged symbols. That position is
//! never smaller than the true last occurrence of the mismatched symbol, so the
//! resulting shift can only be shorter than the ideal one: matches are never
//! skipped, but searches over punctuation-heavy text lose most of their
//! bad-character skipping. [`UnmappedPolicy::Reject`] reports such symbols as
//! [`MatchError::UnsupportedSymbol`] instead.

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result, SymbolRole};

/// Symbol sets supported by the bad character table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetKind {
    /// Upper and lowercase Latin letters (52 symbols)
    #[default]
    Latin,
    /// 7-bit ASCII (128 symbols)
    Ascii,
}

impl AlphabetKind {
    /// Number of table slots this symbol set needs.
    pub const fn size(self) -> usize {
        match self {
            Self::Latin => 52,
            Self::Ascii => 128,
        }
    }
}

/// What happens to a symbol the alphabet cannot map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    /// Fail with [`MatchError::UnsupportedSymbol`]
    #[default]
    Reject,
    /// Map to index 0, sharing the slot with the first symbol of the set
    Alias,
}

/// A fixed symbol set mapped onto `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alphabet {
    kind: AlphabetKind,
    policy: UnmappedPolicy,
}

impl Alphabet {
    /// Creates an alphabet from a symbol set and an unmapped-symbol policy.
    pub const fn new(kind: AlphabetKind, policy: UnmappedPolicy) -> Self {
        Self { kind, policy }
    }

    /// The 52-letter Latin alphabet, rejecting anything else.
    pub const fn latin() -> Self {
        Self::new(AlphabetKind::Latin, UnmappedPolicy::Reject)
    }

    /// The 52-letter Latin alphabet with every other symbol aliased to index 0.
    pub const fn latin_aliasing() -> Self {
        Self::new(AlphabetKind::Latin, UnmappedPolicy::Alias)
    }

    /// The 128-symbol ASCII alphabet, rejecting non-ASCII symbols.
    pub const fn ascii() -> Self {
        Self::new(AlphabetKind::Ascii, UnmappedPolicy::Reject)
    }

    /// The symbol set.
    pub const fn kind(&self) -> AlphabetKind {
        self.kind
    }

    /// The unmapped-symbol policy.
    pub const fn policy(&self) -> UnmappedPolicy {
        self.policy
    }

    /// Number of distinct indices (`ALPHABET_SIZE`).
    pub const fn size(&self) -> usize {
        self.kind.size()
    }

    /// Raw mapping without the policy applied.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        match self.kind {
            AlphabetKind::Latin => match symbol {
                'A'..='Z' => Some(symbol as usize - 'A' as usize),
                'a'..='z' => Some(symbol as usize - 'a' as usize + 26),
                _ => None,
            },
            AlphabetKind::Ascii => symbol.is_ascii().then_some(symbol as usize),
        }
    }

    /// Maps a symbol with the policy applied.
    ///
    /// Returns `None` only under [`UnmappedPolicy::Reject`] for a symbol outside
    /// the set.
    pub fn map_symbol(&self, symbol: char) -> Option<usize> {
        match (self.index_of(symbol), self.policy) {
            (Some(index), _) => Some(index),
            (None, UnmappedPolicy::Alias) => Some(0),
            (None, UnmappedPolicy::Reject) => None,
        }
    }

    /// Validates a whole symbol sequence against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnsupportedSymbol`] for the first symbol that the
    /// alphabet rejects. Never fails under [`UnmappedPolicy::Alias`].
    pub fn check(&self, symbols: &[char], role: SymbolRole) -> Result<()> {
        if self.policy == UnmappedPolicy::Alias {
            return Ok(());
        }

        match symbols.iter().position(|&c| self.index_of(c).is_none()) {
            Some(position) => Err(MatchError::UnsupportedSymbol {
                symbol: symbols[position],
                position,
                role,
                alphabet_size: self.size(),
            }),
            None => Ok(()),
        }
    }
}
