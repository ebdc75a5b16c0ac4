// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tables for the Boyer-Moore string matching algorithm.
//!
//! This module contains the lookup tables used by the Boyer-Moore algorithm:
//!
//! 1. Bad Character Table: for each alphabet slot, the rightmost position of
//!    that symbol in the pattern. Used to realign the mismatched text symbol
//!    with its last occurrence in the pattern.
//!
//! 2. Good Suffix Table: for each mismatch position, the shift that realigns
//!    the already-matched suffix with its next occurrence (or with the widest
//!    border of the pattern).
//!
//! Both tables are built once per pattern and never change afterwards.

use std::mem;

use crate::matching::alphabet::Alphabet;
use crate::matching::error::{Result, SymbolRole};
use crate::matching::footprint::TableFootprint;

/// Represents the bad character table for the Boyer-Moore algorithm.
///
/// Slot `k` holds the rightmost pattern position of the symbol(s) mapped to
/// alphabet index `k`, or [`BadCharTable::ABSENT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCharTable {
    /// Rightmost occurrence per alphabet slot
    last: Vec<isize>,
    /// Alphabet used to map symbols to slots
    alphabet: Alphabet,
}

impl BadCharTable {
    /// Marker for a symbol that does not occur in the pattern.
    pub const ABSENT: isize = -1;

    /// Creates a new bad character table for the given pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnsupportedSymbol`](crate::matching::MatchError::UnsupportedSymbol)
    /// if the alphabet rejects a pattern symbol.
    pub fn new(pattern: &[char], alphabet: &Alphabet) -> Result<Self> {
        alphabet.check(pattern, SymbolRole::Pattern)?;

        let mut last = vec![Self::ABSENT; alphabet.size()];
        // Later positions overwrite earlier ones, leaving the rightmost occurrence
        for (i, &ch) in pattern.iter().enumerate() {
            if let Some(slot) = alphabet.map_symbol(ch) {
                last[slot] = i as isize;
            }
        }

        Ok(Self {
            last,
            alphabet: *alphabet,
        })
    }

    /// Rightmost pattern position recorded for the symbol's slot.
    pub fn last_occurrence(&self, ch: char) -> Option<usize> {
        self.alphabet
            .map_symbol(ch)
            .and_then(|slot| self.last.get(slot).copied())
            .and_then(|pos| usize::try_from(pos).ok())
    }

    /// Bad character shift for a mismatch against `ch` at pattern position `pos`.
    ///
    /// May be zero or negative when the recorded occurrence lies right of
    /// `pos`; callers clamp the final shift to at least one.
    pub fn shift(&self, ch: char, pos: usize) -> isize {
        let last = self
            .alphabet
            .map_symbol(ch)
            .and_then(|slot| self.last.get(slot).copied())
            .unwrap_or(Self::ABSENT);
        pos as isize - last
    }

    /// Raw slot values.
    pub fn as_slice(&self) -> &[isize] {
        &self.last
    }

    /// The alphabet the table was built for.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl TableFootprint for BadCharTable {
    fn entries(&self) -> usize {
        self.last.len()
    }

    fn entry_size(&self) -> usize {
        mem::size_of::<isize>()
    }
}

/// Represents the good suffix table for the Boyer-Moore algorithm.
///
/// Holds `m + 1` shifts, one per mismatch position plus a past-the-end slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSuffixTable {
    /// Shift distances indexed by `mismatch position + 1`
    shift: Vec<usize>,
}

impl GoodSuffixTable {
    /// Creates a new good suffix table for the given pattern.
    ///
    /// The border table used during construction is dropped before returning.
    /// An empty pattern yields the single-entry table `[1]`.
    pub fn new<T: PartialEq>(pattern: &[T]) -> Self {
        let mut shift = vec![0; pattern.len() + 1];
        let border = Self::compute_border(pattern, &mut shift);
        Self::fill_shift(&mut shift, &border);

        Self { shift }
    }

    /// Computes the border positions, recording the shift for every border
    /// that cannot be extended to the left.
    ///
    /// `border[i]` is the starting position of the widest border of
    /// `pattern[i..]`. A slot of `shift` is written only while it is still zero,
    /// so the first (smallest) shift found wins.
    fn compute_border<T: PartialEq>(pattern: &[T], shift: &mut [usize]) -> Vec<usize> {
        let m = pattern.len();
        let mut border = vec![0; m + 1];

        let mut i = m;
        let mut j = m + 1;
        border[i] = j;

        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                if shift[j] == 0 {
                    shift[j] = j - i;
                }
                j = border[j];
            }
            i -= 1;
            j -= 1;
            border[i] = j;
        }

        border
    }

    /// Fills the remaining zero slots from the border chain of the whole pattern.
    fn fill_shift(shift: &mut [usize], border: &[usize]) {
        let mut j = border[0];
        for k in 0..shift.len() {
            if shift[k] == 0 {
                shift[k] = j;
            }
            if k == j {
                j = border[j];
            }
        }
    }

    /// Gets the shift distance for a position.
    ///
    /// Out-of-range positions shift by one.
    pub fn shift(&self, pos: usize) -> usize {
        self.shift.get(pos).copied().unwrap_or(1)
    }

    /// Raw shift values.
    pub fn as_slice(&self) -> &[usize] {
        &self.shift
    }
}

impl TableFootprint for GoodSuffixTable {
    fn entries(&self) -> usize {
        self.shift.len()
    }

    fn entry_size(&self) -> usize {
        mem::size_of::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::error::MatchError;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_bad_char_table() {
        let table = BadCharTable::new(&chars("PATTERN"), &Alphabet::latin()).unwrap();

        assert_eq!(table.last_occurrence('P'), Some(0));
        assert_eq!(table.last_occurrence('T'), Some(3)); // rightmost T
        assert_eq!(table.last_occurrence('N'), Some(6));
        assert_eq!(table.last_occurrence('Z'), None);

        assert_eq!(table.shift('A', 4), 3);
        assert_eq!(table.shift('Z', 3), 4); // absent: pos + 1
        assert_eq!(table.shift('N', 2), -4); // occurrence right of pos
    }

    #[test]
    fn test_bad_char_table_is_case_sensitive() {
        let table = BadCharTable::new(&chars("Pattern"), &Alphabet::latin()).unwrap();

        assert_eq!(table.last_occurrence('P'), Some(0));
        assert_eq!(table.last_occurrence('p'), None);
        assert_eq!(table.as_slice()[26 + ('t' as usize - 'a' as usize)], 3);
    }

    #[test]
    fn test_bad_char_table_rejects_unsupported_symbol() {
        let err = BadCharTable::new(&chars("ab-c"), &Alphabet::latin()).unwrap_err();
        assert!(matches!(
            err,
            MatchError::UnsupportedSymbol {
                symbol: '-',
                position: 2,
                role: SymbolRole::Pattern,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_char_table_aliasing_shares_slot_zero() {
        let table = BadCharTable::new(&chars("A.b"), &Alphabet::latin_aliasing()).unwrap();

        // '.' at 1 overwrote 'A' at 0
        assert_eq!(table.as_slice()[0], 1);
        assert_eq!(table.last_occurrence('A'), Some(1));
        assert_eq!(table.last_occurrence('!'), Some(1));
    }

    #[test]
    fn test_good_suffix_table() {
        let table = GoodSuffixTable::new(&chars("abbabab"));
        assert_eq!(table.as_slice(), &[5, 5, 5, 5, 2, 5, 4, 1]);

        let table = GoodSuffixTable::new(&chars("ANPANMAN"));
        assert_eq!(table.as_slice(), &[6, 6, 6, 6, 6, 6, 3, 8, 1]);
    }

    #[test]
    fn test_good_suffix_table_periodic_pattern() {
        let table = GoodSuffixTable::new(&chars("AAA"));
        assert_eq!(table.as_slice(), &[1, 1, 2, 3]);
    }

    #[test]
    fn test_good_suffix_shift_out_of_range() {
        let table = GoodSuffixTable::new(&chars("ICE"));
        assert_eq!(table.shift(3), 1);
        assert_eq!(table.shift(42), 1);
    }

    #[test]
    fn test_empty_pattern() {
        let bad_char = BadCharTable::new(&[], &Alphabet::latin()).unwrap();
        assert_eq!(bad_char.entries(), 52);
        assert!(bad_char.as_slice().iter().all(|&v| v == BadCharTable::ABSENT));

        let good_suffix = GoodSuffixTable::new::<char>(&[]);
        assert_eq!(good_suffix.as_slice(), &[1]);
    }

    #[test]
    fn test_footprints() {
        let pattern = chars("ICE");
        let bad_char = BadCharTable::new(&pattern, &Alphabet::ascii()).unwrap();
        let good_suffix = GoodSuffixTable::new(&pattern);

        assert_eq!(bad_char.bytes(), 128 * mem::size_of::<isize>());
        assert_eq!(good_suffix.entries(), 4);
        assert_eq!(good_suffix.bytes(), 4 * mem::size_of::<usize>());
    }
}
