//! Auxiliary-space accounting per algorithm.

use std::fmt;

use super::prepared::PreparedSearch;
use crate::matching::{Algorithm, Alphabet, Result, TableFootprint};

/// Space used by one preprocessing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpace {
    /// Human-readable table name
    pub name: &'static str,
    /// Number of entries
    pub entries: usize,
    /// Total size in bytes
    pub bytes: usize,
}

impl TableSpace {
    fn of(name: &'static str, table: &impl TableFootprint) -> Self {
        Self {
            name,
            entries: table.entries(),
            bytes: table.bytes(),
        }
    }
}

/// Auxiliary space an algorithm allocates for one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceReport {
    /// The measured algorithm
    pub algorithm: Algorithm,
    /// One entry per preprocessing table
    pub tables: Vec<TableSpace>,
}

impl SpaceReport {
    /// Builds the algorithm's tables for `pattern` and records their footprint.
    ///
    /// # Errors
    ///
    /// Fails when Boyer-Moore cannot preprocess the pattern.
    pub fn measure(algorithm: Algorithm, pattern: &str, alphabet: &Alphabet) -> Result<Self> {
        let pattern: Vec<char> = pattern.chars().collect();
        Ok(Self::of(&PreparedSearch::new(algorithm, &pattern, alphabet)?))
    }

    /// Footprint of the tables already held by a prepared search.
    pub fn of(prepared: &PreparedSearch) -> Self {
        let tables = match prepared {
            PreparedSearch::BoyerMoore(matcher) => vec![
                TableSpace::of("Bad character table", matcher.bad_char_table()),
                TableSpace::of("Good suffix table", matcher.good_suffix_table()),
            ],
            PreparedSearch::Kmp(matcher) => {
                vec![TableSpace::of("LPS table", matcher.failure_table())]
            }
            PreparedSearch::Naive(_) => Vec::new(),
        };
        tracing::debug!(algorithm = %prepared.algorithm(), tables = tables.len(), "table footprint measured");

        Self {
            algorithm: prepared.algorithm(),
            tables,
        }
    }

    /// Sum over all tables in bytes.
    pub fn total_bytes(&self) -> usize {
        self.tables.iter().map(|table| table.bytes).sum()
    }
}

impl fmt::Display for SpaceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.tables {
            writeln!(f, "{:<30}: {} bytes", format!("{} space", table.name), table.bytes)?;
        }
        write!(f, "{:<30}: {} bytes", "Total space used", self.total_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_boyer_moore_space() {
        let report = SpaceReport::measure(Algorithm::BoyerMoore, "ICE", &Alphabet::latin()).unwrap();

        assert_eq!(report.tables.len(), 2);
        assert_eq!(report.tables[0].entries, 52);
        assert_eq!(report.tables[1].entries, 4);
        assert_eq!(
            report.total_bytes(),
            52 * size_of::<isize>() + 4 * size_of::<usize>()
        );
    }

    #[test]
    fn test_kmp_space() {
        let report = SpaceReport::measure(Algorithm::Kmp, "abcdabcy", &Alphabet::latin()).unwrap();
        assert_eq!(report.total_bytes(), 8 * size_of::<usize>());
    }

    #[test]
    fn test_naive_has_no_tables() {
        let report = SpaceReport::measure(Algorithm::Naive, "abc", &Alphabet::latin()).unwrap();
        assert!(report.tables.is_empty());
        assert_eq!(report.total_bytes(), 0);
    }

    #[test]
    fn test_display() {
        let report = SpaceReport::measure(Algorithm::Kmp, "aab", &Alphabet::latin()).unwrap();
        let rendered = report.to_string();
        assert!(rendered.contains("LPS table space"));
        assert!(rendered.contains("Total space used"));
    }
}
