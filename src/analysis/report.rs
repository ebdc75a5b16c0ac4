//! Search reports and experiment result sinks.
//!
//! [`SearchReport`] is the human-readable summary of a single search.
//! [`ExperimentRecord`] is one measured grid cell, delivered to every
//! [`ReportSink`] registered with the experiment runner. Sinks own their
//! writers, so writes from one sink are never interleaved.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::prepared::PreparedSearch;
use super::space::SpaceReport;
use super::timing::time_once;
use crate::error::report::ReportError;
use crate::matching::{Algorithm, Alphabet, Result};

/// Renders a match result the way reports print it: the offset, or `-1`.
pub fn index_or_sentinel(index: Option<usize>) -> i64 {
    index
        .and_then(|index| i64::try_from(index).ok())
        .unwrap_or(-1)
}

/// Outcome and cost of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// The algorithm that ran
    pub algorithm: Algorithm,
    /// Leftmost match offset
    pub match_index: Option<usize>,
    /// Text length in symbols
    pub text_size: usize,
    /// Pattern length in symbols
    pub pattern_size: usize,
    /// Alphabet size, for algorithms that use one
    pub alphabet_size: Option<usize>,
    /// Auxiliary space of the preprocessing tables
    pub space: SpaceReport,
    /// Wall-clock time of table construction
    pub preprocessing: Duration,
    /// Wall-clock time of the scan alone
    pub elapsed: Duration,
}

impl SearchReport {
    /// Runs `algorithm` once and collects its report.
    ///
    /// Text and pattern are decoded and the text is checked against the
    /// alphabet before either clock starts.
    ///
    /// # Errors
    ///
    /// Propagates the matcher's error (Boyer-Moore only).
    pub fn run(algorithm: Algorithm, text: &str, pattern: &str, alphabet: &Alphabet) -> Result<Self> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();

        let (prepared, preprocessing) = time_once(|| PreparedSearch::new(algorithm, &pattern, alphabet));
        let prepared = prepared?;
        prepared.check_text(&text)?;
        let (match_index, elapsed) = time_once(|| prepared.find(&text));

        tracing::debug!(%algorithm, ?match_index, ?preprocessing, ?elapsed, "search finished");

        Ok(Self {
            algorithm,
            match_index,
            text_size: text.len(),
            pattern_size: pattern.len(),
            alphabet_size: (algorithm == Algorithm::BoyerMoore).then(|| alphabet.size()),
            space: SpaceReport::of(&prepared),
            preprocessing,
            elapsed,
        })
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<30}: {}", "Algorithm", self.algorithm)?;
        writeln!(f, "{:<30}: {}", "Pattern found at index", index_or_sentinel(self.match_index))?;
        writeln!(f, "{:<30}: {}", "Text size", self.text_size)?;
        writeln!(f, "{:<30}: {}", "Pattern size", self.pattern_size)?;
        if let Some(size) = self.alphabet_size {
            writeln!(f, "{:<30}: {}", "Alphabet size", size)?;
        }
        writeln!(f, "{}", self.space)?;
        writeln!(f, "{:<30}: {}", "Preprocessing time (µs)", self.preprocessing.as_micros())?;
        write!(f, "{:<30}: {}", "Elapsed time (µs)", self.elapsed.as_micros())
    }
}

/// One measured cell of the experiment grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Measured algorithm
    pub algorithm: Algorithm,
    /// Text length in symbols
    pub text_size: usize,
    /// Pattern length in symbols
    pub pattern_size: usize,
    /// Number of timed runs
    pub runs: u32,
    /// Match offset, `-1` when not found
    pub match_index: i64,
    /// Mean wall-clock time per run
    pub mean_elapsed_ns: u64,
    /// Auxiliary space of the preprocessing tables
    pub aux_space_bytes: usize,
}

/// Destination for experiment records.
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink {
    /// Writes one record.
    fn record(&mut self, record: &ExperimentRecord) -> std::result::Result<(), ReportError>;

    /// Flushes buffered output once the experiment completes.
    fn finish(&mut self) -> std::result::Result<(), ReportError>;
}

/// Writes records as CSV with a header row.
#[derive(Debug)]
pub struct CsvReportSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvReportSink<File> {
    /// Creates (or truncates) a CSV file at `path`.
    pub fn create(path: &Path) -> std::result::Result<Self, ReportError> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> CsvReportSink<W> {
    /// Wraps an arbitrary writer.
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> std::result::Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|err| ReportError::Io(err.into_error()))
    }
}

impl<W: Write> ReportSink for CsvReportSink<W> {
    fn record(&mut self, record: &ExperimentRecord) -> std::result::Result<(), ReportError> {
        self.writer.serialize(record)?;
        Ok(())
    }

    fn finish(&mut self) -> std::result::Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes one progress line per record.
#[derive(Debug)]
pub struct ConsoleReportSink<W: Write> {
    out: W,
}

impl ConsoleReportSink<io::Stdout> {
    /// A sink printing to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReportSink<W> {
    /// Wraps an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleReportSink<W> {
    fn record(&mut self, record: &ExperimentRecord) -> std::result::Result<(), ReportError> {
        writeln!(
            self.out,
            "{}: PatternSize={}, TextSize={}, Index={}, Time={} ns, Space={} bytes",
            record.algorithm,
            record.pattern_size,
            record.text_size,
            record.match_index,
            record.mean_elapsed_ns,
            record.aux_space_bytes,
        )?;
        Ok(())
    }

    fn finish(&mut self) -> std::result::Result<(), ReportError> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ExperimentRecord {
        ExperimentRecord {
            algorithm: Algorithm::Kmp,
            text_size: 1000,
            pattern_size: 10,
            runs: 3,
            match_index: -1,
            mean_elapsed_ns: 1234,
            aux_space_bytes: 80,
        }
    }

    #[test]
    fn test_index_or_sentinel() {
        assert_eq!(index_or_sentinel(Some(9)), 9);
        assert_eq!(index_or_sentinel(None), -1);
    }

    #[test]
    fn test_search_report_boyer_moore() {
        let report =
            SearchReport::run(Algorithm::BoyerMoore, "GEMINIEATICECREAM", "ICE", &Alphabet::latin())
                .unwrap();

        assert_eq!(report.match_index, Some(9));
        assert_eq!(report.text_size, 17);
        assert_eq!(report.pattern_size, 3);
        assert_eq!(report.alphabet_size, Some(52));

        let rendered = report.to_string();
        assert!(rendered.contains("Pattern found at index        : 9"));
        assert!(rendered.contains("Alphabet size                 : 52"));
        assert!(rendered.contains("Bad character table space"));
    }

    #[test]
    fn test_search_report_not_found() {
        let report = SearchReport::run(Algorithm::Kmp, "ABC", "XYZ", &Alphabet::latin()).unwrap();
        assert_eq!(report.alphabet_size, None);
        assert!(report.to_string().contains("Pattern found at index        : -1"));
    }

    #[test]
    fn test_search_report_propagates_match_error() {
        let result = SearchReport::run(Algorithm::BoyerMoore, "ABC", "", &Alphabet::latin());
        assert!(result.is_err());
    }

    #[test]
    fn test_search_report_times_preprocessing_apart() {
        let report =
            SearchReport::run(Algorithm::Kmp, "abcxabcdabcdabcy", "abcdabcy", &Alphabet::latin())
                .unwrap();
        assert_eq!(report.match_index, Some(8));

        let rendered = report.to_string();
        let preprocessing = rendered.find("Preprocessing time (µs)").unwrap();
        let elapsed = rendered.find("Elapsed time (µs)").unwrap();
        assert!(preprocessing < elapsed);
    }

    #[test]
    fn test_search_report_rejects_text_before_timing() {
        let result = SearchReport::run(Algorithm::BoyerMoore, "ICE CREAM", "CREAM", &Alphabet::latin());
        assert!(matches!(
            result,
            Err(crate::matching::MatchError::UnsupportedSymbol { position: 3, .. })
        ));
    }

    #[test]
    fn test_console_sink() {
        let mut sink = ConsoleReportSink::new(Vec::new());
        sink.record(&sample_record()).unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "kmp: PatternSize=10, TextSize=1000, Index=-1, Time=1234 ns, Space=80 bytes\n"
        );
    }

    #[test]
    fn test_csv_sink_round_trip() {
        let mut sink = CsvReportSink::from_writer(Vec::new());
        sink.record(&sample_record()).unwrap();
        sink.finish().unwrap();

        let bytes = sink.into_inner().unwrap();
        let output = String::from_utf8(bytes.clone()).unwrap();
        assert!(output.starts_with(
            "algorithm,text_size,pattern_size,runs,match_index,mean_elapsed_ns,aux_space_bytes\n"
        ));

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let rows: Vec<ExperimentRecord> = reader.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(rows, vec![sample_record()]);
    }
}
