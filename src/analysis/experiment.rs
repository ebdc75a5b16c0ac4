//! Experiment runner: measure every algorithm over a grid of corpus sizes.

use super::corpus::CorpusGenerator;
use super::prepared::PreparedSearch;
use super::report::{index_or_sentinel, ExperimentRecord, ReportSink};
use super::space::SpaceReport;
use super::timing::time_runs;
use crate::config::ExperimentConfig;
use crate::error::AppResult;
use crate::matching::{Algorithm, Alphabet};

/// Runs the configured text-size by pattern-size grid.
///
/// For each cell a fresh random text and pattern are generated (the pattern
/// optionally planted into the text), then every configured algorithm is
/// timed over `runs` repetitions on that same pair. Only the scan is timed:
/// decoding, preprocessing and alphabet checks happen once per cell before
/// the clock starts.
#[derive(Debug, Clone)]
pub struct ExperimentRunner {
    config: ExperimentConfig,
    alphabet: Alphabet,
}

impl ExperimentRunner {
    /// Creates a runner for `config`, using `alphabet` for Boyer-Moore.
    pub fn new(config: ExperimentConfig, alphabet: Alphabet) -> Self {
        Self { config, alphabet }
    }

    /// Runs the grid, delivering each record to every sink in order.
    ///
    /// Returns all records produced.
    ///
    /// # Errors
    ///
    /// Stops at the first matcher or sink failure.
    pub fn run(&self, sinks: &mut [&mut dyn ReportSink]) -> AppResult<Vec<ExperimentRecord>> {
        let mut generator = CorpusGenerator::from_seed(self.config.seed, self.config.symbols);
        let mut records = Vec::new();

        tracing::info!(
            text_sizes = ?self.config.text_sizes,
            pattern_sizes = ?self.config.pattern_sizes,
            runs = self.config.runs,
            "starting experiment"
        );

        for &text_size in &self.config.text_sizes {
            for &pattern_size in &self.config.pattern_sizes {
                if pattern_size > text_size && !self.config.insert_pattern {
                    tracing::warn!(text_size, pattern_size, "pattern longer than text; no match possible");
                }

                let pattern = generator.pattern(pattern_size);
                let text = generator.text(text_size);
                let text = if self.config.insert_pattern {
                    generator.plant(&text, &pattern).0
                } else {
                    text
                };
                let text: Vec<char> = text.chars().collect();
                let pattern: Vec<char> = pattern.chars().collect();

                for &algorithm in &self.config.algorithms {
                    let record = self.measure(algorithm, &text, &pattern)?;
                    for sink in sinks.iter_mut() {
                        sink.record(&record)?;
                    }
                    records.push(record);
                }
            }
        }

        for sink in sinks.iter_mut() {
            sink.finish()?;
        }

        tracing::info!(records = records.len(), "experiment finished");
        Ok(records)
    }

    fn measure(&self, algorithm: Algorithm, text: &[char], pattern: &[char]) -> AppResult<ExperimentRecord> {
        let prepared = PreparedSearch::new(algorithm, pattern, &self.alphabet)?;
        prepared.check_text(text)?;

        let (match_index, timing) = time_runs(self.config.runs, || prepared.find(text));
        let space = SpaceReport::of(&prepared);

        tracing::debug!(
            %algorithm,
            text_size = text.len(),
            pattern_size = pattern.len(),
            mean_ns = timing.mean_nanos(),
            "cell measured"
        );

        Ok(ExperimentRecord {
            algorithm,
            text_size: text.len(),
            pattern_size: pattern.len(),
            runs: timing.runs,
            match_index: index_or_sentinel(match_index),
            mean_elapsed_ns: timing.mean_nanos(),
            aux_space_bytes: space.total_bytes(),
        })
    }
}
