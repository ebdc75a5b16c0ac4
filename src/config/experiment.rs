//! Experiment configuration module.
//!
//! This module defines the text-size by pattern-size grid measured by the
//! experiment runner, the number of timed runs per cell and where results go.

use super::ConfigResult;
use super::Validate;
use crate::analysis::corpus::SymbolClass;
use crate::error::config::ConfigError;
use crate::matching::Algorithm;
use serde::de::{self, IntoDeserializer, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

/// Experiment configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperimentConfig {
    /// Text lengths to test
    #[serde(deserialize_with = "one_or_many")]
    pub text_sizes: Vec<usize>,

    /// Pattern lengths to test
    #[serde(deserialize_with = "one_or_many")]
    pub pattern_sizes: Vec<usize>,

    /// Timed runs per grid cell; the mean is reported
    pub runs: u32,

    /// Seed for the corpus generator (random when unset)
    pub seed: Option<u64>,

    /// Symbols used for generated texts and patterns
    pub symbols: SymbolClass,

    /// Whether to plant the pattern into each generated text
    pub insert_pattern: bool,

    /// Algorithms to measure, in reporting order
    #[serde(deserialize_with = "one_or_many")]
    pub algorithms: Vec<Algorithm>,

    /// CSV output path
    pub output: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            text_sizes: vec![1000, 2000, 3000, 4000, 5000],
            pattern_sizes: vec![10, 20, 30, 40, 50],
            runs: 10,
            seed: None,
            symbols: SymbolClass::Lowercase,
            insert_pattern: false,
            algorithms: vec![Algorithm::BoyerMoore, Algorithm::Kmp],
            output: PathBuf::from("results.csv"),
        }
    }
}

impl ExperimentConfig {
    /// Replaces the measured algorithms, keeping the first occurrence of each.
    pub fn set_algorithms(&mut self, algorithms: impl IntoIterator<Item = Algorithm>) {
        self.algorithms.clear();
        for algorithm in algorithms {
            if !self.algorithms.contains(&algorithm) {
                self.algorithms.push(algorithm);
            }
        }
    }
}

impl Validate for ExperimentConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.text_sizes.is_empty() {
            return Err(ConfigError::ValidationError(
                "text_sizes cannot be empty".to_string(),
            ));
        }

        if self.pattern_sizes.is_empty() {
            return Err(ConfigError::ValidationError(
                "pattern_sizes cannot be empty".to_string(),
            ));
        }

        if self.pattern_sizes.contains(&0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "experiment.pattern_sizes".to_string(),
                message: "every pattern size must be greater than 0".to_string(),
            });
        }

        if self.runs == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "experiment.runs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.algorithms.is_empty() {
            return Err(ConfigError::ValidationError(
                "algorithms cannot be empty".to_string(),
            ));
        }

        if let Some(duplicate) = self
            .algorithms
            .iter()
            .enumerate()
            .find_map(|(i, a)| self.algorithms[..i].contains(a).then_some(a))
        {
            return Err(ConfigError::ValidationError(format!(
                "algorithm {duplicate} listed more than once"
            )));
        }

        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "output path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Accepts either a list or a single scalar.
///
/// An environment override holding one number (`..__TEXT_SIZES=5000`) arrives
/// as an integer rather than a one-element list.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OneOrMany<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrMany<T> {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a value or a list of values")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(value) = seq.next_element()? {
                values.push(value);
            }
            Ok(values)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            T::deserialize(v.into_deserializer()).map(|value| vec![value])
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            T::deserialize(v.into_deserializer()).map(|value| vec![value])
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            T::deserialize(v.into_deserializer()).map(|value| vec![value])
        }
    }

    deserializer.deserialize_any(OneOrMany(PhantomData))
}
