//! Random corpus generation for experiments.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Symbols drawn by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolClass {
    /// `A..=Z`
    #[default]
    Uppercase,
    /// `a..=z`
    Lowercase,
    /// `A..=Z` and `a..=z`
    Mixed,
}

impl SymbolClass {
    fn draw(self, rng: &mut StdRng) -> char {
        let offset = match self {
            Self::Uppercase => b'A' + rng.gen_range(0..26),
            Self::Lowercase => b'a' + rng.gen_range(0..26),
            Self::Mixed => match rng.gen_range(0..52) {
                n @ 0..=25 => b'A' + n,
                n => b'a' + (n - 26),
            },
        };
        char::from(offset)
    }
}

/// Seedable generator of random texts and patterns.
#[derive(Debug, Clone)]
pub struct CorpusGenerator {
    rng: StdRng,
    symbols: SymbolClass,
}

impl CorpusGenerator {
    /// Creates a generator seeded from system entropy.
    pub fn new(symbols: SymbolClass) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            symbols,
        }
    }

    /// Creates a deterministic generator.
    pub fn seeded(seed: u64, symbols: SymbolClass) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            symbols,
        }
    }

    /// Creates a generator, seeded when `seed` is set.
    pub fn from_seed(seed: Option<u64>, symbols: SymbolClass) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed, symbols),
            None => Self::new(symbols),
        }
    }

    /// Random text of `len` symbols.
    pub fn text(&mut self, len: usize) -> String {
        (0..len).map(|_| self.symbols.draw(&mut self.rng)).collect()
    }

    /// Random pattern of `len` symbols.
    pub fn pattern(&mut self, len: usize) -> String {
        self.text(len)
    }

    /// Overwrites `text` with `pattern` at a random offset.
    ///
    /// Returns the new text and the symbol offset of the planted pattern. A
    /// text shorter than the pattern is replaced by the pattern itself.
    pub fn plant(&mut self, text: &str, pattern: &str) -> (String, usize) {
        let text: Vec<char> = text.chars().collect();
        let pattern_len = pattern.chars().count();
        if text.len() < pattern_len {
            return (pattern.to_string(), 0);
        }

        let offset = self.rng.gen_range(0..=text.len() - pattern_len);
        let planted = text[..offset]
            .iter()
            .copied()
            .chain(pattern.chars())
            .chain(text[offset + pattern_len..].iter().copied())
            .collect();

        (planted, offset)
    }
}
