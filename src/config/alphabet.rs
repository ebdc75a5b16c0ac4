//! Alphabet configuration module.
//!
//! Selects the symbol set and unmapped-symbol policy used by Boyer-Moore.

use super::ConfigResult;
use super::Validate;
use crate::matching::{Alphabet, AlphabetKind, UnmappedPolicy};
use serde::{Deserialize, Serialize};

/// Alphabet configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// Symbol set (`latin` or `ascii`)
    pub kind: AlphabetKind,

    /// What to do with symbols outside the set (`reject` or `alias`)
    pub unmapped: UnmappedPolicy,
}

impl AlphabetConfig {
    /// Builds the alphabet described by this configuration.
    pub fn to_alphabet(self) -> Alphabet {
        Alphabet::new(self.kind, self.unmapped)
    }
}

impl Validate for AlphabetConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.unmapped == UnmappedPolicy::Alias {
            tracing::warn!(
                kind = ?self.kind,
                "unmapped symbols share index 0; bad character shifts degrade on such input"
            );
        }
        Ok(())
    }
}
