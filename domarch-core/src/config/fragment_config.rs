//! Unassigned-fragment extraction configuration.

use serde::{Deserialize, Serialize};

/// Configuration for unassigned-region extraction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FragmentConfig {
    /// Sequences shorter than this emit no fragments at all. Default: 0.
    pub min_sequence_length: Option<u32>,
    /// Gaps shorter than this are dropped individually. Default: 1;
    /// values below 1 are treated as 1.
    pub min_fragment_length: Option<u32>,
}

impl FragmentConfig {
    /// Returns the effective minimum sequence length, defaulting to 0.
    pub fn effective_min_sequence_length(&self) -> u32 {
        self.min_sequence_length.unwrap_or(0)
    }

    /// Returns the effective minimum fragment length, defaulting to 1.
    /// A configured value below 1 is clamped to 1.
    pub fn effective_min_fragment_length(&self) -> u32 {
        self.min_fragment_length.unwrap_or(1).max(1)
    }
}
