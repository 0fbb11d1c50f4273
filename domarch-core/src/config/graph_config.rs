//! Similarity-graph edge configuration.

use serde::{Deserialize, Serialize};

/// How the alignment length of a pairwise record is normalized before the
/// minimum-length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Use the raw alignment length.
    #[default]
    Off,
    /// Divide by the query fragment's length.
    Query,
    /// Divide by the hit fragment's length.
    Hit,
    /// Divide by the shorter fragment's length.
    Smaller,
    /// Divide by the longer fragment's length.
    Larger,
}

/// Configuration for similarity-graph construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GraphConfig {
    /// Minimum percent identity for an edge. Default: 0.
    pub min_identity: Option<f64>,
    /// Minimum (possibly normalized) alignment length for an edge.
    /// Default: 0.
    pub min_alignment_length: Option<f64>,
    /// Maximum significance for an edge. Default: 100.
    pub max_significance: Option<f64>,
    /// Alignment-length normalization mode. Default: off.
    pub normalization: Option<NormalizationMode>,
}

impl GraphConfig {
    /// Returns the effective minimum percent identity, defaulting to 0.
    pub fn effective_min_identity(&self) -> f64 {
        self.min_identity.unwrap_or(0.0)
    }

    /// Returns the effective minimum alignment length, defaulting to 0.
    pub fn effective_min_alignment_length(&self) -> f64 {
        self.min_alignment_length.unwrap_or(0.0)
    }

    /// Returns the effective maximum significance, defaulting to 100.
    pub fn effective_max_significance(&self) -> f64 {
        self.max_significance.unwrap_or(100.0)
    }

    /// Returns the effective normalization mode, defaulting to off.
    pub fn effective_normalization(&self) -> NormalizationMode {
        self.normalization.unwrap_or_default()
    }
}
