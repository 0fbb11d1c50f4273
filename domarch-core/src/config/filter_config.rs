//! Assignment filter configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for the assignment filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterConfig {
    /// Evidence sources discarded entirely.
    pub untrusted_sources: Vec<String>,
    /// Per-source maximum significance; assignments above their source's
    /// threshold are dropped.
    pub significance_thresholds: HashMap<String, f64>,
    /// Threshold for sources without an explicit entry. Absent means
    /// infinite, i.e. no significance filtering for those sources.
    pub default_significance: Option<f64>,
    /// Maximum overlap tolerated between partially overlapping intervals
    /// from the same source. Default: 20.
    pub max_overlap: Option<u32>,
}

impl FilterConfig {
    /// Returns the effective default significance threshold.
    pub fn effective_default_significance(&self) -> f64 {
        self.default_significance.unwrap_or(f64::INFINITY)
    }

    /// Returns the effective threshold for one source.
    pub fn threshold_for(&self, source: &str) -> f64 {
        self.significance_thresholds
            .get(source)
            .copied()
            .unwrap_or_else(|| self.effective_default_significance())
    }

    /// Returns the effective same-source overlap tolerance, defaulting to 20.
    pub fn effective_max_overlap(&self) -> u32 {
        self.max_overlap.unwrap_or(20)
    }
}
