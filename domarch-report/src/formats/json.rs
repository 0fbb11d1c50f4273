//! JSON export of the consensus architectures.

use domarch_analysis::consensus::ConsensusArchitecture;

/// Serializes the full consensus list as pretty-printed JSON, preserving
/// the merger's output order.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(
        &self,
        architectures: &[ConsensusArchitecture],
    ) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(architectures)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
