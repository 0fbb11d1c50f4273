//! Compact architecture table: one tab-separated row per sequence.

use domarch_analysis::consensus::{ConsensusArchitecture, NO_ASSIGNMENT_LABEL};

use crate::lookup::DomainNameLookup;

/// Description column value for sequences without any domain.
const NO_DESCRIPTION: &str = "NO_DESCRIPTION";

/// Formats the compact table. Columns: sequence id, length, semicolon-
/// joined labels, architecture frequency, labels annotated with positions,
/// semicolon-joined descriptions.
pub struct CompactTableFormatter;

impl CompactTableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format all architectures, one row each, in the order given (the
    /// merger already sorted them most-frequent-first).
    pub fn format(
        &self,
        architectures: &[ConsensusArchitecture],
        lookup: &impl DomainNameLookup,
    ) -> String {
        let mut out = String::new();
        for arch in architectures {
            out.push_str(&self.format_row(arch, lookup));
            out.push('\n');
        }
        out
    }

    fn format_row(
        &self,
        arch: &ConsensusArchitecture,
        lookup: &impl DomainNameLookup,
    ) -> String {
        let (positions, descriptions) = if arch.intervals.is_empty() {
            (NO_ASSIGNMENT_LABEL.to_string(), NO_DESCRIPTION.to_string())
        } else {
            let positions: Vec<String> = arch
                .intervals
                .iter()
                .map(|iv| format!("{}({})", iv.label, iv.interval))
                .collect();
            let descriptions: Vec<&str> = arch
                .intervals
                .iter()
                .map(|iv| lookup.describe(&iv.label).unwrap_or(iv.label.as_str()))
                .collect();
            (positions.join(";"), descriptions.join(";"))
        };

        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            arch.sequence_id,
            arch.length,
            arch.label,
            arch.frequency,
            positions,
            descriptions
        )
    }
}

impl Default for CompactTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}
