//! Detailed architecture report: one block per sequence.

use std::fmt::Write;

use domarch_analysis::consensus::ConsensusArchitecture;

use crate::lookup::DomainNameLookup;

/// Formats the per-sequence detail blocks: primary source, coverage with
/// and without novel domains, and one line per interval with provenance.
pub struct DetailReportFormatter;

impl DetailReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(
        &self,
        architectures: &[ConsensusArchitecture],
        lookup: &impl DomainNameLookup,
    ) -> String {
        let mut out = String::new();
        for arch in architectures {
            self.format_block(&mut out, arch, lookup);
        }
        out
    }

    fn format_block(
        &self,
        out: &mut String,
        arch: &ConsensusArchitecture,
        lookup: &impl DomainNameLookup,
    ) {
        let _ = writeln!(out, "{}", arch.sequence_id);
        let _ = writeln!(
            out,
            "    Primary assignment source: {}",
            arch.primary_source.as_deref().unwrap_or("None")
        );
        let _ = writeln!(out, "    Coverage: {:.3}", arch.coverage);
        let _ = writeln!(
            out,
            "    Coverage w/o novel domains: {:.3}",
            arch.coverage_known
        );
        for iv in &arch.intervals {
            let _ = write!(
                out,
                "    {:>4}-{:>4}: {} ({}, stage: {})",
                iv.interval.start, iv.interval.end, iv.label, iv.source, iv.stage
            );
            if let Some(reference) = &iv.reference_id {
                let _ = write!(out, " (reference: {reference})");
            }
            let _ = writeln!(out);
            if let Some(description) = lookup.describe(&iv.label) {
                let _ = writeln!(out, "               {description}");
            }
        }
        let _ = writeln!(out);
    }
}

impl Default for DetailReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
