//! Consensus merge: known-domain architectures plus novel-domain clusters,
//! combined into the final ordered architecture per sequence.

use domarch_core::types::collections::{FxHashMap, FxHashSet};
use domarch_core::types::interval::union_len;
use domarch_core::types::{Interval, StageRef};
use serde::Serialize;
use tracing::warn;

use crate::architecture::ResolvedArchitecture;
use crate::graph::NovelDomain;

/// Source label reported for novel-domain intervals.
pub const NOVEL_SOURCE: &str = "Novel";

/// Architecture label reported for sequences with no domains at all.
pub const NO_ASSIGNMENT_LABEL: &str = "NO_ASSIGNMENT";

/// One interval of the final consensus architecture, with provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusInterval {
    pub interval: Interval,
    /// Known domain id or novel domain id.
    pub label: String,
    /// Originating evidence source, or [`NOVEL_SOURCE`].
    pub source: String,
    pub stage: StageRef,
    pub reference_id: Option<String>,
}

/// The final, frozen architecture of one sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusArchitecture {
    pub sequence_id: String,
    pub length: u32,
    pub primary_source: Option<String>,
    /// Intervals sorted by start, then end, then label. Non-overlapping
    /// across sources; same-source intervals may nest or overlap within
    /// the resolver's tolerance.
    pub intervals: Vec<ConsensusInterval>,
    /// Fraction of residues covered, novel domains included.
    pub coverage: f64,
    /// Fraction of residues covered by known domains alone.
    pub coverage_known: f64,
    /// Semicolon-joined domain labels, or [`NO_ASSIGNMENT_LABEL`].
    pub label: String,
    /// Number of sequences in this run sharing exactly this label string.
    pub frequency: usize,
}

impl ConsensusArchitecture {
    /// Domain labels in interval order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.intervals.iter().map(|iv| iv.label.as_str())
    }
}

/// Merge the per-sequence known architectures with the novel-domain
/// clusters. The result is ordered for output: most frequent architecture
/// first, equal frequencies by label string, members of one architecture by
/// sequence id.
pub fn merge_consensus(
    resolved: Vec<ResolvedArchitecture>,
    novel_domains: &[NovelDomain],
) -> Vec<ConsensusArchitecture> {
    let mut novel_by_sequence: FxHashMap<&str, Vec<(Interval, &str)>> = FxHashMap::default();
    for domain in novel_domains {
        for member in &domain.members {
            novel_by_sequence
                .entry(member.sequence_id.as_str())
                .or_default()
                .push((member.interval, domain.id.as_str()));
        }
    }

    let known_ids: FxHashSet<&str> = resolved
        .iter()
        .map(|r| r.architecture.sequence_id.as_str())
        .collect();
    for sequence_id in novel_by_sequence.keys() {
        if !known_ids.contains(sequence_id) {
            warn!(
                sequence = %sequence_id,
                "novel domain member references a sequence without an architecture"
            );
        }
    }

    let mut merged: Vec<ConsensusArchitecture> = resolved
        .into_iter()
        .map(|r| {
            let novel = novel_by_sequence
                .get(r.architecture.sequence_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            merge_one(r, novel)
        })
        .collect();

    let mut frequencies: FxHashMap<String, usize> = FxHashMap::default();
    for arch in &merged {
        *frequencies.entry(arch.label.clone()).or_default() += 1;
    }
    for arch in &mut merged {
        arch.frequency = frequencies[&arch.label];
    }

    merged.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.label.cmp(&b.label))
            .then_with(|| a.sequence_id.cmp(&b.sequence_id))
    });
    merged
}

fn merge_one(
    resolved: ResolvedArchitecture,
    novel: &[(Interval, &str)],
) -> ConsensusArchitecture {
    let arch = resolved.architecture;
    let length = arch.length;

    let known_intervals: Vec<Interval> =
        arch.intervals().iter().map(|a| a.interval).collect();
    let mut all_intervals = known_intervals.clone();
    all_intervals.extend(novel.iter().map(|(interval, _)| *interval));

    let coverage_known = fraction(union_len(known_intervals), length);
    let coverage = fraction(union_len(all_intervals), length);

    let mut intervals: Vec<ConsensusInterval> = arch
        .intervals()
        .iter()
        .map(|a| ConsensusInterval {
            interval: a.interval,
            label: a.domain.clone(),
            source: a.source.clone(),
            stage: a.stage,
            reference_id: a.reference_id.clone(),
        })
        .collect();
    intervals.extend(novel.iter().map(|(interval, id)| ConsensusInterval {
        interval: *interval,
        label: (*id).to_string(),
        source: NOVEL_SOURCE.to_string(),
        stage: StageRef::Novel,
        reference_id: None,
    }));
    intervals.sort_by(|a, b| {
        a.interval
            .cmp(&b.interval)
            .then_with(|| a.label.cmp(&b.label))
    });

    let label = if intervals.is_empty() {
        NO_ASSIGNMENT_LABEL.to_string()
    } else {
        let labels: Vec<&str> = intervals.iter().map(|iv| iv.label.as_str()).collect();
        labels.join(";")
    };

    ConsensusArchitecture {
        sequence_id: arch.sequence_id.clone(),
        length,
        primary_source: resolved.primary_source,
        intervals,
        coverage,
        coverage_known,
        label,
        frequency: 0,
    }
}

fn fraction(covered: u32, length: u32) -> f64 {
    if length == 0 {
        return 0.0;
    }
    f64::from(covered) / f64::from(length)
}
