//! Assignment filtering: untrusted-source discard, significance thresholds,
//! interval validation, and the exclusion audit trail.

use domarch_core::config::FilterConfig;
use domarch_core::errors::InputError;
use domarch_core::types::collections::{FxHashMap, FxHashSet};
use domarch_core::types::Assignment;
use tracing::{debug, warn};

/// Reasons why whole sequences were excluded from the run. Kept as data so
/// callers can report them after the batch finishes; every entry is also
/// logged when recorded.
#[derive(Debug, Clone, Default)]
pub struct ExclusionLog {
    entries: Vec<(String, String)>,
}

impl ExclusionLog {
    pub fn record(&mut self, sequence_id: impl Into<String>, reason: impl Into<String>) {
        let sequence_id = sequence_id.into();
        let reason = reason.into();
        debug!(sequence = %sequence_id, %reason, "sequence excluded");
        self.entries.push((sequence_id, reason));
    }

    /// `(sequence id, reason)` pairs in recording order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn merge(&mut self, other: ExclusionLog) {
        self.entries.extend(other.entries);
    }
}

/// Filter output: surviving assignments grouped per sequence, the exclusion
/// audit trail, and the non-fatal record errors encountered.
#[derive(Debug, Default)]
pub struct FilteredAssignments {
    pub by_sequence: FxHashMap<String, Vec<Assignment>>,
    pub exclusions: ExclusionLog,
    pub errors: Vec<InputError>,
}

/// Discards untrusted evidence sources, applies per-source significance
/// thresholds, and rejects invalid intervals. Pure beyond the returned
/// value; input assignments are consumed.
pub struct AssignmentFilter {
    untrusted: FxHashSet<String>,
    config: FilterConfig,
}

impl AssignmentFilter {
    pub fn new(config: FilterConfig) -> Self {
        let untrusted = config.untrusted_sources.iter().cloned().collect();
        Self { untrusted, config }
    }

    /// Run the filter. `sequence_lengths` is the externally supplied
    /// sequence table; assignments referencing sequences outside it are
    /// skipped, as are assignments whose interval is malformed or reaches
    /// beyond the sequence end.
    pub fn filter(
        &self,
        assignments: Vec<Assignment>,
        sequence_lengths: &FxHashMap<String, u32>,
    ) -> FilteredAssignments {
        let mut result = FilteredAssignments::default();
        let mut seen_sequences: FxHashSet<String> = FxHashSet::default();

        for assignment in assignments {
            seen_sequences.insert(assignment.sequence_id.clone());

            if self.untrusted.contains(&assignment.source) {
                continue;
            }

            let Some(&length) = sequence_lengths.get(&assignment.sequence_id) else {
                warn!(
                    sequence = %assignment.sequence_id,
                    "assignment references a sequence missing from the sequence table"
                );
                result.errors.push(InputError::UnknownSequence {
                    sequence_id: assignment.sequence_id.clone(),
                });
                continue;
            };

            if !assignment.interval.is_well_formed() || assignment.interval.end > length {
                warn!(
                    sequence = %assignment.sequence_id,
                    assignment = %assignment.short_repr(),
                    "rejecting assignment with invalid interval"
                );
                result.errors.push(InputError::InvalidInterval {
                    sequence_id: assignment.sequence_id.clone(),
                    start: assignment.interval.start,
                    end: assignment.interval.end,
                    length,
                });
                continue;
            }

            if let Some(significance) = assignment.significance {
                if significance > self.config.threshold_for(&assignment.source) {
                    continue;
                }
            }

            let assignment = normalize_domain(assignment);
            result
                .by_sequence
                .entry(assignment.sequence_id.clone())
                .or_default()
                .push(assignment);
        }

        let mut fully_filtered: Vec<String> = seen_sequences
            .into_iter()
            .filter(|id| !result.by_sequence.contains_key(id))
            .collect();
        fully_filtered.sort_unstable();
        for sequence_id in fully_filtered {
            result.exclusions.record(
                sequence_id,
                "no assignments in the input data passed the filters",
            );
        }

        result
    }
}

/// Strip subfamily markers from domain ids: `PTHR10000:SF3` names a
/// subfamily of `PTHR10000`, and architectures are built at family level.
fn normalize_domain(mut assignment: Assignment) -> Assignment {
    if let Some(pos) = assignment.domain.find(":SF") {
        assignment.domain.truncate(pos);
    }
    assignment
}
