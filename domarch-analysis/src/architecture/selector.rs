//! Primary-source selection: the stage-1 source with the best coverage
//! seeds the architecture.

use domarch_core::config::StageSourceSet;
use domarch_core::types::collections::FxHashMap;
use domarch_core::types::{Architecture, Assignment, StageRef};
use tracing::trace;

use super::expander::candidate_cmp;

/// Outcome of primary-source selection for one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimarySelection {
    /// Seed architecture: the winning source's intervals, or empty when no
    /// stage-1 source produced any.
    pub architecture: Architecture,
    pub source: Option<String>,
}

/// Pick the stage-1 source whose intervals cover the most of the sequence.
///
/// Coverage is measured on the architecture the source would build alone,
/// with the same overlap rules the expander applies, so redundant intra-
/// source hits do not inflate a source's score. Exact coverage ties break
/// to the lexicographically smallest source name.
pub fn select_primary(
    sequence_id: &str,
    length: u32,
    assignments: &[Assignment],
    stage1_sources: &StageSourceSet,
    max_overlap: u32,
) -> PrimarySelection {
    let mut by_source: FxHashMap<&str, Vec<&Assignment>> = FxHashMap::default();
    for assignment in assignments {
        if stage1_sources.contains(&assignment.source) {
            by_source
                .entry(assignment.source.as_str())
                .or_default()
                .push(assignment);
        }
    }

    let mut sources: Vec<&str> = by_source.keys().copied().collect();
    sources.sort_unstable();

    let mut best: Option<(u32, &str, Architecture)> = None;
    for source in sources {
        let trial = build_source_architecture(
            sequence_id,
            length,
            &by_source[source],
            max_overlap,
        );
        let covered = trial.covered_len();
        trace!(sequence = sequence_id, source, covered, "stage-1 coverage");
        // Strict comparison: the first source at a given coverage wins, and
        // sources are visited in lexical order.
        if best.as_ref().map_or(true, |(best_covered, _, _)| covered > *best_covered) {
            best = Some((covered, source, trial));
        }
    }

    match best {
        Some((_, source, architecture)) => PrimarySelection {
            architecture,
            source: Some(source.to_string()),
        },
        None => PrimarySelection {
            architecture: Architecture::new(sequence_id, length),
            source: None,
        },
    }
}

/// Build the architecture one source would produce alone, inserting its
/// assignments greedily in canonical candidate order.
fn build_source_architecture(
    sequence_id: &str,
    length: u32,
    assignments: &[&Assignment],
    max_overlap: u32,
) -> Architecture {
    let mut ordered: Vec<&Assignment> = assignments.to_vec();
    ordered.sort_by(|a, b| candidate_cmp(a, b));

    let mut architecture = Architecture::new(sequence_id, length);
    for assignment in ordered {
        let _ = architecture.try_accept(
            domarch_core::types::AcceptedInterval {
                interval: assignment.interval,
                source: assignment.source.clone(),
                domain: assignment.domain.clone(),
                stage: StageRef::PRIMARY,
                reference_id: assignment.reference_id.clone(),
            },
            max_overlap,
        );
    }
    architecture
}
