//! Known-domain architecture resolution: primary-source selection followed
//! by the staged greedy interval expander.

pub mod expander;
pub mod selector;

use domarch_core::config::StageSourceSet;
use domarch_core::types::{Architecture, Assignment, StageRef};

pub use expander::{candidate_cmp, expand_stage};
pub use selector::{select_primary, PrimarySelection};

/// A sequence's resolved known-domain architecture plus the evidence source
/// that seeded it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArchitecture {
    pub architecture: Architecture,
    pub primary_source: Option<String>,
}

/// Resolve one sequence's known-domain architecture: seed from the best
/// stage-1 source, then run one expansion pass per remaining stage, each
/// seeded by the previous stage's output.
///
/// The primary source's assignments are never retried after seeding; every
/// other assignment is a candidate in any stage whose source set admits it.
pub fn resolve_architecture(
    sequence_id: &str,
    length: u32,
    assignments: &[Assignment],
    stages: &[StageSourceSet],
    max_overlap: u32,
) -> ResolvedArchitecture {
    let Some((first_stage, rest)) = stages.split_first() else {
        return ResolvedArchitecture {
            architecture: Architecture::new(sequence_id, length),
            primary_source: None,
        };
    };

    let selection = select_primary(sequence_id, length, assignments, first_stage, max_overlap);
    let mut architecture = selection.architecture;

    for (offset, sources) in rest.iter().enumerate() {
        let stage = StageRef::Known(offset as u32 + 2);
        let pool: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| sources.contains(&a.source))
            .filter(|a| selection.source.as_deref() != Some(a.source.as_str()))
            .collect();
        architecture = expand_stage(&architecture, pool, stage, max_overlap);
    }

    ResolvedArchitecture {
        architecture,
        primary_source: selection.source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domarch_core::config::StageConfig;
    use domarch_core::types::Interval;

    fn assignment(source: &str, domain: &str, start: u32, end: u32) -> Assignment {
        Assignment {
            sequence_id: "s1".to_string(),
            source: source.to_string(),
            domain: domain.to_string(),
            interval: Interval::new(start, end),
            significance: None,
            reference_id: None,
        }
    }

    #[test]
    fn stages_widen_the_candidate_pool() {
        // HMMPanther is admitted only in the final stage.
        let stages = StageConfig::default().compile();
        let assignments = vec![
            assignment("HMMPfam", "PF1", 1, 100),
            assignment("HMMPanther", "PTHR1", 150, 250),
        ];
        let resolved = resolve_architecture("s1", 300, &assignments, &stages, 20);

        assert_eq!(resolved.primary_source.as_deref(), Some("HMMPfam"));
        let arch = &resolved.architecture;
        assert_eq!(arch.len(), 2);
        let panther = arch
            .intervals()
            .iter()
            .find(|a| a.source == "HMMPanther")
            .unwrap();
        assert_eq!(panther.stage, StageRef::Known(3));
    }

    #[test]
    fn cross_source_overlap_never_enters() {
        let stages = StageConfig::default().compile();
        let assignments = vec![
            assignment("HMMPfam", "PF1", 1, 100),
            assignment("HMMSmart", "SM1", 50, 150),
        ];
        let resolved = resolve_architecture("s1", 300, &assignments, &stages, 20);
        assert_eq!(resolved.architecture.len(), 1);
    }

    #[test]
    fn no_stage_one_source_yields_empty_seed() {
        let stages = StageConfig::default().compile();
        let assignments = vec![assignment("HMMPanther", "PTHR1", 1, 100)];
        let resolved = resolve_architecture("s1", 300, &assignments, &stages, 20);

        assert_eq!(resolved.primary_source, None);
        // The panther assignment still enters at the permissive final stage.
        assert_eq!(resolved.architecture.len(), 1);
        assert_eq!(
            resolved.architecture.intervals()[0].stage,
            StageRef::Known(3)
        );
    }

    #[test]
    fn empty_stage_list_yields_empty_architecture() {
        let resolved = resolve_architecture("s1", 300, &[], &[], 20);
        assert!(resolved.architecture.is_empty());
        assert_eq!(resolved.primary_source, None);
    }
}
