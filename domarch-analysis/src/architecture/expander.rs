//! The greedy interval expander: one pass of candidate evaluation against a
//! seed architecture.

use std::cmp::Ordering;

use domarch_core::types::{AcceptedInterval, Architecture, Assignment, StageRef};
use tracing::trace;

/// Canonical candidate order: longest interval first, ties by ascending
/// start position, then source name, then domain id. Total and
/// deterministic for any assignment set.
pub fn candidate_cmp(a: &Assignment, b: &Assignment) -> Ordering {
    b.assigned_len()
        .cmp(&a.assigned_len())
        .then_with(|| a.interval.start.cmp(&b.interval.start))
        .then_with(|| a.source.cmp(&b.source))
        .then_with(|| a.domain.cmp(&b.domain))
}

/// Run one expansion stage: evaluate `pool` in canonical order against a
/// copy of `seed`, accepting greedily. Accepted candidates affect the
/// evaluation of every later candidate in the same pass.
///
/// Returns the grown architecture; `seed` itself is untouched, so stages
/// can be snapshotted and replayed.
pub fn expand_stage(
    seed: &Architecture,
    mut pool: Vec<&Assignment>,
    stage: StageRef,
    max_overlap: u32,
) -> Architecture {
    pool.sort_by(|a, b| candidate_cmp(a, b));

    let mut architecture = seed.clone();
    for candidate in pool {
        let accepted = AcceptedInterval {
            interval: candidate.interval,
            source: candidate.source.clone(),
            domain: candidate.domain.clone(),
            stage,
            reference_id: candidate.reference_id.clone(),
        };
        match architecture.try_accept(accepted, max_overlap) {
            Ok(()) => {}
            Err(conflict) => {
                trace!(
                    candidate = %candidate.short_repr(),
                    ?conflict,
                    "candidate rejected"
                );
            }
        }
    }
    architecture
}

#[cfg(test)]
mod tests {
    use super::*;
    use domarch_core::types::Interval;

    const STAGE: StageRef = StageRef::Known(2);

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

    fn expand(seed: &Architecture, pool: &[Assignment]) -> Architecture {
        expand_stage(seed, pool.iter().collect(), STAGE, 20)
    }

    #[test]
    fn longest_candidate_is_tried_first() {
        let seed = Architecture::new("s1", 300);
        // The long B interval is evaluated before the short A one, so A's
        // conflicting interval loses even though it appears first.
        let pool = vec![
            assignment("A", "a1", 10, 60),
            assignment("B", "b1", 1, 200),
        ];
        let arch = expand(&seed, &pool);
        assert_eq!(arch.len(), 1);
        assert_eq!(arch.intervals()[0].source, "B");
    }

    #[test]
    fn equal_length_ties_break_by_start_then_source() {
        let pool = vec![
            assignment("B", "b1", 100, 199),
            assignment("A", "a1", 100, 199),
            assignment("A", "a0", 50, 149),
        ];
        let mut ordered: Vec<&Assignment> = pool.iter().collect();
        ordered.sort_by(|a, b| candidate_cmp(a, b));
        // Start 50 precedes start 100; at start 100, source A precedes B.
        assert_eq!(ordered[0].domain, "a0");
        assert_eq!(ordered[1].domain, "a1");
        assert_eq!(ordered[2].domain, "b1");
    }

    #[test]
    fn acceptance_is_greedy_within_the_pass() {
        let seed = Architecture::new("s1", 300);
        let pool = vec![
            assignment("A", "a1", 1, 150),
            // Overlaps a1 by 51 from a different source: rejected because
            // a1 was accepted earlier in this same pass.
            assignment("B", "b1", 100, 220),
            assignment("B", "b2", 200, 280),
        ];
        let arch = expand(&seed, &pool);
        let domains: Vec<&str> =
            arch.intervals().iter().map(|a| a.domain.as_str()).collect();
        assert_eq!(domains, vec!["a1", "b2"]);
    }

    #[test]
    fn stage_tag_is_applied_to_accepted_intervals() {
        let seed = Architecture::new("s1", 300);
        let arch = expand(&seed, &[assignment("A", "a1", 1, 100)]);
        assert_eq!(arch.intervals()[0].stage, STAGE);
    }

    #[test]
    fn duplicate_of_seed_interval_is_rejected() {
        let mut seed = Architecture::new("s1", 300);
        seed.try_accept(
            AcceptedInterval {
                interval: Interval::new(1, 100),
                source: "A".to_string(),
                domain: "a1".to_string(),
                stage: StageRef::PRIMARY,
                reference_id: None,
            },
            20,
        )
        .unwrap();
        let arch = expand(&seed, &[assignment("A", "a1", 1, 100)]);
        assert_eq!(arch.len(), 1);
    }
}
