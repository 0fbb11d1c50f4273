//! Property tests for the resolver invariants: whatever the input, the
//! known architecture obeys the overlap rules and the fragment complement
//! reconstructs the sequence.

use domarch_analysis::architecture::resolve_architecture;
use domarch_analysis::unassigned::extract_fragments;
use domarch_core::config::{FragmentConfig, StageConfig};
use domarch_core::types::interval::union_len;
use domarch_core::types::{Assignment, Interval, StageRef};
use proptest::prelude::*;

const SEQ_LEN: u32 = 240;
const MAX_OVERLAP: u32 = 20;

fn arb_assignment() -> impl Strategy<Value = Assignment> {
    (
        1u32..=SEQ_LEN,
        1u32..=120,
        prop::sample::select(vec!["HMMPfam", "HMMSmart", "Gene3D", "HMMPanther"]),
        0u32..6,
    )
        .prop_map(|(start, len, source, domain_no)| Assignment {
            sequence_id: "s1".to_string(),
            source: source.to_string(),
            domain: format!("D{domain_no}"),
            interval: Interval::new(start, (start + len - 1).min(SEQ_LEN)),
            significance: None,
            reference_id: None,
        })
}

proptest! {
    /// Intervals from different sources never overlap in the output.
    #[test]
    fn no_cross_source_overlap(assignments in prop::collection::vec(arb_assignment(), 0..24)) {
        let stages = StageConfig::default().compile();
        let resolved =
            resolve_architecture("s1", SEQ_LEN, &assignments, &stages, MAX_OVERLAP);
        let intervals = resolved.architecture.intervals();
        for (i, a) in intervals.iter().enumerate() {
            for b in &intervals[i + 1..] {
                if a.source != b.source {
                    prop_assert!(
                        !a.interval.overlaps(&b.interval),
                        "{}/{} overlaps {}/{}",
                        a.source, a.interval, b.source, b.interval
                    );
                }
            }
        }
    }

    /// Same-source intervals either nest or overlap within the tolerance.
    #[test]
    fn same_source_overlap_bounded(assignments in prop::collection::vec(arb_assignment(), 0..24)) {
        let stages = StageConfig::default().compile();
        let resolved =
            resolve_architecture("s1", SEQ_LEN, &assignments, &stages, MAX_OVERLAP);
        let intervals = resolved.architecture.intervals();
        for (i, a) in intervals.iter().enumerate() {
            for b in &intervals[i + 1..] {
                if a.source == b.source
                    && !a.interval.contains(&b.interval)
                    && !b.interval.contains(&a.interval)
                {
                    prop_assert!(a.interval.overlap_len(&b.interval) <= MAX_OVERLAP);
                }
            }
        }
    }

    /// Resolution is a pure function of its input.
    #[test]
    fn resolution_is_deterministic(assignments in prop::collection::vec(arb_assignment(), 0..24)) {
        let stages = StageConfig::default().compile();
        let first =
            resolve_architecture("s1", SEQ_LEN, &assignments, &stages, MAX_OVERLAP);
        let second =
            resolve_architecture("s1", SEQ_LEN, &assignments, &stages, MAX_OVERLAP);
        prop_assert_eq!(first, second);
    }

    /// With no length filtering, covered intervals plus extracted fragments
    /// tile the sequence exactly.
    #[test]
    fn fragments_complement_the_architecture(assignments in prop::collection::vec(arb_assignment(), 0..24)) {
        let stages = StageConfig::default().compile();
        let resolved =
            resolve_architecture("s1", SEQ_LEN, &assignments, &stages, MAX_OVERLAP);
        let config = FragmentConfig {
            min_sequence_length: Some(0),
            min_fragment_length: Some(1),
        };
        let fragments = extract_fragments(&resolved.architecture, &config);

        let mut pieces: Vec<Interval> = resolved
            .architecture
            .intervals()
            .iter()
            .map(|a| a.interval)
            .collect();
        let covered = union_len(pieces.clone());
        pieces.extend(fragments.iter().map(|f| f.interval));
        prop_assert_eq!(union_len(pieces), SEQ_LEN);

        // Fragments never overlap accepted intervals.
        let fragment_total: u32 = fragments.iter().map(|f| f.len()).sum();
        prop_assert_eq!(covered + fragment_total, SEQ_LEN);
    }

    /// Every accepted interval keeps a stage tag consistent with the stage
    /// list it was resolved under.
    #[test]
    fn stage_tags_stay_in_range(assignments in prop::collection::vec(arb_assignment(), 0..24)) {
        let stages = StageConfig::default().compile();
        let resolved =
            resolve_architecture("s1", SEQ_LEN, &assignments, &stages, MAX_OVERLAP);
        for accepted in resolved.architecture.intervals() {
            match accepted.stage {
                StageRef::Known(n) => prop_assert!(n >= 1 && n as usize <= stages.len()),
                StageRef::Novel => prop_assert!(false, "resolver never emits novel"),
            }
        }
    }
}
