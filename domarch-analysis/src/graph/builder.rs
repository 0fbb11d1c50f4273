//! Similarity-graph construction from pairwise alignment records.

use domarch_core::config::{GraphConfig, NormalizationMode};
use domarch_core::errors::GraphError;
use domarch_core::types::Fragment;
use tracing::{debug, warn};

use super::types::{AlignmentRecord, EdgeWeight, SimilarityGraph};

/// A built graph plus the non-fatal record errors encountered on the way.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub graph: SimilarityGraph,
    pub errors: Vec<GraphError>,
}

/// Build the similarity graph: one node per fragment, one edge per distinct
/// fragment pair whose best alignment record passes the identity, length,
/// and significance thresholds.
///
/// Records referencing unknown fragments are skipped and reported. A pair
/// seen more than once keeps its first accepted record; self-pairs are
/// ignored outright.
pub fn build_graph(
    fragments: &[Fragment],
    records: &[AlignmentRecord],
    config: &GraphConfig,
) -> BuildOutcome {
    let mut outcome = BuildOutcome {
        graph: SimilarityGraph::with_fragments(fragments),
        ..Default::default()
    };

    let min_identity = config.effective_min_identity();
    let min_length = config.effective_min_alignment_length();
    let max_significance = config.effective_max_significance();
    let normalization = config.effective_normalization();

    for record in records {
        if record.query_id == record.hit_id {
            continue;
        }
        let (Some(query), Some(hit)) = (
            outcome.graph.node_index(&record.query_id),
            outcome.graph.node_index(&record.hit_id),
        ) else {
            let missing = if outcome.graph.node_index(&record.query_id).is_none() {
                &record.query_id
            } else {
                &record.hit_id
            };
            warn!(fragment = %missing, "alignment record references unknown fragment");
            outcome.errors.push(GraphError::UnknownFragment {
                fragment_id: missing.clone(),
            });
            continue;
        };

        let normalized_length = normalize_length(
            record.alignment_length,
            outcome.graph.fragment(query),
            outcome.graph.fragment(hit),
            normalization,
        );

        if record.identity < min_identity
            || normalized_length < min_length
            || record.significance > max_significance
        {
            continue;
        }

        if outcome.graph.has_edge(query, hit) {
            debug!(
                query = %record.query_id,
                hit = %record.hit_id,
                "duplicate alignment record for an existing edge"
            );
            continue;
        }

        outcome.graph.add_edge(
            query,
            hit,
            EdgeWeight {
                identity: record.identity,
                normalized_length,
                significance: record.significance,
            },
        );
    }

    outcome
}

fn normalize_length(
    alignment_length: f64,
    query: &Fragment,
    hit: &Fragment,
    mode: NormalizationMode,
) -> f64 {
    let divisor = match mode {
        NormalizationMode::Off => return alignment_length,
        NormalizationMode::Query => query.len(),
        NormalizationMode::Hit => hit.len(),
        NormalizationMode::Smaller => query.len().min(hit.len()),
        NormalizationMode::Larger => query.len().max(hit.len()),
    };
    alignment_length / f64::from(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domarch_core::types::Interval;

    fn fragment(seq: &str, start: u32, end: u32) -> Fragment {
        Fragment::new(seq, Interval::new(start, end))
    }

    fn record(query: &str, hit: &str, identity: f64, length: f64, sig: f64) -> AlignmentRecord {
        AlignmentRecord {
            query_id: query.to_string(),
            hit_id: hit.to_string(),
            identity,
            alignment_length: length,
            significance: sig,
        }
    }

    fn test_fragments() -> Vec<Fragment> {
        vec![fragment("s1", 1, 100), fragment("s2", 1, 50), fragment("s3", 1, 80)]
    }

    #[test]
    fn passing_record_creates_one_edge() {
        let config = GraphConfig {
            min_identity: Some(40.0),
            max_significance: Some(1e-3),
            ..Default::default()
        };
        let outcome = build_graph(
            &test_fragments(),
            &[record("s1:1-100", "s2:1-50", 80.0, 45.0, 1e-10)],
            &config,
        );
        assert_eq!(outcome.graph.edge_count(), 1);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn thresholds_reject_edges() {
        let config = GraphConfig {
            min_identity: Some(40.0),
            min_alignment_length: Some(30.0),
            max_significance: Some(1e-3),
            ..Default::default()
        };
        let records = [
            record("s1:1-100", "s2:1-50", 30.0, 45.0, 1e-10), // identity too low
            record("s1:1-100", "s3:1-80", 80.0, 10.0, 1e-10), // too short
            record("s2:1-50", "s3:1-80", 80.0, 45.0, 1.0),    // not significant
        ];
        let outcome = build_graph(&test_fragments(), &records, &config);
        assert_eq!(outcome.graph.edge_count(), 0);
    }

    #[test]
    fn normalization_divides_by_smaller_fragment() {
        // Alignment of 40 over fragments of length 100 and 50: normalized
        // by the smaller gives 0.8.
        let config = GraphConfig {
            min_alignment_length: Some(0.75),
            normalization: Some(NormalizationMode::Smaller),
            ..Default::default()
        };
        let outcome = build_graph(
            &test_fragments(),
            &[record("s1:1-100", "s2:1-50", 80.0, 40.0, 1e-10)],
            &config,
        );
        assert_eq!(outcome.graph.edge_count(), 1);

        let stricter = GraphConfig {
            min_alignment_length: Some(0.85),
            normalization: Some(NormalizationMode::Smaller),
            ..Default::default()
        };
        let outcome = build_graph(
            &test_fragments(),
            &[record("s1:1-100", "s2:1-50", 80.0, 40.0, 1e-10)],
            &stricter,
        );
        assert_eq!(outcome.graph.edge_count(), 0);
    }

    #[test]
    fn reversed_duplicate_pair_is_ignored() {
        let config = GraphConfig::default();
        let records = [
            record("s1:1-100", "s2:1-50", 80.0, 45.0, 1e-10),
            record("s2:1-50", "s1:1-100", 85.0, 45.0, 1e-12),
        ];
        let outcome = build_graph(&test_fragments(), &records, &config);
        assert_eq!(outcome.graph.edge_count(), 1);
        // First record wins.
        let (_, _, weight) = outcome.graph.edges().next().unwrap();
        assert_eq!(weight.identity, 80.0);
    }

    #[test]
    fn self_pair_never_materializes() {
        let outcome = build_graph(
            &test_fragments(),
            &[record("s1:1-100", "s1:1-100", 100.0, 100.0, 0.0)],
            &GraphConfig::default(),
        );
        assert_eq!(outcome.graph.edge_count(), 0);
    }

    #[test]
    fn unknown_fragment_is_reported_not_fatal() {
        let outcome = build_graph(
            &test_fragments(),
            &[record("s1:1-100", "ghost:1-10", 80.0, 45.0, 1e-10)],
            &GraphConfig::default(),
        );
        assert_eq!(outcome.graph.edge_count(), 0);
        assert_eq!(outcome.errors.len(), 1);
    }
}
