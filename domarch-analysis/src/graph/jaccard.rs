//! Jaccard edge pruning over a graph snapshot.

use domarch_core::config::ClusterConfig;
use domarch_core::types::collections::FxHashSet;
use petgraph::graph::NodeIndex;
use tracing::{info, warn};

use super::types::SimilarityGraph;

/// Prune edges whose endpoints' neighbourhoods are insufficiently similar.
///
/// Neighbourhood sets are taken from the pre-filter graph, so the pass is
/// order-independent: removing one edge never changes another edge's
/// similarity. Only existing edges are candidates; the filter cannot add
/// edges, and the output edge set is always a subset of the input's.
pub fn prune_edges(graph: &SimilarityGraph, config: &ClusterConfig) -> SimilarityGraph {
    if !config.effective_only_linked() {
        // Unlinked pairs would require creating edges, which this filter
        // never does.
        warn!("only_linked = false is unsupported; considering linked pairs only");
    }

    let min_similarity = config.effective_min_similarity();
    let assume_loops = config.effective_assume_loops();

    let neighbourhoods: Vec<FxHashSet<NodeIndex>> = graph
        .node_indices()
        .map(|index| {
            let mut set: FxHashSet<NodeIndex> = graph.neighbors(index).collect();
            if assume_loops {
                set.insert(index);
            }
            set
        })
        .collect();

    let pruned = graph.filtered(|a, b, _| {
        jaccard_similarity(&neighbourhoods[a.index()], &neighbourhoods[b.index()])
            >= min_similarity
    });

    info!(
        edges_before = graph.edge_count(),
        edges_after = pruned.edge_count(),
        "jaccard pruning done"
    );
    pruned
}

/// Jaccard similarity of two neighbourhood sets: |A ∩ B| / |A ∪ B|.
/// Two empty sets count as fully similar.
pub fn jaccard_similarity(a: &FxHashSet<NodeIndex>, b: &FxHashSet<NodeIndex>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|index| large.contains(index)).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::EdgeWeight;
    use domarch_core::types::{Fragment, Interval};

    fn weight() -> EdgeWeight {
        EdgeWeight {
            identity: 90.0,
            normalized_length: 50.0,
            significance: 1e-10,
        }
    }

    fn graph_with_edges(n: usize, edges: &[(usize, usize)]) -> SimilarityGraph {
        let fragments: Vec<Fragment> = (0..n)
            .map(|i| Fragment::new(format!("s{i}"), Interval::new(1, 100)))
            .collect();
        let mut graph = SimilarityGraph::with_fragments(&fragments);
        let indices: Vec<_> = graph.node_indices().collect();
        for &(a, b) in edges {
            graph.add_edge(indices[a], indices[b], weight());
        }
        graph
    }

    fn config(min_similarity: f64) -> ClusterConfig {
        ClusterConfig {
            min_similarity: Some(min_similarity),
            ..Default::default()
        }
    }

    #[test]
    fn identical_neighbourhoods_survive_any_threshold() {
        // Triangle: every closed neighbourhood is {0, 1, 2}.
        let graph = graph_with_edges(3, &[(0, 1), (1, 2), (0, 2)]);
        let pruned = prune_edges(&graph, &config(1.0));
        assert_eq!(pruned.edge_count(), 3);
    }

    #[test]
    fn weakly_shared_neighbourhoods_are_cut() {
        // Path 0-1-2-3: the end edges have little neighbourhood overlap.
        let graph = graph_with_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        // Closed sets: {0,1}, {0,1,2}, {1,2,3}, {2,3}.
        // Edge (1,2): |∩|=2, |∪|=4 → 0.5. Edge (0,1): |∩|=2, |∪|=3 → 2/3.
        let pruned = prune_edges(&graph, &config(0.6));
        assert_eq!(pruned.edge_count(), 2);
        let a = pruned.node_index("s1:1-100").unwrap();
        let b = pruned.node_index("s2:1-100").unwrap();
        assert!(!pruned.has_edge(a, b));
    }

    #[test]
    fn output_edges_are_subset_of_input() {
        let graph = graph_with_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)]);
        let pruned = prune_edges(&graph, &config(0.4));
        assert!(pruned.edge_count() <= graph.edge_count());
        for (a, b, _) in pruned.edges() {
            assert!(graph.has_edge(a, b));
        }
    }

    #[test]
    fn zero_threshold_removes_nothing() {
        let graph = graph_with_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let pruned = prune_edges(&graph, &config(0.0));
        assert_eq!(pruned.edge_count(), 3);
    }

    #[test]
    fn open_neighbourhoods_change_the_ratio() {
        // Triangle with open neighbourhoods: Γ(0) = {1,2}, Γ(1) = {0,2};
        // intersection {2}, union {0,1,2} → 1/3.
        let graph = graph_with_edges(3, &[(0, 1), (1, 2), (0, 2)]);
        let open = ClusterConfig {
            min_similarity: Some(0.5),
            assume_loops: Some(false),
            ..Default::default()
        };
        let pruned = prune_edges(&graph, &open);
        assert_eq!(pruned.edge_count(), 0);
    }
}
