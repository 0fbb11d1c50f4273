//! Similarity-graph data types.

use domarch_core::types::collections::FxHashMap;
use domarch_core::types::Fragment;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// One pairwise alignment between two fragments, as reported by the
/// external alignment step. Query/hit order carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentRecord {
    pub query_id: String,
    pub hit_id: String,
    /// Percent identity of the aligned region.
    pub identity: f64,
    pub alignment_length: f64,
    pub significance: f64,
}

/// Similarity attributes stored on an accepted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeWeight {
    pub identity: f64,
    /// Alignment length after the configured normalization.
    pub normalized_length: f64,
    pub significance: f64,
}

/// Undirected graph over all fragments. Every fragment is a node from the
/// start; edges are added during construction and only ever removed
/// afterwards. Self-loops are never materialized.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    graph: UnGraph<Fragment, EdgeWeight>,
    indices: FxHashMap<String, NodeIndex>,
}

impl SimilarityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a node-only graph over `fragments`.
    pub fn with_fragments(fragments: &[Fragment]) -> Self {
        let mut graph = Self::new();
        for fragment in fragments {
            graph.add_fragment(fragment.clone());
        }
        graph
    }

    /// Insert a fragment node; returns the existing index when the fragment
    /// id is already present.
    pub fn add_fragment(&mut self, fragment: Fragment) -> NodeIndex {
        let id = fragment.id();
        if let Some(&index) = self.indices.get(&id) {
            return index;
        }
        let index = self.graph.add_node(fragment);
        self.indices.insert(id, index);
        index
    }

    pub fn node_index(&self, fragment_id: &str) -> Option<NodeIndex> {
        self.indices.get(fragment_id).copied()
    }

    pub fn fragment(&self, index: NodeIndex) -> &Fragment {
        &self.graph[index]
    }

    pub fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.graph.find_edge(a, b).is_some()
    }

    /// Add an undirected edge. The caller is responsible for dedup and for
    /// never linking a node to itself.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: EdgeWeight) {
        debug_assert_ne!(a, b);
        self.graph.add_edge(a, b, weight);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn neighbors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(index)
    }

    /// All edges as `(endpoint, endpoint, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &EdgeWeight)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), edge.weight()))
    }

    /// Copy of this graph keeping only the edges `keep` approves of.
    /// Node indices are preserved, so index-keyed data stays valid across
    /// the copy.
    pub fn filtered(
        &self,
        mut keep: impl FnMut(NodeIndex, NodeIndex, &EdgeWeight) -> bool,
    ) -> SimilarityGraph {
        let graph = self.graph.filter_map(
            |_, fragment| Some(fragment.clone()),
            |edge_index, weight| {
                let (a, b) = self.graph.edge_endpoints(edge_index).expect("edge exists");
                keep(a, b, weight).then_some(*weight)
            },
        );
        SimilarityGraph {
            graph,
            indices: self.indices.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domarch_core::types::Interval;

    fn fragment(seq: &str, start: u32, end: u32) -> Fragment {
        Fragment::new(seq, Interval::new(start, end))
    }

    fn weight() -> EdgeWeight {
        EdgeWeight {
            identity: 90.0,
            normalized_length: 50.0,
            significance: 1e-10,
        }
    }

    #[test]
    fn fragment_ids_resolve_to_nodes() {
        let graph = SimilarityGraph::with_fragments(&[
            fragment("s1", 1, 100),
            fragment("s2", 5, 80),
        ]);
        assert_eq!(graph.node_count(), 2);
        assert!(graph.node_index("s1:1-100").is_some());
        assert!(graph.node_index("s3:1-10").is_none());
    }

    #[test]
    fn duplicate_fragment_reuses_node() {
        let mut graph = SimilarityGraph::new();
        let a = graph.add_fragment(fragment("s1", 1, 100));
        let b = graph.add_fragment(fragment("s1", 1, 100));
        assert_eq!(a, b);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn filtered_preserves_node_indices() {
        let mut graph = SimilarityGraph::with_fragments(&[
            fragment("s1", 1, 100),
            fragment("s2", 5, 80),
            fragment("s3", 9, 60),
        ]);
        let a = graph.node_index("s1:1-100").unwrap();
        let b = graph.node_index("s2:5-80").unwrap();
        let c = graph.node_index("s3:9-60").unwrap();
        graph.add_edge(a, b, weight());
        graph.add_edge(b, c, weight());

        let pruned = graph.filtered(|x, y, _| (x, y) != (a, b) && (x, y) != (b, a));
        assert_eq!(pruned.node_count(), 3);
        assert_eq!(pruned.edge_count(), 1);
        assert!(pruned.has_edge(b, c));
        assert_eq!(pruned.fragment(a).id(), "s1:1-100");
    }
}
