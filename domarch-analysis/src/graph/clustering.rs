//! Connected-component clustering of the pruned similarity graph into
//! novel domains.

use domarch_core::types::collections::FxHashSet;
use domarch_core::types::Fragment;
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;
use tracing::debug;

use super::types::SimilarityGraph;

/// Explicit novel-ordinal state, threaded through clustering calls and
/// returned updated. Never a shared global: identifier assignment is
/// reproducible because callers own the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NovelIdCounter {
    next: u32,
}

impl Default for NovelIdCounter {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl NovelIdCounter {
    pub fn starting_at(base: u32) -> Self {
        Self { next: base }
    }

    /// The ordinal the next allocation will use.
    pub fn peek(&self) -> u32 {
        self.next
    }

    fn allocate(self) -> (String, Self) {
        (format!("NOVEL{:05}", self.next), Self { next: self.next + 1 })
    }
}

/// A cluster of mutually similar fragments promoted to a novel domain.
/// Members are sorted by fragment id.
#[derive(Debug, Clone, PartialEq)]
pub struct NovelDomain {
    pub id: String,
    pub members: Vec<Fragment>,
}

impl NovelDomain {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition the graph into connected components, discard components below
/// `min_size`, and name the survivors.
///
/// Identifier assignment is reproducible: components are ordered by their
/// lexicographically smallest member fragment id, then numbered
/// sequentially from `counter`. The updated counter is returned alongside
/// the domains.
pub fn cluster_components(
    graph: &SimilarityGraph,
    min_size: usize,
    counter: NovelIdCounter,
) -> (Vec<NovelDomain>, NovelIdCounter) {
    let mut components: Vec<Vec<Fragment>> = Vec::new();
    let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();

    for start in graph.node_indices() {
        if !visited.insert(start) {
            continue;
        }
        let mut members = vec![graph.fragment(start).clone()];
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for neighbor in graph.neighbors(node) {
                if visited.insert(neighbor) {
                    members.push(graph.fragment(neighbor).clone());
                    queue.push_back(neighbor);
                }
            }
        }
        if members.len() < min_size {
            debug!(
                size = members.len(),
                min_size, "component below minimum size, fragments stay unassigned"
            );
            continue;
        }
        members.sort_by_key(Fragment::id);
        components.push(members);
    }

    components.sort_by(|a, b| a[0].id().cmp(&b[0].id()));

    let mut counter = counter;
    let mut domains = Vec::with_capacity(components.len());
    for members in components {
        let (id, next) = counter.allocate();
        counter = next;
        domains.push(NovelDomain { id, members });
    }
    (domains, counter)
}
