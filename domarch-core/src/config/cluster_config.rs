//! Jaccard filtering and novel-domain clustering configuration.

use serde::{Deserialize, Serialize};

/// Configuration for Jaccard edge pruning and connected-component
/// clustering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClusterConfig {
    /// Minimum Jaccard similarity for an edge to survive pruning.
    /// Default: 0.
    pub min_similarity: Option<f64>,
    /// Treat every fragment as a member of its own neighbourhood.
    /// Default: true.
    pub assume_loops: Option<bool>,
    /// Consider only pairs already linked in the graph. Default: true.
    /// The filter never creates edges, so `false` is overridden with a
    /// warning.
    pub only_linked: Option<bool>,
    /// Minimum member count for a component to become a novel domain.
    /// Default: 2.
    pub min_domain_size: Option<usize>,
    /// First ordinal handed out by the novel-domain counter. Default: 1.
    pub novel_id_base: Option<u32>,
}

impl ClusterConfig {
    /// Returns the effective minimum Jaccard similarity, defaulting to 0.
    pub fn effective_min_similarity(&self) -> f64 {
        self.min_similarity.unwrap_or(0.0)
    }

    /// Returns whether self-loops are assumed, defaulting to true.
    pub fn effective_assume_loops(&self) -> bool {
        self.assume_loops.unwrap_or(true)
    }

    /// Returns the only-linked flag, defaulting to true.
    pub fn effective_only_linked(&self) -> bool {
        self.only_linked.unwrap_or(true)
    }

    /// Returns the effective minimum novel-domain size, defaulting to 2.
    pub fn effective_min_domain_size(&self) -> usize {
        self.min_domain_size.unwrap_or(2)
    }

    /// Returns the first novel ordinal, defaulting to 1.
    pub fn effective_novel_id_base(&self) -> u32 {
        self.novel_id_base.unwrap_or(1)
    }
}
