//! The fragment similarity graph: construction from pairwise alignment
//! records, Jaccard edge pruning, and connected-component clustering into
//! novel domains.

pub mod builder;
pub mod clustering;
pub mod jaccard;
pub mod types;

pub use builder::{build_graph, BuildOutcome};
pub use clustering::{cluster_components, NovelDomain, NovelIdCounter};
pub use jaccard::prune_edges;
pub use types::{AlignmentRecord, EdgeWeight, SimilarityGraph};
