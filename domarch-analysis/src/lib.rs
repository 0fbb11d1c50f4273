//! Architecture resolution engine.
//!
//! Two halves, wired together by [`pipeline::Pipeline`]:
//!
//! - the known-domain half: assignment filtering, primary-source selection,
//!   and the staged greedy interval expander, run independently per sequence;
//! - the novel-domain half: a similarity graph over unassigned fragments,
//!   Jaccard edge pruning, and connected-component clustering, run once over
//!   the whole fragment set.
//!
//! The consensus merge combines both into the final per-sequence
//! architecture.

pub mod architecture;
pub mod consensus;
pub mod filter;
pub mod graph;
pub mod input;
pub mod pipeline;
pub mod unassigned;

pub use architecture::{resolve_architecture, ResolvedArchitecture};
pub use consensus::{ConsensusArchitecture, ConsensusInterval};
pub use filter::{AssignmentFilter, ExclusionLog, FilteredAssignments};
pub use graph::{AlignmentRecord, NovelDomain, NovelIdCounter, SimilarityGraph};
pub use pipeline::{KnownArchitectures, Pipeline, PipelineOutput};
