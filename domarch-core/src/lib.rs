//! Core types, errors, and configuration for the domarch engine.
//!
//! `domarch` computes consensus domain architectures for protein sequences:
//! known domains are resolved by a staged greedy interval expander, novel
//! domains are discovered by clustering a fragment similarity graph, and the
//! two are merged into one ordered, non-overlapping architecture per
//! sequence. This crate holds the shared data model; the algorithms live in
//! `domarch-analysis`.

pub mod config;
pub mod errors;
pub mod trace;
pub mod types;

pub use config::DomarchConfig;
pub use errors::{PipelineError, PipelineResult};
pub use types::{
    AcceptedInterval, Architecture, Assignment, Fragment, Interval, OverlapConflict, Sequence,
    StageRef,
};
