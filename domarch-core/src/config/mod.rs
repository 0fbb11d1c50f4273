//! Configuration system for domarch.
//! TOML-based; every knob is optional and falls back to a compiled default
//! via an `effective_*` accessor.

pub mod cluster_config;
pub mod domarch_config;
pub mod filter_config;
pub mod fragment_config;
pub mod graph_config;
pub mod stage_config;

pub use cluster_config::ClusterConfig;
pub use domarch_config::DomarchConfig;
pub use filter_config::FilterConfig;
pub use fragment_config::FragmentConfig;
pub use graph_config::{GraphConfig, NormalizationMode};
pub use stage_config::{StageConfig, StageRule, StageSourceSet};
