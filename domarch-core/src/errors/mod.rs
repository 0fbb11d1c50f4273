//! Error handling for domarch.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod graph_error;
pub mod input_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use input_error::InputError;
pub use pipeline_error::{PipelineError, PipelineResult};
