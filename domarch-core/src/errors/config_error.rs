//! Configuration errors.

/// Errors raised while loading or validating a [`crate::DomarchConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
