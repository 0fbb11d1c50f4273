//! Similarity-graph errors.

/// Errors raised while building the fragment similarity graph. Non-fatal:
/// the offending alignment record is skipped.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Alignment record references unknown fragment {fragment_id}")]
    UnknownFragment { fragment_id: String },
}
