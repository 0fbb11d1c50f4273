//! Input-data errors. All record-level variants are non-fatal: the offending
//! record or sequence is skipped and the error is collected in the pipeline
//! result.

/// Errors raised while reading or validating input records.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error(
        "Invalid interval {start}-{end} for sequence {sequence_id} (length {length})"
    )]
    InvalidInterval {
        sequence_id: String,
        start: u32,
        end: u32,
        length: u32,
    },

    #[error("Assignment references unknown sequence {sequence_id}")]
    UnknownSequence { sequence_id: String },
}
