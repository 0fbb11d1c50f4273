//! Tabular input readers for the engine's interchange records.
//!
//! Only the engine's own record formats are parsed here; sequence files and
//! everything upstream of them are collaborator concerns. Malformed lines
//! are skipped with a warning and surfaced as [`InputError`]s, never fatal.
//!
//! [`InputError`]: domarch_core::errors::InputError

pub mod alignment_reader;
pub mod assignment_reader;

pub use alignment_reader::read_alignments;
pub use assignment_reader::read_assignments;
