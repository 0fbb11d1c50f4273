//! Sequence records.

use serde::{Deserialize, Serialize};

/// A protein sequence known to the engine: identifier plus residue count.
/// Supplied externally (sequence parsing is a collaborator concern) and
/// read-only for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub id: String,
    pub length: u32,
}

impl Sequence {
    pub fn new(id: impl Into<String>, length: u32) -> Self {
        Self {
            id: id.into(),
            length,
        }
    }
}
