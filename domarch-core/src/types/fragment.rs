//! Unassigned sequence fragments, candidates for novel-domain discovery.

use serde::{Deserialize, Serialize};

use super::interval::Interval;

/// A sub-region of a sequence not covered by any accepted interval.
/// Derived once from the known architecture, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fragment {
    pub sequence_id: String,
    pub interval: Interval,
}

impl Fragment {
    pub fn new(sequence_id: impl Into<String>, interval: Interval) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            interval,
        }
    }

    /// Canonical fragment identifier: `seqid:start-end`. This is the name
    /// the external alignment step sees, so alignment records key on it.
    pub fn id(&self) -> String {
        format!("{}:{}", self.sequence_id, self.interval)
    }

    pub fn len(&self) -> u32 {
        self.interval.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interval.is_empty()
    }
}
