//! Domain assignment records.

use serde::{Deserialize, Serialize};

use super::interval::Interval;

/// A claim that an evidence source detected a domain within an interval of a
/// sequence. Immutable once it passes the assignment filter. Sequence
/// lengths live in the externally supplied sequence table, not on the
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub sequence_id: String,
    /// Evidence source that produced this assignment (e.g. a profile-HMM
    /// scanner name).
    pub source: String,
    /// Source-specific domain identifier.
    pub domain: String,
    pub interval: Interval,
    /// Significance (E-value) when the source reports one.
    pub significance: Option<f64>,
    /// Mapped reference-database identifier, when known.
    pub reference_id: Option<String>,
}

impl Assignment {
    /// Length of the assigned region.
    pub fn assigned_len(&self) -> u32 {
        self.interval.len()
    }

    /// Short form used in log messages: `domain(start-end)`.
    pub fn short_repr(&self) -> String {
        format!("{}({})", self.domain, self.interval)
    }
}
