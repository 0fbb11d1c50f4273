//! Per-sequence domain architectures and the interval-overlap rules that
//! govern which assignments may join one.

use serde::{Deserialize, Serialize};

use super::interval::{self, Interval};

/// Stage provenance of an accepted interval. Stage 1 is the primary
/// (seed) selection; expansion stages count upward from 2. Novel domains
/// carry a dedicated sentinel instead of a stage number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageRef {
    Known(u32),
    Novel,
}

impl StageRef {
    pub const PRIMARY: StageRef = StageRef::Known(1);
}

impl std::fmt::Display for StageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageRef::Known(n) => write!(f, "{n}"),
            StageRef::Novel => write!(f, "novel"),
        }
    }
}

/// An interval accepted into an architecture, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedInterval {
    pub interval: Interval,
    pub source: String,
    pub domain: String,
    pub stage: StageRef,
    pub reference_id: Option<String>,
}

/// Why a candidate interval cannot join an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapConflict {
    /// Exact bounds of an already-accepted interval.
    Duplicate,
    /// Positive overlap (including full nesting) with an interval from a
    /// different source.
    ForeignOverlap,
    /// Same-source partial overlap beyond the configured tolerance.
    ExcessiveOverlap { overlap: u32 },
}

/// The evolving set of accepted intervals for one sequence.
///
/// Invariants, enforced by [`Architecture::try_accept`]:
/// intervals from different sources never overlap; intervals from the same
/// source may nest fully, or overlap partially by at most the tolerance
/// passed to each insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    pub sequence_id: String,
    pub length: u32,
    intervals: Vec<AcceptedInterval>,
}

impl Architecture {
    pub fn new(sequence_id: impl Into<String>, length: u32) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            length,
            intervals: Vec::new(),
        }
    }

    /// Accepted intervals in acceptance order.
    pub fn intervals(&self) -> &[AcceptedInterval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// First conflict between a candidate and the accepted intervals, or
    /// `None` when the candidate may be accepted.
    pub fn check(
        &self,
        candidate: &Interval,
        source: &str,
        max_overlap: u32,
    ) -> Option<OverlapConflict> {
        self.intervals
            .iter()
            .find_map(|existing| check_pair(candidate, source, existing, max_overlap))
    }

    /// Accept `candidate` if it conflicts with nothing accepted so far.
    pub fn try_accept(
        &mut self,
        candidate: AcceptedInterval,
        max_overlap: u32,
    ) -> Result<(), OverlapConflict> {
        if let Some(conflict) =
            self.check(&candidate.interval, &candidate.source, max_overlap)
        {
            return Err(conflict);
        }
        self.intervals.push(candidate);
        Ok(())
    }

    /// Accept `candidate` without an overlap check. Only for intervals known
    /// to be disjoint from the architecture, such as novel domains cut from
    /// previously-unassigned regions.
    pub fn accept_unchecked(&mut self, candidate: AcceptedInterval) {
        self.intervals.push(candidate);
    }

    /// Number of positions covered by at least one accepted interval.
    pub fn covered_len(&self) -> u32 {
        interval::union_len(self.intervals.iter().map(|a| a.interval).collect())
    }

    /// Fraction of the sequence covered by accepted intervals.
    pub fn coverage(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        f64::from(self.covered_len()) / f64::from(self.length)
    }

    /// Accepted intervals ordered by start, end, then domain id.
    pub fn sorted_intervals(&self) -> Vec<&AcceptedInterval> {
        let mut sorted: Vec<&AcceptedInterval> = self.intervals.iter().collect();
        sorted.sort_by(|a, b| {
            a.interval
                .cmp(&b.interval)
                .then_with(|| a.domain.cmp(&b.domain))
        });
        sorted
    }

    /// Regions of `[1, length]` not covered by any accepted interval.
    pub fn unassigned_regions(&self) -> Vec<Interval> {
        interval::complement(
            self.intervals.iter().map(|a| a.interval).collect(),
            self.length,
        )
    }
}

/// Classify `candidate` against one accepted interval. `None` means the pair
/// is compatible: disjoint, a same-source nesting, or a same-source partial
/// overlap within `max_overlap`.
fn check_pair(
    candidate: &Interval,
    source: &str,
    existing: &AcceptedInterval,
    max_overlap: u32,
) -> Option<OverlapConflict> {
    let same_source = existing.source == source;

    if existing.interval == *candidate {
        return Some(OverlapConflict::Duplicate);
    }

    if existing.interval.contains(candidate) || candidate.contains(&existing.interval) {
        if same_source {
            return None;
        }
        return Some(OverlapConflict::ForeignOverlap);
    }

    let overlap = candidate.overlap_len(&existing.interval);
    if overlap == 0 {
        return None;
    }
    if !same_source {
        return Some(OverlapConflict::ForeignOverlap);
    }
    if overlap > max_overlap {
        return Some(OverlapConflict::ExcessiveOverlap { overlap });
    }
    None
}
