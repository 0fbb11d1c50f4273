//! 1-based, inclusive sequence intervals and interval-union arithmetic.

use serde::{Deserialize, Serialize};

/// A 1-based, inclusive interval on a sequence. `start <= end` for every
/// interval that passed assignment filtering; raw input records may violate
/// this and are rejected there.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of positions covered, inclusive on both ends.
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// True when `start >= 1` and `start <= end`.
    pub fn is_well_formed(&self) -> bool {
        self.start >= 1 && self.start <= self.end
    }

    /// Number of positions shared with `other` (0 when disjoint).
    pub fn overlap_len(&self, other: &Interval) -> u32 {
        let lo = self.start.max(other.start);
        let hi = self.end.min(other.end);
        if hi >= lo {
            hi - lo + 1
        } else {
            0
        }
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True when `other` lies entirely within this interval.
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Merge a set of intervals into a sorted, disjoint union.
/// Adjacent intervals (end + 1 == next start) are coalesced.
pub fn merge_union(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }
    intervals.sort();
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        match merged.last_mut() {
            Some(last) if iv.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(iv.end);
            }
            _ => merged.push(iv),
        }
    }
    merged
}

/// Total number of positions covered by the union of `intervals`.
pub fn union_len(intervals: Vec<Interval>) -> u32 {
    merge_union(intervals).iter().map(Interval::len).sum()
}

/// Complement of the union of `intervals` within `[1, length]`.
pub fn complement(intervals: Vec<Interval>, length: u32) -> Vec<Interval> {
    if length == 0 {
        return Vec::new();
    }
    let mut gaps = Vec::new();
    let mut cursor = 1u32;
    for iv in merge_union(intervals) {
        if iv.start > cursor {
            gaps.push(Interval::new(cursor, iv.start - 1));
        }
        cursor = cursor.max(iv.end.saturating_add(1));
        if cursor > length {
            break;
        }
    }
    if cursor <= length {
        gaps.push(Interval::new(cursor, length));
    }
    gaps
}
