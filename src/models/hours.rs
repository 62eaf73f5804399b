//! Hour ranges on the planning grid.
//!
//! The board plans a single working day in whole hours. Every slot and
//! every blocked period on a resource is a half-open interval of
//! hours-of-day.
//!
//! # Precedence
//! Blocked ranges override the availability flag's "yes". An hour is
//! plannable on a resource iff:
//! - the resource is flagged available, AND
//! - the hour does NOT fall within any of its blocked ranges.

use serde::{Deserialize, Serialize};

/// An hour interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HourRange {
    /// First hour of the range (inclusive).
    pub start: u32,
    /// Hour after the last one (exclusive).
    pub end: u32,
}

impl HourRange {
    /// Creates a new range.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Creates a range of `duration` hours starting at `start`.
    pub fn starting_at(start: u32, duration: u32) -> Self {
        Self::new(start, start.saturating_add(duration))
    }

    /// Length of this range in hours.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether an hour falls within this range.
    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour < self.end
    }

    /// Whether two ranges overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Number of hours shared with `other` (0 if disjoint).
    pub fn overlap_hours(&self, other: &Self) -> u32 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.saturating_sub(start)
    }
}

impl std::fmt::Display for HourRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}
