//! Execution interval model.
//!
//! Half-open `[start, end)` on the normalized horizon, where t=0 is the
//! window start.

use serde::{Deserialize, Serialize};

/// A candidate (or chosen) execution slot for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// First occupied step (inclusive).
    pub start: i64,
    /// One past the last occupied step (exclusive).
    pub end: i64,
}

impl Interval {
    /// Creates an interval.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of occupied steps.
    #[inline]
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether a step falls inside this interval.
    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        t >= self.start && t < self.end
    }

    /// Whether the interval lies inside `[0, horizon)`.
    #[inline]
    pub fn within_horizon(&self, horizon: usize) -> bool {
        self.start >= 0 && self.start <= self.end && self.end <= horizon as i64
    }
}
