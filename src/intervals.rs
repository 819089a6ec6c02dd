//! Feasible execution interval enumeration.
//!
//! For each selected job, rebase `release` and `deadline` onto the window
//! start, then emit every integer start `t` from `release` while
//! `t + length <= deadline`, giving the interval `[t, t + length)`.
//!
//! Output is indexed by position in the selected-job slice, and each set
//! is ascending by start time. A job whose window is too short for its
//! length yields an empty set. Placement rejects that case; this module
//! does not.
//!
//! # Complexity
//! O(n * w) where n=jobs, w=window length.

use crate::models::{Interval, SelectedJob};

/// Candidate intervals per job, indexed like the selected-job slice.
pub type IntervalSets = Vec<Vec<Interval>>;

/// Enumerates the feasible intervals of a single job, normalized so that
/// `window_start` becomes t=0.
///
/// Returns an empty set when the job cannot fit, including when
/// normalization would overflow `i64`.
pub fn job_intervals(job: &SelectedJob, window_start: i64) -> Vec<Interval> {
    let length = job.length();
    let bounds = job.release().checked_sub(window_start).and_then(|release| {
        let deadline = job.deadline().checked_sub(window_start)?;
        Some((release, deadline.checked_sub(length)?))
    });

    let Some((release, last_start)) = bounds else {
        return Vec::new();
    };
    if length < 0 || last_start < release {
        return Vec::new();
    }

    (release..=last_start)
        .map(|t| Interval::new(t, t + length))
        .collect()
}

/// Enumerates feasible intervals for every selected job.
pub fn enumerate_intervals(jobs: &[SelectedJob], window_start: i64) -> IntervalSets {
    jobs.iter()
        .map(|job| job_intervals(job, window_start))
        .collect()
}
