//! Job model.
//!
//! A job is a single rigid block of work: it runs for `length` consecutive
//! time steps somewhere inside `[release, deadline]` and draws `height`
//! units of the shared resource at every step it runs.
//!
//! # Time Representation
//! Times are integer steps on an absolute clock. The selector keeps the
//! absolute values; the interval enumerator rebases them onto the window
//! start so the horizon begins at t=0.

use serde::{Deserialize, Serialize};

use crate::selection::flexibility;

/// A candidate job from the input pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Earliest start time.
    pub release: i64,
    /// Latest completion time.
    pub deadline: i64,
    /// Number of consecutive time steps the job occupies.
    pub length: i64,
    /// Resource demand per time step while running.
    pub height: f64,
}

impl Job {
    /// Creates a job.
    pub fn new(release: i64, deadline: i64, length: i64, height: f64) -> Self {
        Self {
            release,
            deadline,
            length,
            height,
        }
    }

    /// Slack between the earliest and latest feasible start.
    ///
    /// Negative when the job cannot fit its own window.
    #[inline]
    pub fn slack(&self) -> i64 {
        self.deadline
            .saturating_sub(self.release)
            .saturating_sub(self.length)
    }

    /// Whether at least one start time fits inside `[release, deadline]`.
    #[inline]
    pub fn fits_window(&self) -> bool {
        self.slack() >= 0
    }
}

/// A job accepted into the batch.
///
/// `job_id` is the acceptance order during the pool scan and stays fixed
/// for the run, regardless of where the job ends up after sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedJob {
    /// Sequential id assigned in scan order.
    pub job_id: usize,
    /// `release - deadline - length`. More negative = more slack.
    pub flexibility: i64,
    /// The underlying pool entry.
    #[serde(flatten)]
    pub job: Job,
}

impl SelectedJob {
    /// Wraps a pool job, computing its flexibility.
    pub fn new(job_id: usize, job: Job) -> Self {
        Self {
            job_id,
            flexibility: flexibility(&job),
            job,
        }
    }

    #[inline]
    pub fn release(&self) -> i64 {
        self.job.release
    }

    #[inline]
    pub fn deadline(&self) -> i64 {
        self.job.deadline
    }

    #[inline]
    pub fn length(&self) -> i64 {
        self.job.length
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.job.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_fits_window() {
        assert!(Job::new(0, 5, 2, 1.0).fits_window());
        assert!(Job::new(2, 5, 3, 1.0).fits_window()); // exact fit
        assert!(!Job::new(3, 5, 3, 1.0).fits_window());
    }

    #[test]
    fn test_job_slack() {
        assert_eq!(Job::new(0, 5, 2, 1.0).slack(), 3);
        assert_eq!(Job::new(2, 5, 3, 1.0).slack(), 0);
        assert_eq!(Job::new(3, 5, 3, 1.0).slack(), -1);
        assert_eq!(Job::new(0, 5, i64::MIN, 1.0).slack(), i64::MAX);
        assert!(!Job::new(i64::MAX, i64::MIN, 0, 1.0).fits_window());
    }

    #[test]
    fn test_selected_job_flexibility() {
        let a = SelectedJob::new(0, Job::new(0, 5, 2, 3.0));
        let b = SelectedJob::new(1, Job::new(1, 4, 2, 2.0));
        let c = SelectedJob::new(2, Job::new(0, 6, 3, 1.0));
        assert_eq!(a.flexibility, -7);
        assert_eq!(b.flexibility, -5);
        assert_eq!(c.flexibility, -9);
    }

    #[test]
    fn test_selected_job_accessors() {
        let s = SelectedJob::new(4, Job::new(10, 20, 5, 2.5));
        assert_eq!(s.job_id, 4);
        assert_eq!(s.release(), 10);
        assert_eq!(s.deadline(), 20);
        assert_eq!(s.length(), 5);
        assert!((s.height() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_selected_job_serializes_flat() {
        let s = SelectedJob::new(1, Job::new(0, 4, 2, 1.0));
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["job_id"], 1);
        assert_eq!(value["flexibility"], -6);
        assert_eq!(value["release"], 0);
        assert_eq!(value["deadline"], 4);
    }
}
