//! Schedule (solution) model.
//!
//! The result of one greedy run: which jobs were selected, where each one
//! was placed, the final load profile, and the objective value.

use serde::{Deserialize, Serialize};

use super::{HeightProfile, Interval, SelectedJob};

/// A committed job placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Id assigned at selection time.
    pub job_id: usize,
    /// Chosen execution slot on the normalized horizon.
    pub interval: Interval,
    /// Height committed over the slot.
    pub height: f64,
    /// Summed excess of the slot at the moment it was chosen.
    pub score: f64,
}

impl Placement {
    /// Creates a placement.
    pub fn new(job_id: usize, interval: Interval, height: f64, score: f64) -> Self {
        Self {
            job_id,
            interval,
            height,
            score,
        }
    }
}

/// A complete greedy AAC schedule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AacSchedule {
    /// Selected jobs in processing order (ascending flexibility).
    pub jobs: Vec<SelectedJob>,
    /// One placement per job, in processing order.
    pub placements: Vec<Placement>,
    /// Final cumulative height per time step.
    pub heights: HeightProfile,
    /// Peak excess of load over capacity, floored at zero.
    pub objective: f64,
}

impl AacSchedule {
    /// Finds the placement of a job by its selection id.
    pub fn placement_for_job(&self, job_id: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.job_id == job_id)
    }

    /// Selection ids in processing order.
    pub fn job_order(&self) -> Vec<usize> {
        self.jobs.iter().map(|j| j.job_id).collect()
    }

    /// Number of placed jobs.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Latest end of any placement on the normalized horizon.
    pub fn makespan(&self) -> i64 {
        self.placements
            .iter()
            .map(|p| p.interval.end)
            .max()
            .unwrap_or(0)
    }
}
