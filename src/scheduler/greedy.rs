//! Greedy AAC pipeline: select, enumerate, place, evaluate.
//!
//! # Algorithm
//!
//! 1. Validate the request.
//! 2. Select `batch_size` jobs from the pool, ordered by flexibility.
//! 3. Enumerate every feasible interval of each job on the normalized horizon.
//! 4. Place jobs greedily by summed excess over capacity.
//! 5. Report the peak excess of the final profile.
//!
//! Each run owns its height profile, so independent runs over the same
//! pool may execute on separate threads.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::objective::evaluate;
use super::placer::place_detailed;
use crate::error::AacResult;
use crate::intervals::enumerate_intervals;
use crate::models::{AacSchedule, CapacityProfile, Job};
use crate::selection::select;
use crate::validation::validate_input;

/// Window and batch parameters for one greedy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AacParams {
    /// Window start. Jobs must not release earlier.
    pub start_time: i64,
    /// Window end. Jobs must not be due later.
    pub end_time: i64,
    /// Longest admissible job.
    pub max_length: i64,
    /// Exact number of jobs to schedule.
    pub batch_size: usize,
}

impl AacParams {
    /// Creates parameters for `[start_time, end_time)`.
    ///
    /// Defaults: `max_length` = window length, `batch_size` = 1.
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
            max_length: end_time.saturating_sub(start_time),
            batch_size: 1,
        }
    }

    /// Sets the window bounds.
    pub fn with_window(mut self, start_time: i64, end_time: i64) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Sets the longest admissible job length.
    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Number of time steps in the window.
    ///
    /// Zero for an empty or inverted window.
    pub fn horizon(&self) -> usize {
        usize::try_from(self.end_time.saturating_sub(self.start_time)).unwrap_or(0)
    }
}

/// Input container for a greedy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AacRequest {
    /// Candidate jobs, scanned in order.
    pub pool: Vec<Job>,
    /// Capacity per step of the window.
    pub capacity: CapacityProfile,
    /// Window and batch parameters.
    pub params: AacParams,
}

impl AacRequest {
    /// Creates a request.
    pub fn new(pool: Vec<Job>, capacity: CapacityProfile, params: AacParams) -> Self {
        Self {
            pool,
            capacity,
            params,
        }
    }

    /// Replaces the parameters.
    pub fn with_params(mut self, params: AacParams) -> Self {
        self.params = params;
        self
    }

    /// Replaces the capacity profile.
    pub fn with_capacity(mut self, capacity: CapacityProfile) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Greedy Area-Above-Curve scheduler.
///
/// Selects a batch of jobs, then commits them one at a time, least
/// flexible first, each to the interval with the smallest summed excess
/// over capacity. It is a heuristic; the result is not guaranteed optimal.
///
/// # Example
///
/// ```
/// use u_aac::models::{CapacityProfile, Job};
/// use u_aac::scheduler::{AacParams, GreedyAacScheduler};
///
/// let pool = vec![
///     Job::new(0, 5, 2, 3.0),
///     Job::new(1, 4, 2, 2.0),
///     Job::new(0, 6, 3, 1.0),
/// ];
/// let capacity = CapacityProfile::constant(6, 2.0);
/// let params = AacParams::new(0, 6).with_max_length(3).with_batch_size(3);
///
/// let scheduler = GreedyAacScheduler::new(params);
/// let schedule = scheduler.schedule(&pool, &capacity).unwrap();
/// assert_eq!(schedule.job_order(), vec![2, 0, 1]);
/// assert_eq!(schedule.objective, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyAacScheduler {
    params: AacParams,
}

impl GreedyAacScheduler {
    /// Creates a scheduler for the given window and batch.
    pub fn new(params: AacParams) -> Self {
        Self { params }
    }

    /// The configured parameters.
    pub fn params(&self) -> &AacParams {
        &self.params
    }

    /// Runs the full pipeline and returns the schedule.
    pub fn schedule(&self, pool: &[Job], capacity: &CapacityProfile) -> AacResult<AacSchedule> {
        let params = &self.params;
        validate_input(pool, capacity, params)?;

        let horizon = params.horizon();
        let jobs = select(
            pool,
            params.start_time,
            params.end_time,
            params.max_length,
            params.batch_size,
        )?;
        let interval_sets = enumerate_intervals(&jobs, params.start_time);
        let (heights, placements) = place_detailed(&jobs, capacity, &interval_sets, horizon)?;
        let objective = evaluate(&heights, capacity)?;

        info!(
            batch_size = jobs.len(),
            horizon,
            objective,
            "greedy AAC schedule complete"
        );

        Ok(AacSchedule {
            jobs,
            placements,
            heights,
            objective,
        })
    }

    /// Runs the full pipeline and returns only the objective value.
    pub fn solve(&self, pool: &[Job], capacity: &CapacityProfile) -> AacResult<f64> {
        self.schedule(pool, capacity).map(|s| s.objective)
    }

    /// Schedules from a request, using the request's parameters.
    pub fn schedule_request(request: &AacRequest) -> AacResult<AacSchedule> {
        Self::new(request.params.clone()).schedule(&request.pool, &request.capacity)
    }
}

/// Greedy AAC objective for one batch.
///
/// Entry point for harnesses comparing strategies on a shared pool.
///
/// # Errors
/// - [`AacError::Precondition`](crate::error::AacError::Precondition) on malformed input.
/// - [`AacError::SelectionExhausted`](crate::error::AacError::SelectionExhausted)
///   if the pool cannot fill the batch.
/// - [`AacError::InfeasibleJob`](crate::error::AacError::InfeasibleJob)
///   if a selected job cannot be placed.
pub fn solve(
    pool: &[Job],
    capacity: &CapacityProfile,
    start_time: i64,
    end_time: i64,
    max_length: i64,
    batch_size: usize,
) -> AacResult<f64> {
    let params = AacParams::new(start_time, end_time)
        .with_max_length(max_length)
        .with_batch_size(batch_size);
    GreedyAacScheduler::new(params).solve(pool, capacity)
}
