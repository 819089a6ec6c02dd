//! Greedy area-above-curve placement.
//!
//! # Algorithm
//!
//! 1. Start from an all-zero height profile over the horizon.
//! 2. Take jobs in the order given (ascending flexibility from selection).
//! 3. For each candidate interval `[s, e)` of the job, score
//!    `sum_{t in [s, e)} (height[t] + job.height - capacity[t])`.
//! 4. Keep the strictly smallest score; the earliest start wins ties.
//! 5. Add `job.height` to every step of the chosen interval.
//!
//! The score is the summed excess over the whole interval, not its peak:
//! slack on some steps is allowed to offset overload on others. A
//! committed placement is never revisited.
//!
//! # Complexity
//! O(n * k * l) where n=jobs, k=intervals per job, l=job length.

use tracing::{debug, warn};

use crate::error::{AacError, AacResult};
use crate::models::{CapacityProfile, HeightProfile, Interval, Placement, SelectedJob};
use crate::validation::{self, ValidationError, ValidationErrorKind};

/// Places every job greedily and returns the final height profile.
///
/// # Errors
/// - [`AacError::InfeasibleJob`] if a job has no candidate interval.
/// - [`AacError::Precondition`] if the capacity profile does not span
///   `horizon` steps, the interval sets do not match the jobs, or an
///   interval leaves the horizon.
pub fn place(
    jobs: &[SelectedJob],
    capacity: &CapacityProfile,
    interval_sets: &[Vec<Interval>],
    horizon: usize,
) -> AacResult<HeightProfile> {
    place_detailed(jobs, capacity, interval_sets, horizon).map(|(heights, _)| heights)
}

/// Like [`place`], but also returns the committed placement of each job,
/// in processing order.
pub fn place_detailed(
    jobs: &[SelectedJob],
    capacity: &CapacityProfile,
    interval_sets: &[Vec<Interval>],
    horizon: usize,
) -> AacResult<(HeightProfile, Vec<Placement>)> {
    if capacity.len() != horizon {
        return Err(AacError::precondition(ValidationError::new(
            ValidationErrorKind::ProfileLengthMismatch,
            format!(
                "capacity profile has {} steps, horizon has {horizon}",
                capacity.len()
            ),
        )));
    }
    validation::check_intervals(interval_sets, jobs.len(), horizon)
        .map_err(AacError::precondition)?;

    let mut heights = HeightProfile::zeros(horizon);
    let mut placements = Vec::with_capacity(jobs.len());

    for (job, candidates) in jobs.iter().zip(interval_sets) {
        let (interval, score) = best_interval(&heights, job, candidates, capacity)?;
        heights.commit(interval, job.height());

        debug!(
            job_id = job.job_id,
            start = interval.start,
            end = interval.end,
            score,
            "job placed"
        );
        placements.push(Placement::new(job.job_id, interval, job.height(), score));
    }

    Ok((heights, placements))
}

/// Picks the candidate with the smallest summed excess. First wins ties.
fn best_interval(
    heights: &HeightProfile,
    job: &SelectedJob,
    candidates: &[Interval],
    capacity: &CapacityProfile,
) -> AacResult<(Interval, f64)> {
    let mut best: Option<(Interval, f64)> = None;

    for &interval in candidates {
        let score = heights.excess_sum(interval, job.height(), capacity);
        let better = match best {
            Some((_, best_score)) => score < best_score,
            None => true,
        };
        if better {
            best = Some((interval, score));
        }
    }

    best.ok_or_else(|| {
        warn!(
            job_id = job.job_id,
            release = job.release(),
            deadline = job.deadline(),
            length = job.length(),
            "job has no feasible interval"
        );
        AacError::InfeasibleJob {
            job_id: job.job_id,
            release: job.release(),
            deadline: job.deadline(),
            length: job.length(),
        }
    })
}
