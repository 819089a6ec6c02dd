//! Batch selection and flexibility ordering.
//!
//! # Algorithm
//!
//! 1. Scan the pool in its given order.
//! 2. Accept a job if it lies inside `[start_time, end_time]` and is no longer
//!    than `max_length`. Accepted jobs get ids 0, 1, 2, ... in scan order.
//! 3. Stop as soon as `batch_size` jobs are accepted.
//! 4. Stable-sort the batch by ascending flexibility, so the most
//!    time-constrained jobs come first and equal keys keep id order.
//!
//! The scan is never randomized. Competing strategies handed the same pool
//! and parameters therefore see the same batch.
//!
//! # Complexity
//! O(p + b log b) where p=pool entries scanned, b=batch size.

use tracing::{debug, warn};

use crate::error::{AacError, AacResult};
use crate::models::{Job, SelectedJob};

/// Flexibility key of a job: `release - deadline - length`.
///
/// More negative means more slack. Used only as a sort key.
#[inline]
pub fn flexibility(job: &Job) -> i64 {
    job.release
        .saturating_sub(job.deadline)
        .saturating_sub(job.length)
}

/// Whether a pool entry is admissible for the window.
#[inline]
pub fn accepts(job: &Job, start_time: i64, end_time: i64, max_length: i64) -> bool {
    job.release >= start_time && job.deadline <= end_time && job.length <= max_length
}

/// Selects `batch_size` jobs from `pool` and orders them by flexibility.
///
/// # Errors
/// [`AacError::SelectionExhausted`] if the pool runs out first.
pub fn select(
    pool: &[Job],
    start_time: i64,
    end_time: i64,
    max_length: i64,
    batch_size: usize,
) -> AacResult<Vec<SelectedJob>> {
    let mut selected = Vec::with_capacity(batch_size.min(pool.len()));

    for job in pool {
        if selected.len() == batch_size {
            break;
        }
        if accepts(job, start_time, end_time, max_length) {
            selected.push(SelectedJob::new(selected.len(), job.clone()));
        }
    }

    if selected.len() < batch_size {
        warn!(
            requested = batch_size,
            accepted = selected.len(),
            pool_size = pool.len(),
            "job pool exhausted before batch was filled"
        );
        return Err(AacError::SelectionExhausted {
            requested: batch_size,
            accepted: selected.len(),
            pool_size: pool.len(),
        });
    }

    selected.sort_by_key(|j| j.flexibility);

    debug!(
        batch_size,
        start_time,
        end_time,
        max_length,
        "batch selected"
    );

    Ok(selected)
}
