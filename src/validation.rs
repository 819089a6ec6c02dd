//! Input validation for AAC requests.
//!
//! Checks a request before any scheduling work starts. Detects:
//! - Empty job pools
//! - Empty or inverted time windows
//! - Zero batch sizes, or batches larger than the pool
//! - Non-positive maximum job lengths
//! - Capacity profiles whose length differs from the horizon
//! - Negative or non-finite job heights
//! - Negative job lengths
//!
//! All problems are collected so a caller sees every defect at once.

use crate::models::{CapacityProfile, HeightProfile, Interval, Job};
use crate::scheduler::{AacParams, AacRequest};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The job pool has no entries.
    EmptyPool,
    /// `start_time >= end_time`.
    InvalidWindow,
    /// `batch_size` is zero.
    NonPositiveBatchSize,
    /// `batch_size` exceeds the pool size.
    BatchExceedsPool,
    /// `max_length` is zero or negative.
    NonPositiveMaxLength,
    /// A profile's length differs from the horizon or from its counterpart.
    ProfileLengthMismatch,
    /// A job height is negative, NaN, or infinite.
    InvalidHeight,
    /// A job length is negative.
    InvalidLength,
    /// A candidate interval falls outside `[0, horizon)`.
    IntervalOutOfHorizon,
    /// The number of interval sets differs from the number of jobs.
    IntervalSetCountMismatch,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for an AAC run.
///
/// Checks:
/// 1. The pool is non-empty
/// 2. `start_time < end_time`
/// 3. `0 < batch_size <= pool.len()`
/// 4. `max_length > 0`
/// 5. The capacity profile covers exactly `end_time - start_time` steps
/// 6. Every job height is finite and non-negative
/// 7. Every job length is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    pool: &[Job],
    capacity: &CapacityProfile,
    params: &AacParams,
) -> ValidationResult {
    let mut errors = Vec::new();

    if pool.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPool,
            "job pool is empty",
        ));
    }

    match params.end_time.checked_sub(params.start_time) {
        Some(horizon) if horizon > 0 => {
            if capacity.len() as i64 != horizon {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ProfileLengthMismatch,
                    format!(
                        "capacity profile has {} steps, horizon has {horizon}",
                        capacity.len()
                    ),
                ));
            }
        }
        Some(_) => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            format!(
                "start_time {} must be before end_time {}",
                params.start_time, params.end_time
            ),
        )),
        None => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            format!(
                "window [{}, {}) is too wide to represent",
                params.start_time, params.end_time
            ),
        )),
    }

    if params.batch_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBatchSize,
            "batch_size must be positive",
        ));
    } else if params.batch_size > pool.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::BatchExceedsPool,
            format!(
                "batch_size {} exceeds pool size {}",
                params.batch_size,
                pool.len()
            ),
        ));
    }

    if params.max_length <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveMaxLength,
            format!("max_length must be positive, got {}", params.max_length),
        ));
    }

    for (idx, job) in pool.iter().enumerate() {
        if !job.height.is_finite() || job.height < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHeight,
                format!("pool entry {idx} has invalid height {}", job.height),
            ));
        }
        if job.length < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidLength,
                format!("pool entry {idx} has negative length {}", job.length),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a bundled request.
pub fn validate_request(request: &AacRequest) -> ValidationResult {
    validate_input(&request.pool, &request.capacity, &request.params)
}

/// Checks that the load and capacity profiles cover the same horizon.
pub fn check_profiles(
    heights: &HeightProfile,
    capacity: &CapacityProfile,
) -> Result<(), ValidationError> {
    if heights.len() == capacity.len() {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::ProfileLengthMismatch,
            format!(
                "height profile has {} steps, capacity profile has {}",
                heights.len(),
                capacity.len()
            ),
        ))
    }
}

/// Checks that there is one interval set per job and that every candidate
/// interval lies inside `[0, horizon)`.
pub fn check_intervals(
    interval_sets: &[Vec<Interval>],
    job_count: usize,
    horizon: usize,
) -> Result<(), ValidationError> {
    if interval_sets.len() != job_count {
        return Err(ValidationError::new(
            ValidationErrorKind::IntervalSetCountMismatch,
            format!(
                "{} interval sets supplied for {job_count} jobs",
                interval_sets.len()
            ),
        ));
    }
    for (idx, set) in interval_sets.iter().enumerate() {
        if let Some(bad) = set.iter().find(|i| !i.within_horizon(horizon)) {
            return Err(ValidationError::new(
                ValidationErrorKind::IntervalOutOfHorizon,
                format!(
                    "interval [{}, {}) of job at position {idx} lies outside horizon [0, {horizon})",
                    bad.start, bad.end
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> AacParams {
        AacParams::new(0, 6).with_max_length(3).with_batch_size(3)
    }

    fn sample_request() -> AacRequest {
        AacRequest::new(
            vec![
                Job::new(0, 5, 2, 3.0),
                Job::new(1, 4, 2, 2.0),
                Job::new(0, 6, 3, 1.0),
            ],
            CapacityProfile::constant(6, 2.0),
            sample_params(),
        )
    }

    fn kinds(request: &AacRequest) -> Vec<ValidationErrorKind> {
        validate_request(request)
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&sample_request()).is_ok());
    }

    #[test]
    fn test_empty_pool() {
        let mut req = sample_request();
        req.pool.clear();
        let kinds = kinds(&req);
        assert!(kinds.contains(&ValidationErrorKind::EmptyPool));
        assert!(kinds.contains(&ValidationErrorKind::BatchExceedsPool));
    }

    #[test]
    fn test_inverted_window() {
        let req = sample_request().with_params(sample_params().with_window(6, 6));
        assert_eq!(kinds(&req), vec![ValidationErrorKind::InvalidWindow]);
    }

    #[test]
    fn test_zero_batch_size() {
        let req = sample_request().with_params(sample_params().with_batch_size(0));
        assert_eq!(kinds(&req), vec![ValidationErrorKind::NonPositiveBatchSize]);
    }

    #[test]
    fn test_batch_exceeds_pool() {
        let req = sample_request().with_params(sample_params().with_batch_size(4));
        assert_eq!(kinds(&req), vec![ValidationErrorKind::BatchExceedsPool]);
    }

    #[test]
    fn test_non_positive_max_length() {
        let req = sample_request().with_params(sample_params().with_max_length(0));
        assert_eq!(kinds(&req), vec![ValidationErrorKind::NonPositiveMaxLength]);
    }

    #[test]
    fn test_profile_length_mismatch() {
        let req = sample_request().with_capacity(CapacityProfile::constant(5, 2.0));
        assert_eq!(kinds(&req), vec![ValidationErrorKind::ProfileLengthMismatch]);
    }

    #[test]
    fn test_invalid_height() {
        let mut req = sample_request();
        req.pool.push(Job::new(0, 3, 1, -1.0));
        req.pool.push(Job::new(0, 3, 1, f64::NAN));
        let kinds = kinds(&req);
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidHeight,
                ValidationErrorKind::InvalidHeight
            ]
        );
    }

    #[test]
    fn test_invalid_length() {
        let mut req = sample_request();
        req.pool.push(Job::new(0, 6, -2, 1.0));
        req.pool.push(Job::new(0, 6, i64::MIN, 1.0));
        assert_eq!(
            kinds(&req),
            vec![
                ValidationErrorKind::InvalidLength,
                ValidationErrorKind::InvalidLength
            ]
        );
    }

    #[test]
    fn test_overflowing_window() {
        let req = sample_request().with_params(sample_params().with_window(i64::MIN, 1));
        assert_eq!(kinds(&req), vec![ValidationErrorKind::InvalidWindow]);
    }

    #[test]
    fn test_multiple_errors() {
        let req = sample_request().with_params(
            AacParams::new(10, 0)
                .with_batch_size(0)
                .with_max_length(-1),
        );
        let errors = validate_request(&req).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_check_profiles() {
        let heights = HeightProfile::zeros(4);
        assert!(check_profiles(&heights, &CapacityProfile::constant(4, 1.0)).is_ok());
        let err = check_profiles(&heights, &CapacityProfile::constant(3, 1.0)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::ProfileLengthMismatch);
    }

    #[test]
    fn test_check_intervals() {
        let sets = vec![vec![Interval::new(0, 2)], vec![Interval::new(3, 6)]];
        assert!(check_intervals(&sets, 2, 6).is_ok());
        let err = check_intervals(&sets, 2, 5).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::IntervalOutOfHorizon);
        assert!(err.message.contains("position 1"));
        let err = check_intervals(&sets, 3, 6).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::IntervalSetCountMismatch);
    }
}
