//! Error taxonomy for the AAC pipeline.
//!
//! Every error aborts the whole batch. The placement is sequential, so a
//! failure part-way through leaves no partial schedule worth returning.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by selection, placement, evaluation, or input validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AacError {
    /// The pool was scanned to the end before `batch_size` jobs were accepted.
    #[error("job pool exhausted: accepted {accepted} of {requested} jobs from a pool of {pool_size}")]
    SelectionExhausted {
        requested: usize,
        accepted: usize,
        pool_size: usize,
    },

    /// A selected job has no feasible placement interval.
    #[error("job {job_id} has no feasible interval (release={release}, deadline={deadline}, length={length})")]
    InfeasibleJob {
        job_id: usize,
        release: i64,
        deadline: i64,
        length: i64,
    },

    /// Malformed input.
    #[error("precondition violated: {}", join_messages(.0))]
    Precondition(Vec<ValidationError>),
}

impl AacError {
    /// Builds a precondition error from a single validation failure.
    pub(crate) fn precondition(error: ValidationError) -> Self {
        Self::Precondition(vec![error])
    }
}

impl From<Vec<ValidationError>> for AacError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Precondition(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type AacResult<T> = Result<T, AacError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_precondition_display_joins_messages() {
        let err = AacError::Precondition(vec![
            ValidationError::new(ValidationErrorKind::EmptyPool, "job pool is empty"),
            ValidationError::new(ValidationErrorKind::NonPositiveBatchSize, "batch_size is 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "precondition violated: job pool is empty; batch_size is 0"
        );
    }

    #[test]
    fn test_exhausted_display() {
        let err = AacError::SelectionExhausted {
            requested: 5,
            accepted: 3,
            pool_size: 10,
        };
        assert!(err.to_string().contains("accepted 3 of 5"));
    }
}
