//! Error types for Workout Stats

use thiserror::Error;

/// Errors that can occur while building or summarizing a workout
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("Unrecognized workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("Wrong parameter count for {code}: expected {expected}, got {actual}")]
    ParameterCount {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duration must be positive, got {0} h")]
    NonPositiveDuration(f64),

    #[error("Invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Computed {field} is not a finite number")]
    NonFiniteResult { field: &'static str },

    #[error("Failed to parse workout package: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WorkoutError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        WorkoutError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
