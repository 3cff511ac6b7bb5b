//! Workout dispatch
//!
//! Maps a sensor workout code plus its ordered numeric parameters to the
//! matching workout model.

use crate::error::WorkoutError;
use crate::types::WorkoutKind;
use crate::workouts::{Running, SportsWalking, Swimming, Workout};

/// Build the workout selected by `code` from the raw sensor parameters.
///
/// Parameter order follows the model constructors:
/// * `RUN` - action, duration, weight
/// * `WLK` - action, duration, weight, height
/// * `SWM` - action, duration, weight, pool length, pool crossings
///
/// # Example
/// ```
/// use workout_stats::dispatch::build;
/// use workout_stats::Workout;
///
/// let run = build("RUN", &[15000.0, 1.0, 75.0]).unwrap();
/// assert_eq!(run.summary().unwrap().activity_label, "Running");
/// ```
pub fn build(code: &str, params: &[f64]) -> Result<Box<dyn Workout>, WorkoutError> {
    let kind = WorkoutKind::from_code(code)?;
    build_kind(kind, params)
}

/// Build a workout for an already resolved kind
pub fn build_kind(kind: WorkoutKind, params: &[f64]) -> Result<Box<dyn Workout>, WorkoutError> {
    if params.len() != kind.arity() {
        return Err(WorkoutError::ParameterCount {
            code: kind.code().to_string(),
            expected: kind.arity(),
            actual: params.len(),
        });
    }

    tracing::debug!(code = kind.code(), ?params, "building workout");

    let action = whole_count("action", params[0])?;
    let (duration, weight) = (params[1], params[2]);

    let workout: Box<dyn Workout> = match kind {
        WorkoutKind::Running => Box::new(Running::new(action, duration, weight)?),
        WorkoutKind::SportsWalking => {
            Box::new(SportsWalking::new(action, duration, weight, params[3])?)
        }
        WorkoutKind::Swimming => {
            let crossings = whole_count("pool_crossings", params[4])?;
            let crossings = u32::try_from(crossings).map_err(|_| {
                WorkoutError::invalid("pool_crossings", params[4], "too large")
            })?;
            Box::new(Swimming::new(action, duration, weight, params[3], crossings)?)
        }
    };

    Ok(workout)
}

/// Convert a sensor count (steps, strokes, crossings) to an integer
fn whole_count(name: &'static str, value: f64) -> Result<u64, WorkoutError> {
    if !value.is_finite() || value < 0.0 {
        return Err(WorkoutError::invalid(name, value, "must be a non-negative number"));
    }
    if value.fract() != 0.0 {
        return Err(WorkoutError::invalid(name, value, "must be a whole number"));
    }
    // u64::MAX rounds up to 2^64 as f64
    if value >= u64::MAX as f64 {
        return Err(WorkoutError::invalid(name, value, "too large"));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_each_kind() {
        let run = build("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let walk = build("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let swim = build("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        assert_eq!(run.kind(), WorkoutKind::Running);
        assert_eq!(walk.kind(), WorkoutKind::SportsWalking);
        assert_eq!(swim.kind(), WorkoutKind::Swimming);
        assert!((swim.mean_speed() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_code_is_surfaced() {
        for code in ["XYZ", "run", "SWIM", ""] {
            let err = build(code, &[1.0, 1.0, 1.0]).err().unwrap();
            assert!(
                matches!(err, WorkoutError::UnknownWorkoutType(ref c) if c == code),
                "unexpected error for {code:?}: {err}"
            );
        }
    }

    #[test]
    fn test_parameter_count_must_match() {
        let err = build("RUN", &[15000.0, 1.0]).err().unwrap();
        assert!(matches!(
            err,
            WorkoutError::ParameterCount {
                expected: 3,
                actual: 2,
                ..
            }
        ));

        let err = build("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Wrong parameter count for WLK: expected 4, got 5"
        );
    }

    #[test]
    fn test_counts_must_be_whole() {
        let err = build("RUN", &[100.5, 1.0, 75.0]).err().unwrap();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter { name: "action", .. }
        ));

        let err = build("SWM", &[720.0, 1.0, 80.0, 25.0, 2.5]).err().unwrap();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter {
                name: "pool_crossings",
                ..
            }
        ));

        assert!(build("RUN", &[-1.0, 1.0, 75.0]).is_err());
    }

    #[test]
    fn test_zero_duration_is_a_named_error() {
        let err = build("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]).err().unwrap();
        assert!(matches!(err, WorkoutError::NonPositiveDuration(_)));
    }

    #[test]
    fn test_count_at_u64_limit_is_too_large() {
        let err = build("RUN", &[18446744073709551616.0, 1.0, 75.0])
            .err()
            .unwrap();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter {
                name: "action",
                reason: "too large",
                ..
            }
        ));

        let run = build("RUN", &[9007199254740992.0, 1.0, 75.0]).unwrap();
        assert_eq!(run.base().action, 9007199254740992);
    }
}
