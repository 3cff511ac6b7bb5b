//! Sensor workout package

use serde::{Deserialize, Serialize};

use crate::dispatch;
use crate::error::WorkoutError;
use crate::types::WorkoutKind;
use crate::workouts::Workout;

/// One sensor package: a workout code plus its ordered parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Workout code (`RUN`, `WLK`, `SWM`)
    #[serde(alias = "code")]
    pub workout_type: String,
    /// Parameters in constructor order
    #[serde(alias = "params")]
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Resolve the workout code without building the model
    pub fn kind(&self) -> Result<WorkoutKind, WorkoutError> {
        WorkoutKind::from_code(&self.workout_type)
    }

    /// Dispatch the package to its workout model
    pub fn build(&self) -> Result<Box<dyn Workout>, WorkoutError> {
        dispatch::build(&self.workout_type, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_package() {
        let pkg: WorkoutPackage =
            serde_json::from_str(r#"{"workout_type": "RUN", "data": [15000, 1, 75]}"#).unwrap();
        assert_eq!(pkg, WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(pkg.kind().unwrap(), WorkoutKind::Running);
    }

    #[test]
    fn test_deserialize_aliases() {
        let pkg: WorkoutPackage =
            serde_json::from_str(r#"{"code": "WLK", "params": [9000, 1, 75, 180]}"#).unwrap();
        assert_eq!(pkg.workout_type, "WLK");
        assert_eq!(pkg.data.len(), 4);
    }

    #[test]
    fn test_build_unknown_package() {
        let pkg = WorkoutPackage::new("XYZ", vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            pkg.build(),
            Err(WorkoutError::UnknownWorkoutType(_))
        ));
    }
}
