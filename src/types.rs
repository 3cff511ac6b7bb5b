//! Core types shared by the workout models, dispatcher and formatter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkoutError;

/// Activity variant selected by a workout code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Resolve a sensor workout code (`RUN`, `WLK`, `SWM`)
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        match code {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            "SWM" => Ok(WorkoutKind::Swimming),
            other => Err(WorkoutError::UnknownWorkoutType(other.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label printed in the summary line
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of numeric parameters the sensor package carries for this kind
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::from_code(s)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed statistics for one finished workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Display label of the activity (e.g. "Running")
    pub activity_label: String,
    /// Workout duration (hours)
    pub duration_hours: f64,
    /// Covered distance (km)
    pub distance_km: f64,
    /// Mean speed (km/h)
    pub mean_speed_kmh: f64,
    /// Spent energy (kcal)
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_codes_resolve_to_kinds() {
        for kind in [
            WorkoutKind::Running,
            WorkoutKind::SportsWalking,
            WorkoutKind::Swimming,
        ] {
            assert_eq!(WorkoutKind::from_code(kind.code()).unwrap(), kind);
        }
        assert_eq!("WLK".parse::<WorkoutKind>().unwrap(), WorkoutKind::SportsWalking);
    }

    #[test]
    fn test_unknown_code() {
        let err = WorkoutKind::from_code("XYZ").unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownWorkoutType(ref c) if c == "XYZ"));
        assert_eq!(err.to_string(), "Unrecognized workout type: XYZ");
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!(WorkoutKind::from_code("run").is_err());
        assert!(WorkoutKind::from_code("").is_err());
    }

    #[test]
    fn test_record_json_field_names() {
        let record = WorkoutRecord {
            activity_label: "Swimming".to_string(),
            duration_hours: 1.0,
            distance_km: 0.5,
            mean_speed_kmh: 0.5,
            calories: 100.0,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["activity_label"], "Swimming");
        assert_eq!(json["mean_speed_kmh"], 0.5);
    }
}
