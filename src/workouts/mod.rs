//! Workout models
//!
//! Every activity shares the same base measurements (action count, duration,
//! body weight) and the same distance / mean speed computation. Each variant
//! supplies its own calorie formula, and swimming also replaces the speed
//! formula with one based on pool length and crossings.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::WorkoutError;
use crate::types::{WorkoutKind, WorkoutRecord};

/// Step length for running and walking (meters)
pub const LEN_STEP: f64 = 0.65;
/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_HR: f64 = 60.0;

/// Measurements common to every workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutBase {
    /// Steps (running, walking) or strokes (swimming)
    pub action: u64,
    /// Duration (hours)
    pub duration_hours: f64,
    /// Athlete weight (kg)
    pub weight_kg: f64,
}

impl WorkoutBase {
    pub fn new(action: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        if !(duration_hours.is_finite() && duration_hours > 0.0) {
            return Err(WorkoutError::NonPositiveDuration(duration_hours));
        }
        ensure_positive("weight_kg", weight_kg)?;

        Ok(Self {
            action,
            duration_hours,
            weight_kg,
        })
    }
}

/// Common interface of all workout variants
pub trait Workout {
    fn kind(&self) -> WorkoutKind;

    fn base(&self) -> &WorkoutBase;

    /// Distance covered by one action (meters)
    fn step_length_m(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km
    fn distance(&self) -> f64 {
        self.base().action as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration_hours
    }

    /// Spent energy in kcal
    fn calories(&self) -> f64;

    /// Summary record; fails when an extreme input overflows a computed value
    fn summary(&self) -> Result<WorkoutRecord, WorkoutError> {
        Ok(WorkoutRecord {
            activity_label: self.kind().label().to_string(),
            duration_hours: self.base().duration_hours,
            distance_km: ensure_finite("distance_km", self.distance())?,
            mean_speed_kmh: ensure_finite("mean_speed_kmh", self.mean_speed())?,
            calories: ensure_finite("calories", self.calories())?,
        })
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::NonFiniteResult { field })
    }
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::invalid(name, value, "must be a positive number"))
    }
}
