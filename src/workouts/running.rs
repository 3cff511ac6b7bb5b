//! Running

use super::{Workout, WorkoutBase, M_IN_KM, MIN_IN_HR};
use crate::error::WorkoutError;
use crate::types::WorkoutKind;

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: WorkoutBase,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            base: WorkoutBase::new(action, duration_hours, weight_kg)?,
        })
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn calories(&self) -> f64 {
        let speed = self.mean_speed();
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * speed + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg
            / M_IN_KM
            * self.base.duration_hours
            * MIN_IN_HR
    }
}
