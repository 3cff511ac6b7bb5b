//! Race-walking

use super::{ensure_positive, Workout, WorkoutBase, MIN_IN_HR};
use crate::error::WorkoutError;
use crate::types::WorkoutKind;

/// Sports (race) walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: WorkoutBase,
    /// Athlete height (cm)
    height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_TO_MS: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        let base = WorkoutBase::new(action, duration_hours, weight_kg)?;
        ensure_positive("height_cm", height_cm)?;

        Ok(Self { base, height_cm })
    }
}

impl Workout for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn calories(&self) -> f64 {
        let speed_ms = self.mean_speed() * Self::KMH_TO_MS;
        let height_m = self.height_cm / Self::CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight_kg
            + (speed_ms.powi(2) / height_m)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.base.weight_kg)
            * self.base.duration_hours
            * MIN_IN_HR
    }
}
