//! Swimming

use super::{ensure_positive, Workout, WorkoutBase, M_IN_KM};
use crate::error::WorkoutError;
use crate::types::WorkoutKind;

/// Pool swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: WorkoutBase,
    /// Pool length (meters)
    pool_length_m: f64,
    /// Number of times the pool was crossed
    pool_crossings: u32,
}

impl Swimming {
    /// Distance covered by one stroke (meters)
    const LEN_STROKE: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_crossings: u32,
    ) -> Result<Self, WorkoutError> {
        let base = WorkoutBase::new(action, duration_hours, weight_kg)?;
        ensure_positive("pool_length_m", pool_length_m)?;
        if pool_crossings == 0 {
            return Err(WorkoutError::invalid(
                "pool_crossings",
                0.0,
                "must be a positive whole number",
            ));
        }

        Ok(Self {
            base,
            pool_length_m,
            pool_crossings,
        })
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        Self::LEN_STROKE
    }

    /// Speed follows the pool distance, not the stroke count
    fn mean_speed(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_crossings) / M_IN_KM / self.base.duration_hours
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_MEAN_SPEED_MULTIPLIER
            * self.base.weight_kg
            * self.base.duration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swimming_reference_workout() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();

        // 720 * 1.38 / 1000
        assert!((swim.distance() - 0.9936).abs() < 1e-12);
        // 25 * 40 / 1000 / 1
        assert!((swim.mean_speed() - 1.0).abs() < 1e-12);
        // (1.0 + 1.1) * 2 * 80 * 1
        assert!((swim.calories() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let few = Swimming::new(1, 0.5, 60.0, 50.0, 2).unwrap();
        let many = Swimming::new(5000, 0.5, 60.0, 50.0, 2).unwrap();

        assert_eq!(few.mean_speed(), many.mean_speed());
        assert!((few.mean_speed() - 0.2).abs() < 1e-12);
        assert!(many.distance() > few.distance());
        assert!((few.calories() - 78.0).abs() < 1e-9);
    }

    #[test]
    fn test_swimming_rejects_empty_pool() {
        assert!(matches!(
            Swimming::new(720, 1.0, 80.0, 25.0, 0),
            Err(WorkoutError::InvalidParameter { name: "pool_crossings", .. })
        ));
        assert!(matches!(
            Swimming::new(720, 1.0, 80.0, -25.0, 40),
            Err(WorkoutError::InvalidParameter { name: "pool_length_m", .. })
        ));
    }
}
