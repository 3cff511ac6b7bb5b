//! Summary line formatting

use std::fmt;

use crate::types::WorkoutRecord;

/// Render the human-readable summary line for a record
pub fn format_record(record: &WorkoutRecord) -> String {
    record.to_string()
}

impl WorkoutRecord {
    /// Summary line (same as `Display`)
    pub fn message(&self) -> String {
        format_record(self)
    }
}

impl fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.activity_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories,
        )
    }
}
