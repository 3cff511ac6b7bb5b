//! Workout package schema
//!
//! A package is one `(workout_type, data)` pair as delivered by the sensor:
//! a workout code followed by its ordered numeric parameters.

mod package;
mod reader;

pub use package::*;
pub use reader::*;
