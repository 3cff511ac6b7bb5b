//! Workout Stats - distance, mean speed and calorie estimates for workouts
//!
//! Raw sensor packages (a workout code plus ordered numeric parameters) are
//! turned into summaries through a small pipeline: dispatch → workout model
//! → summary record → formatted line.
//!
//! ## Activities
//!
//! - **Running** (`RUN`): steps, duration, weight
//! - **Race-walking** (`WLK`): steps, duration, weight, height
//! - **Swimming** (`SWM`): strokes, duration, weight, pool length, pool crossings

pub mod dispatch;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod schema;
pub mod types;
pub mod workouts;

pub use dispatch::build;
pub use error::WorkoutError;
pub use format::format_record;
pub use pipeline::{report_line, sample_packages, summarize, summarize_all, summarize_batch};
pub use schema::{PackageReader, WorkoutPackage};
pub use types::{WorkoutKind, WorkoutRecord};
pub use workouts::{Running, SportsWalking, Swimming, Workout};

/// Crate version reported by the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
