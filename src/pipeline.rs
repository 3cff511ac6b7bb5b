//! Pipeline orchestration
//!
//! Runs packages through dispatch → summary → formatting and holds the
//! built-in sample packages.

use crate::error::WorkoutError;
use crate::schema::WorkoutPackage;
use crate::types::WorkoutRecord;

/// Sensor packages reported when no input is supplied
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Dispatch one package and compute its summary record
pub fn summarize(package: &WorkoutPackage) -> Result<WorkoutRecord, WorkoutError> {
    let workout = package.build()?;
    let record = workout.summary()?;

    tracing::debug!(
        activity = %record.activity_label,
        distance_km = record.distance_km,
        calories = record.calories,
        "computed workout summary"
    );

    Ok(record)
}

/// Dispatch one package and render its summary line
pub fn report_line(package: &WorkoutPackage) -> Result<String, WorkoutError> {
    summarize(package).map(|record| record.message())
}

/// Summarize every package in order, aborting on the first failure
pub fn summarize_all(packages: &[WorkoutPackage]) -> Result<Vec<WorkoutRecord>, WorkoutError> {
    packages.iter().map(summarize).collect()
}

/// Outcome of a batch processed without aborting
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Records for packages that succeeded, in input order
    pub records: Vec<WorkoutRecord>,
    /// Failures as (package index, error)
    pub failures: Vec<(usize, WorkoutError)>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Summarize every package, collecting failures instead of aborting
pub fn summarize_batch(packages: &[WorkoutPackage]) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, package) in packages.iter().enumerate() {
        match summarize(package) {
            Ok(record) => report.records.push(record),
            Err(e) => {
                tracing::warn!(index, code = %package.workout_type, error = %e, "skipping package");
                report.failures.push((index, e));
            }
        }
    }

    report
}
