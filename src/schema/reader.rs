//! Readers for package batches (NDJSON and JSON arrays)

use crate::error::WorkoutError;
use crate::schema::package::WorkoutPackage;

/// Parses batches of workout packages
pub struct PackageReader;

impl PackageReader {
    /// Parse a JSON string containing an array of packages
    pub fn parse_array(json: &str) -> Result<Vec<WorkoutPackage>, WorkoutError> {
        let packages: Vec<WorkoutPackage> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse NDJSON (one package per line, blank lines skipped)
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<WorkoutPackage>, WorkoutError> {
        let mut packages = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<WorkoutPackage>(trimmed) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    return Err(WorkoutError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(packages)
    }
}
