//! Workout CLI - Command-line interface for Workout Stats
//!
//! Commands:
//! - demo: Report the built-in sample packages (default)
//! - report: Summarize packages read from a file or stdin
//! - validate: Check packages without printing summaries

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use workout_stats::pipeline::{sample_packages, summarize, summarize_all, summarize_batch};
use workout_stats::{PackageReader, WorkoutError, WorkoutPackage, WorkoutRecord, VERSION};

/// Workout - distance, speed and calorie summaries from sensor packages
#[derive(Parser)]
#[command(name = "workout")]
#[command(version = VERSION)]
#[command(about = "Summarize running, walking and swimming workouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the built-in sample packages
    Demo {
        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Summarize packages from a file (use - for stdin)
    Report {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Skip failing packages instead of aborting
        #[arg(long)]
        keep_going: bool,
    },

    /// Check that every package dispatches to a valid workout
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One summary line per workout
    Text,
    /// Newline-delimited JSON (one record per line)
    Ndjson,
    /// Pretty-printed JSON array of records
    JsonPretty,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

/// Log filter from `WORKOUT_LOG_LEVEL` (or `RUST_LOG`, default `warn`), written to stderr
fn init_logging() {
    let log_env = std::env::var("WORKOUT_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("workout: log filter: {}", log_env);
}

fn run(cli: Cli) -> Result<(), WorkoutCliError> {
    match cli.command {
        None => cmd_demo(OutputFormat::Text),
        Some(Commands::Demo { output_format }) => cmd_demo(output_format),
        Some(Commands::Report {
            input,
            input_format,
            output_format,
            keep_going,
        }) => cmd_report(&input, input_format, output_format, keep_going),
        Some(Commands::Validate {
            input,
            input_format,
            json,
        }) => cmd_validate(&input, input_format, json),
    }
}

fn cmd_demo(output_format: OutputFormat) -> Result<(), WorkoutCliError> {
    let records = summarize_all(&sample_packages())?;
    print!("{}", format_output(&records, &output_format)?);
    Ok(())
}

fn cmd_report(
    input: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    keep_going: bool,
) -> Result<(), WorkoutCliError> {
    let packages = read_packages(input, &input_format)?;

    if packages.is_empty() {
        return Err(WorkoutCliError::NoPackages);
    }

    if !keep_going {
        let records = summarize_all(&packages)?;
        print!("{}", format_output(&records, &output_format)?);
        return Ok(());
    }

    let report = summarize_batch(&packages);
    print!("{}", format_output(&report.records, &output_format)?);

    if report.is_clean() {
        Ok(())
    } else {
        Err(WorkoutCliError::PackagesFailed(report.failures.len()))
    }
}

fn cmd_validate(
    input: &Path,
    input_format: InputFormat,
    json: bool,
) -> Result<(), WorkoutCliError> {
    let packages = read_packages(input, &input_format)?;

    let errors: Vec<ValidationErrorDetail> = packages
        .iter()
        .enumerate()
        .filter_map(|(index, package)| {
            summarize(package).err().map(|e| ValidationErrorDetail {
                index,
                workout_type: package.workout_type.clone(),
                error: e.to_string(),
            })
        })
        .collect();

    let report = ValidationReport {
        total_packages: packages.len(),
        valid_packages: packages.len() - errors.len(),
        invalid_packages: errors.len(),
        errors,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total packages:   {}", report.total_packages);
        println!("Valid packages:   {}", report.valid_packages);
        println!("Invalid packages: {}", report.invalid_packages);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for error in &report.errors {
                println!("  [{}] {}: {}", error.index, error.workout_type, error.error);
            }
        }
    }

    if report.invalid_packages > 0 {
        Err(WorkoutCliError::ValidationFailed(report.invalid_packages))
    } else {
        Ok(())
    }
}

// Helper functions

fn read_packages(
    input: &Path,
    input_format: &InputFormat,
) -> Result<Vec<WorkoutPackage>, WorkoutCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Err(WorkoutCliError::InteractiveStdin);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageReader::parse_array(&input_data)?,
    };
    tracing::debug!(count = packages.len(), "read workout packages");

    Ok(packages)
}

fn format_output(
    records: &[WorkoutRecord],
    format: &OutputFormat,
) -> Result<String, WorkoutCliError> {
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .map(|record| record.message() + "\n")
            .collect()),
        OutputFormat::Ndjson => {
            let mut output = String::new();
            for record in records {
                output.push_str(&serde_json::to_string(record)?);
                output.push('\n');
            }
            Ok(output)
        }
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(records)? + "\n"),
    }
}

#[derive(serde::Serialize)]
struct ValidationReport {
    total_packages: usize,
    valid_packages: usize,
    invalid_packages: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    workout_type: String,
    error: String,
}

#[derive(Debug)]
enum WorkoutCliError {
    Io(io::Error),
    Workout(WorkoutError),
    Json(serde_json::Error),
    InteractiveStdin,
    NoPackages,
    PackagesFailed(usize),
    ValidationFailed(usize),
}

impl From<io::Error> for WorkoutCliError {
    fn from(e: io::Error) -> Self {
        WorkoutCliError::Io(e)
    }
}

impl From<WorkoutError> for WorkoutCliError {
    fn from(e: WorkoutError) -> Self {
        WorkoutCliError::Workout(e)
    }
}

impl From<serde_json::Error> for WorkoutCliError {
    fn from(e: serde_json::Error) -> Self {
        WorkoutCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WorkoutCliError> for CliError {
    fn from(e: WorkoutCliError) -> Self {
        match e {
            WorkoutCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WorkoutCliError::Workout(e) => {
                let (code, hint) = match &e {
                    WorkoutError::UnknownWorkoutType(_) => {
                        ("UNKNOWN_WORKOUT_TYPE", "Use one of RUN, WLK, SWM")
                    }
                    WorkoutError::ParameterCount { .. } => (
                        "PARAMETER_COUNT",
                        "RUN takes 3 parameters, WLK takes 4, SWM takes 5",
                    ),
                    WorkoutError::NonPositiveDuration(_) | WorkoutError::InvalidParameter { .. } => {
                        ("INVALID_PARAMETER", "Check the package values")
                    }
                    WorkoutError::NonFiniteResult { .. } => (
                        "NON_FINITE_RESULT",
                        "Check for an unrealistically short duration or huge counts",
                    ),
                    WorkoutError::ParseError(_) | WorkoutError::JsonError(_) => (
                        "PARSE_ERROR",
                        "Packages look like {\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]}",
                    ),
                };
                CliError {
                    code: code.to_string(),
                    message: e.to_string(),
                    hint: Some(hint.to_string()),
                }
            }
            WorkoutCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            WorkoutCliError::InteractiveStdin => CliError {
                code: "INTERACTIVE_STDIN".to_string(),
                message: "stdin is a terminal".to_string(),
                hint: Some("Pipe packages into stdin or pass --input <file>".to_string()),
            },
            WorkoutCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            WorkoutCliError::PackagesFailed(count) => CliError {
                code: "PACKAGES_FAILED".to_string(),
                message: format!("{} packages could not be summarized", count),
                hint: Some("Run 'workout validate' for details".to_string()),
            },
            WorkoutCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} packages failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_output_one_line_per_record() {
        let records = summarize_all(&sample_packages()).unwrap();
        let output = format_output(&records, &OutputFormat::Text).unwrap();

        assert_eq!(output.lines().count(), 3);
        assert!(output.ends_with("Потрачено ккал: 349.252.\n"));
    }

    #[test]
    fn test_ndjson_output_parses_back() {
        let records = summarize_all(&sample_packages()).unwrap();
        let output = format_output(&records, &OutputFormat::Ndjson).unwrap();

        let labels: Vec<String> = output
            .lines()
            .map(|line| serde_json::from_str::<WorkoutRecord>(line).unwrap().activity_label)
            .collect();
        assert_eq!(labels, vec!["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_unknown_type_error_code() {
        let err = CliError::from(WorkoutCliError::from(WorkoutError::UnknownWorkoutType(
            "XYZ".to_string(),
        )));
        assert_eq!(err.code, "UNKNOWN_WORKOUT_TYPE");
        assert_eq!(err.message, "Unrecognized workout type: XYZ");
    }

    #[test]
    fn test_cli_parses_report_flags() {
        let cli = Cli::try_parse_from([
            "workout",
            "report",
            "--input",
            "packages.json",
            "--input-format",
            "json",
            "--keep-going",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Report {
                input, keep_going, ..
            }) => {
                assert_eq!(input, PathBuf::from("packages.json"));
                assert!(keep_going);
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_cli_defaults_to_demo() {
        let cli = Cli::try_parse_from(["workout"]).unwrap();
        assert!(cli.command.is_none());
    }
}
