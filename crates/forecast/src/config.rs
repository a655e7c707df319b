//! Application configuration from CLI flags and environment.
//!
//! Every setting has a default, so a plain `forecast` runs the full job.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use forecast_orchestration::{ParseFailurePolicy, PipelineOptions};

/// Forecast — rank cities by weather and report the best ones for a trip.
#[derive(Parser, Debug)]
#[command(name = "forecast", version, about)]
pub struct AppConfig {
    /// Directory with one provider document per city (`<CITY>.json`).
    #[arg(long, default_value = "data", env = "FORECAST_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Where to write the ranking.
    #[arg(short, long, default_value = "result.json", env = "FORECAST_OUTPUT")]
    pub output: PathBuf,

    /// Fetch workers (0 = number of CPUs).
    #[arg(long, default_value = "0", env = "FORECAST_IO_WORKERS")]
    pub io_workers: usize,

    /// Calculation workers (0 = number of CPUs).
    #[arg(long, default_value = "0", env = "FORECAST_CPU_WORKERS")]
    pub cpu_workers: usize,

    /// What to do with a malformed forecast.
    #[arg(long, value_enum, default_value = "skip", env = "FORECAST_ON_PARSE_ERROR")]
    pub on_parse_error: ParseErrorMode,

    /// Also print the shared statistics of the best cities.
    #[arg(short, long, env = "FORECAST_DETAILS")]
    pub details: bool,
}

/// Command-line spelling of `ParseFailurePolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParseErrorMode {
    /// Drop the city and rank the rest.
    Skip,
    /// Fail the run.
    Abort,
}

impl From<ParseErrorMode> for ParseFailurePolicy {
    fn from(mode: ParseErrorMode) -> Self {
        match mode {
            ParseErrorMode::Skip => Self::Skip,
            ParseErrorMode::Abort => Self::Abort,
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Pipeline options with worker counts resolved.
    #[must_use]
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            io_workers: self.io_workers,
            cpu_workers: self.cpu_workers,
            on_parse_error: self.on_parse_error.into(),
        }
        .normalize()
    }
}
