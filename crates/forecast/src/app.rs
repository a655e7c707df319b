//! Application entry point.

use std::sync::Arc;

use anyhow::{Context, Result};

use forecast_cli::ConsoleReporter;
use forecast_core::constants::CITIES;
use forecast_core::source::FixtureForecastSource;
use forecast_orchestration::{run_pipeline, JsonFileStore};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if !config.data_dir.is_dir() {
        return Err(AppError::Config(format!(
            "forecast directory {} does not exist",
            config.data_dir.display()
        ))
        .into());
    }

    let source = FixtureForecastSource::new(&config.data_dir);
    let store = Arc::new(JsonFileStore::new(&config.output));
    let presenter = ConsoleReporter::new(config.details);
    let cities: Vec<String> = CITIES.iter().map(|city| (*city).to_string()).collect();
    let opts = config.pipeline_options();

    let outcome = run_pipeline(&source, &cities, store, &presenter, &opts)
        .context("forecast run failed")?;

    tracing::info!(
        ranked = outcome.ranked.len(),
        output = %config.output.display(),
        "Ranking written"
    );
    Ok(())
}
