//! Error handling and exit codes.

use forecast_core::constants::exit_codes;
use forecast_orchestration::PipelineError;

/// Errors raised by the application before the pipeline starts.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Map a pipeline error to the process exit code.
#[must_use]
pub fn handle_error(err: &PipelineError) -> u8 {
    match err {
        PipelineError::Fetch(_) => exit_codes::ERROR_FETCH,
        PipelineError::Parse(_) => exit_codes::ERROR_PARSE,
        PipelineError::Persist(_) => exit_codes::ERROR_PERSIST,
        PipelineError::Pool(_)
        | PipelineError::Spawn(..)
        | PipelineError::Panicked(_)
        | PipelineError::Handoff(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error that reached `main`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<PipelineError>() {
        return handle_error(err);
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::Config(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}
