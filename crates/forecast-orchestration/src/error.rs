//! Pipeline error type.

use forecast_core::calculator::ParseError;
use forecast_core::source::FetchError;

use crate::handoff::HandoffError;

/// Error type for a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A forecast could not be fetched; the run stops at the fetch barrier.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A forecast was malformed and the run is configured to abort on it.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The ranking could not be written.
    #[error("failed to persist ranking: {0}")]
    Persist(#[source] std::io::Error),

    /// A worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// A worker thread could not be started.
    #[error("failed to start {0} worker: {1}")]
    Spawn(&'static str, #[source] std::io::Error),

    /// A worker thread panicked.
    #[error("{0} worker panicked")]
    Panicked(&'static str),

    /// The ranking never reached the analyzer.
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}
