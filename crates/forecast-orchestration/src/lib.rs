//! # forecast-orchestration
//!
//! The four-stage pipeline: fetch on an I/O pool, calculate on a CPU pool,
//! aggregate on a background thread fed by a multi-producer queue, and
//! analyze once the ranking has been handed over.

pub mod aggregator;
pub mod analyzer;
pub mod collector;
pub mod error;
pub mod fetcher;
pub mod handoff;
pub mod interfaces;
pub mod orchestrator;
pub mod store;

pub use error::PipelineError;
pub use interfaces::{NullPresenter, ReportPresenter, ResultStore};
pub use orchestrator::{run_pipeline, ParseFailurePolicy, PipelineOptions, PipelineOutcome};
pub use store::{JsonFileStore, MemoryStore};
