//! Core orchestration: fetch barrier, overlapped calculation and
//! aggregation, then analysis.

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};

use forecast_core::analysis::BestCities;
use forecast_core::calculator::calculate_document;
use forecast_core::model::RankedCityStats;
use forecast_core::source::ForecastSource;

use crate::aggregator::Aggregator;
use crate::analyzer::Analyzer;
use crate::collector::{collector, Completion};
use crate::error::PipelineError;
use crate::fetcher::fetch_all;
use crate::handoff::oneshot;
use crate::interfaces::{ReportPresenter, ResultStore};

/// What to do with a city whose forecast cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseFailurePolicy {
    /// Log it and rank the remaining cities.
    #[default]
    Skip,
    /// Fail the run before anything is persisted.
    Abort,
}

/// Pool sizes and failure policy for a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineOptions {
    /// Fetch workers. 0 means host parallelism.
    pub io_workers: usize,
    /// Calculation workers. 0 means host parallelism.
    pub cpu_workers: usize,
    pub on_parse_error: ParseFailurePolicy,
}

impl PipelineOptions {
    /// Replace zero worker counts with the host parallelism.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        let host = std::thread::available_parallelism().map_or(1, usize::from);
        if self.io_workers == 0 {
            self.io_workers = host;
        }
        if self.cpu_workers == 0 {
            self.cpu_workers = host;
        }
        self
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Ranked cities, rating 1 first. Identical to what was persisted.
    pub ranked: Vec<RankedCityStats>,
    pub best: BestCities,
}

/// Run the whole job for `cities`.
///
/// The ranking is saved to `store` and the best cities are passed to
/// `presenter` before returning.
pub fn run_pipeline(
    source: &dyn ForecastSource,
    cities: &[String],
    store: Arc<dyn ResultStore>,
    presenter: &dyn ReportPresenter,
    opts: &PipelineOptions,
) -> Result<PipelineOutcome, PipelineError> {
    let opts = opts.clone().normalize();
    let io_pool = build_pool("fetch", opts.io_workers)?;
    let cpu_pool = build_pool("calc", opts.cpu_workers)?;

    tracing::info!(cities = cities.len(), workers = opts.io_workers, "Starting collection data");
    let documents = fetch_all(source, cities, &io_pool)?;
    tracing::info!("End collection data");

    let (collector, queue) = collector();
    let (handoff_tx, handoff_rx) = oneshot();

    tracing::info!(workers = opts.cpu_workers, "Starting calculate");
    tracing::info!("Starting aggregation");
    let aggregator = Aggregator::new(queue, store, handoff_tx, opts.on_parse_error).spawn()?;

    cpu_pool.scope(|scope| {
        for (seq, (city, document)) in cities.iter().zip(documents).enumerate() {
            let collector = collector.clone();
            scope.spawn(move |_| {
                let outcome = calculate_document(city, &document);
                collector.push(Completion {
                    seq,
                    city: city.clone(),
                    outcome,
                });
            });
        }
    });
    // Last producer handle; the aggregator's drain ends once this is gone.
    drop(collector);
    tracing::info!("End calculate");

    let ranked_count = aggregator.join()?;
    tracing::info!(ranked = ranked_count, "End aggregation");

    tracing::info!("Starting analysis");
    let outcome = Analyzer::new(handoff_rx).analysis(presenter)?;
    tracing::info!("End analysis");
    Ok(outcome)
}

fn build_pool(name: &'static str, threads: usize) -> Result<ThreadPool, PipelineError> {
    Ok(ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(move |i| format!("{name}-{i}"))
        .build()?)
}
