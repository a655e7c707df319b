//! Aggregation stage.
//!
//! Runs on its own thread while calculation is still in progress. It drains
//! the collector until every producer is done, ranks the cities, persists
//! the ranking and hands it to the analyzer exactly once.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use forecast_core::model::{CityStats, RankedCityStats};
use forecast_core::rating::rank;

use crate::collector::{Completion, CollectorQueue};
use crate::error::PipelineError;
use crate::handoff::HandoffSender;
use crate::interfaces::ResultStore;
use crate::orchestrator::ParseFailurePolicy;

/// Background aggregation worker.
pub struct Aggregator {
    queue: CollectorQueue,
    store: Arc<dyn ResultStore>,
    handoff: HandoffSender<Vec<RankedCityStats>>,
    policy: ParseFailurePolicy,
}

/// Handle to a running aggregator.
pub struct AggregatorHandle {
    handle: JoinHandle<Result<usize, PipelineError>>,
}

impl Aggregator {
    #[must_use]
    pub fn new(
        queue: CollectorQueue,
        store: Arc<dyn ResultStore>,
        handoff: HandoffSender<Vec<RankedCityStats>>,
        policy: ParseFailurePolicy,
    ) -> Self {
        Self {
            queue,
            store,
            handoff,
            policy,
        }
    }

    /// Start the aggregator on a dedicated thread.
    pub fn spawn(self) -> Result<AggregatorHandle, PipelineError> {
        let handle = thread::Builder::new()
            .name("aggregator".into())
            .spawn(move || self.run())
            .map_err(|e| PipelineError::Spawn("aggregator", e))?;
        Ok(AggregatorHandle { handle })
    }

    /// Drain, rank, persist and hand off. Returns the number of ranked cities.
    pub fn run(self) -> Result<usize, PipelineError> {
        tracing::info!("Run aggregation task");
        let completions = self.queue.drain();
        tracing::info!(received = completions.len(), "Received data about cities");

        let items = settle(completions, self.policy)?;
        let ranked = rank(items);
        tracing::info!("Calculated rating");

        self.store.save(&ranked).map_err(PipelineError::Persist)?;
        tracing::info!("Saved data");

        let count = ranked.len();
        self.handoff.send(ranked)?;
        Ok(count)
    }
}

impl AggregatorHandle {
    /// Wait for the aggregator to finish.
    pub fn join(self) -> Result<usize, PipelineError> {
        self.handle
            .join()
            .map_err(|_| PipelineError::Panicked("aggregator"))?
    }
}

/// Apply the parse failure policy and put results back in submission order,
/// so ties rank the same however the workers interleaved.
fn settle(
    mut completions: Vec<Completion>,
    policy: ParseFailurePolicy,
) -> Result<Vec<CityStats>, PipelineError> {
    completions.sort_by_key(|completion| completion.seq);

    let mut items = Vec::with_capacity(completions.len());
    for completion in completions {
        match completion.outcome {
            Ok(stats) => items.push(stats),
            Err(err) => match policy {
                ParseFailurePolicy::Skip => {
                    tracing::warn!(city = %completion.city, "Dropping city from ranking: {err}");
                }
                ParseFailurePolicy::Abort => return Err(PipelineError::Parse(err)),
            },
        }
    }
    Ok(items)
}
