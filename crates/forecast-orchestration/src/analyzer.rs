//! Analysis stage.

use forecast_core::analysis::best_cities;
use forecast_core::model::RankedCityStats;

use crate::error::PipelineError;
use crate::handoff::HandoffReceiver;
use crate::interfaces::ReportPresenter;
use crate::orchestrator::PipelineOutcome;

/// Receives the ranking from the aggregator and reports the best cities.
pub struct Analyzer {
    handoff: HandoffReceiver<Vec<RankedCityStats>>,
}

impl Analyzer {
    #[must_use]
    pub fn new(handoff: HandoffReceiver<Vec<RankedCityStats>>) -> Self {
        Self { handoff }
    }

    /// Block for the ranking, derive the best cities and present them.
    pub fn analysis(
        self,
        presenter: &dyn ReportPresenter,
    ) -> Result<PipelineOutcome, PipelineError> {
        let ranked = self.handoff.recv()?;
        tracing::info!("Received data for analysis");

        let best = best_cities(&ranked);
        presenter.present_best(&best);
        Ok(PipelineOutcome { ranked, best })
    }
}
