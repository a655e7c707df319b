//! Orchestration interfaces.

use forecast_core::analysis::BestCities;
use forecast_core::model::RankedCityStats;

/// Trait for persisting the final ranking. Called once per run, from the
/// aggregator thread.
pub trait ResultStore: Send + Sync {
    /// Store the complete ranked list.
    fn save(&self, ranked: &[RankedCityStats]) -> std::io::Result<()>;
}

/// Trait for presenting the analysis to the user.
pub trait ReportPresenter: Send + Sync {
    /// Present the best city set.
    fn present_best(&self, best: &BestCities);
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ReportPresenter for NullPresenter {
    fn present_best(&self, _best: &BestCities) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_presenter() {
        NullPresenter.present_best(&BestCities::default());
    }
}
