//! Fetch stage: one task per city on the bounded I/O pool.

use rayon::prelude::*;
use rayon::ThreadPool;

use forecast_core::source::{FetchError, ForecastSource, RawForecastDocument};

/// Fetch every city's forecast on `pool` and wait for all of them.
///
/// Results are in the order of `cities`, whatever order the fetches finish
/// in. The first error is returned as is.
pub fn fetch_all(
    source: &dyn ForecastSource,
    cities: &[String],
    pool: &ThreadPool,
) -> Result<Vec<RawForecastDocument>, FetchError> {
    pool.install(|| {
        cities
            .par_iter()
            .map(|city| {
                let document = source.get_forecast(city)?;
                tracing::info!(city = %city, "Received data");
                Ok(document)
            })
            .collect()
    })
}
