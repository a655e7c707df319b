//! # forecast-core
//!
//! Core library for the city forecast ranking job: the forecast data model,
//! per-city statistics, favorability rating and best-city analysis.
//!
//! Everything in this crate is single-threaded and pure except for the
//! forecast sources, which read provider documents on behalf of the
//! orchestration layer.

pub mod analysis;
pub mod calculator;
pub mod constants;
pub mod model;
pub mod rating;
pub mod source;

// Re-exports
pub use analysis::{best_cities, BestCities};
pub use calculator::{calculate, calculate_document, ParseError};
pub use constants::{exit_codes, CITIES, CLEAR_CONDITIONS, DAYTIME_HOURS};
pub use model::{CityStats, DayStats, DayWeather, RankedCityStats, RawDay, RawForecast, RawHour};
pub use rating::{rank, Favorability};
pub use source::{
    FetchError, FixtureForecastSource, ForecastSource, RawForecastDocument, StaticForecastSource,
};
