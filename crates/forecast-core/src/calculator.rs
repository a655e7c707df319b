//! Per-city statistics.
//!
//! `calculate` is a pure function of a `RawForecast`. `calculate_document`
//! adds the parsing step in front of it and is what the worker pool runs.

use crate::constants::{CLEAR_CONDITIONS, DAYTIME_HOURS};
use crate::model::{CityStats, DayStats, DayWeather, RawDay, RawForecast};
use crate::source::RawForecastDocument;

/// Error type for a forecast document that does not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A required field is missing or has the wrong type.
    #[error("malformed forecast for {city}: {source}")]
    Malformed {
        city: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    /// City identifier the failing document was fetched for.
    #[must_use]
    pub fn city(&self) -> &str {
        match self {
            Self::Malformed { city, .. } => city,
        }
    }
}

/// Compute statistics for one city.
#[must_use]
pub fn calculate(raw: &RawForecast) -> CityStats {
    let days: Vec<DayStats> = raw.days.iter().map(day_stats).collect();

    // Only days with a daytime temperature contribute to either aggregate.
    let rated: Vec<DayWeather> = days
        .iter()
        .map(|day| day.weather)
        .filter(|weather| weather.average_temp.is_some())
        .collect();

    let average_temp = floor_average(rated.iter().filter_map(|weather| weather.average_temp));
    let no_rain = floor_average(rated.iter().map(|weather| i64::from(weather.no_rain)))
        .and_then(|value| u32::try_from(value).ok());

    CityStats {
        city: raw.city.clone(),
        days,
        average_temp,
        no_rain,
    }
}

/// Parse a provider document and compute its statistics.
///
/// A malformed document is logged and reported as `ParseError`; it affects
/// only this city.
pub fn calculate_document(
    city: &str,
    document: &RawForecastDocument,
) -> Result<CityStats, ParseError> {
    let raw = RawForecast::from_document(document).map_err(|source| {
        let err = ParseError::Malformed {
            city: city.to_string(),
            source,
        };
        tracing::warn!("Error parsing weather data: {err}");
        err
    })?;

    let stats = calculate(&raw);
    tracing::info!(city = %stats.city, "Calculated data");
    Ok(stats)
}

fn day_stats(day: &RawDay) -> DayStats {
    let (temperatures, dry_hours) = day
        .hours
        .iter()
        .filter(|hour| DAYTIME_HOURS.contains(&hour.hour))
        .fold((Vec::new(), 0u32), |(mut temps, dry), hour| {
            temps.push(hour.temperature);
            let dry = if is_clear(&hour.condition) { dry + 1 } else { dry };
            (temps, dry)
        });

    DayStats {
        date: day.date.clone(),
        weather: DayWeather {
            average_temp: floor_average(temperatures),
            no_rain: dry_hours,
        },
    }
}

fn is_clear(condition: &str) -> bool {
    CLEAR_CONDITIONS.contains(&condition)
}

/// Integer average rounded toward negative infinity; `None` for no values.
///
/// The sum is kept in `i128`, so any run of `i64` inputs averages without
/// overflow and the result always fits back into `i64`.
#[must_use]
pub fn floor_average(values: impl IntoIterator<Item = i64>) -> Option<i64> {
    let (sum, count) = values
        .into_iter()
        .fold((0i128, 0i128), |(sum, count), value| {
            (sum + i128::from(value), count + 1)
        });
    if count == 0 {
        return None;
    }
    i64::try_from(sum.div_euclid(count)).ok()
}
