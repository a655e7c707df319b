//! Forecast data model.
//!
//! `RawForecast` is the typed view of a provider document and only lives
//! between fetching and calculation. `CityStats` and `RankedCityStats` are
//! the records that end up in the persisted ranking.

use serde::{Deserialize, Deserializer, Serialize};

use crate::source::RawForecastDocument;

/// One hourly record of a forecast day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawHour {
    /// Hour of day. Providers send it either as a number or a decimal string.
    /// Out-of-range values are kept and never match the daytime window.
    #[serde(deserialize_with = "hour_of_day")]
    pub hour: i64,
    /// Temperature in whole degrees.
    #[serde(rename = "temp")]
    pub temperature: i64,
    /// Provider condition code, e.g. `clear` or `light-rain`.
    pub condition: String,
}

/// One forecast day with its hourly records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawDay {
    pub date: String,
    pub hours: Vec<RawHour>,
}

/// Typed forecast for a single city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawForecast {
    pub city: String,
    pub days: Vec<RawDay>,
}

#[derive(Deserialize)]
struct WireForecast {
    geo_object: WireGeoObject,
    forecasts: Vec<RawDay>,
}

#[derive(Deserialize)]
struct WireGeoObject {
    locality: WireLocality,
}

#[derive(Deserialize)]
struct WireLocality {
    name: String,
}

impl RawForecast {
    /// Read the typed forecast out of a provider document.
    ///
    /// Unknown fields are ignored; missing or mistyped expected fields fail.
    pub fn from_document(document: &RawForecastDocument) -> Result<Self, serde_json::Error> {
        let wire = WireForecast::deserialize(document)?;
        Ok(Self {
            city: wire.geo_object.locality.name,
            days: wire.forecasts,
        })
    }
}

fn hour_of_day<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Hour {
        Number(i64),
        Text(String),
    }

    match Hour::deserialize(deserializer)? {
        Hour::Number(hour) => Ok(hour),
        Hour::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Daytime weather summary of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWeather {
    /// Floor-averaged daytime temperature, `None` without daytime hours.
    pub average_temp: Option<i64>,
    /// Number of daytime hours without rain.
    pub no_rain: u32,
}

/// Statistics for one forecast day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    pub date: String,
    pub weather: DayWeather,
}

/// Statistics for one city over the whole forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityStats {
    pub city: String,
    pub days: Vec<DayStats>,
    /// Floor average of the days' temperatures, `None` when no day has one.
    pub average_temp: Option<i64>,
    /// Floor average of the dry hours over days that have a temperature.
    pub no_rain: Option<u32>,
}

/// A city's statistics together with its 1-based position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCityStats {
    #[serde(flatten)]
    pub stats: CityStats,
    pub rating: u32,
}

impl RankedCityStats {
    #[must_use]
    pub fn city(&self) -> &str {
        &self.stats.city
    }
}
