//! Forecast sources.
//!
//! `ForecastSource` is the seam to the weather provider. The pipeline only
//! needs a raw provider document per city; transport details stay behind
//! the trait.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Provider document as returned by a source, not yet validated.
pub type RawForecastDocument = serde_json::Value;

/// Error type for fetching a forecast. Fetch errors abort the whole run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The source has no forecast for this city.
    #[error("no forecast available for {0}")]
    UnknownCity(String),

    /// The forecast could not be read.
    #[error("failed to read forecast for {city} from {}: {source}", path.display())]
    Io {
        city: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The forecast is not a JSON document.
    #[error("forecast for {city} is not valid JSON: {source}")]
    Decode {
        city: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Trait for retrieving raw forecasts, consumed by the fetch stage.
pub trait ForecastSource: Send + Sync {
    /// Fetch the provider document for a city identifier.
    fn get_forecast(&self, city: &str) -> Result<RawForecastDocument, FetchError>;
}

/// Reads provider documents from `<dir>/<CITY>.json`.
#[derive(Debug, Clone)]
pub struct FixtureForecastSource {
    dir: PathBuf,
}

impl FixtureForecastSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the document for a city.
    #[must_use]
    pub fn path_for(&self, city: &str) -> PathBuf {
        self.dir.join(format!("{city}.json"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ForecastSource for FixtureForecastSource {
    fn get_forecast(&self, city: &str) -> Result<RawForecastDocument, FetchError> {
        let path = self.path_for(city);
        let content = std::fs::read_to_string(&path).map_err(|source| FetchError::Io {
            city: city.to_string(),
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| FetchError::Decode {
            city: city.to_string(),
            source,
        })
    }
}

/// In-memory source keyed by city identifier.
#[derive(Debug, Clone, Default)]
pub struct StaticForecastSource {
    documents: HashMap<String, RawForecastDocument>,
}

impl StaticForecastSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the document for a city.
    #[must_use]
    pub fn with(mut self, city: impl Into<String>, document: RawForecastDocument) -> Self {
        self.documents.insert(city.into(), document);
        self
    }
}

impl ForecastSource for StaticForecastSource {
    fn get_forecast(&self, city: &str) -> Result<RawForecastDocument, FetchError> {
        self.documents
            .get(city)
            .cloned()
            .ok_or_else(|| FetchError::UnknownCity(city.to_string()))
    }
}

impl FromIterator<(String, RawForecastDocument)> for StaticForecastSource {
    fn from_iter<I: IntoIterator<Item = (String, RawForecastDocument)>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}
