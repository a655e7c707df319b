//! Result stores.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Serialize;

use forecast_core::model::RankedCityStats;

use crate::interfaces::ResultStore;

/// Default artifact file name.
pub const RESULT_FILENAME: &str = "result.json";

/// Writes the ranking as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a previously saved ranking back.
    pub fn load(&self) -> std::io::Result<Vec<RankedCityStats>> {
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(std::io::Error::other)
    }
}

impl ResultStore for JsonFileStore {
    fn save(&self, ranked: &[RankedCityStats]) -> std::io::Result<()> {
        let mut writer = BufWriter::new(std::fs::File::create(&self.path)?);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        ranked
            .serialize(&mut serializer)
            .map_err(std::io::Error::other)?;
        writer.flush()
    }
}

/// Keeps the last saved ranking in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<Vec<RankedCityStats>>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved ranking, if any.
    #[must_use]
    pub fn saved(&self) -> Option<Vec<RankedCityStats>> {
        self.saved.lock().clone()
    }

    /// Number of times `save` was called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl ResultStore for MemoryStore {
    fn save(&self, ranked: &[RankedCityStats]) -> std::io::Result<()> {
        *self.saved.lock() = Some(ranked.to_vec());
        *self.saves.lock() += 1;
        Ok(())
    }
}
