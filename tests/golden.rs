//! Golden file integration tests.
//!
//! Runs the pipeline over the sample provider documents in `data/` and
//! compares the ranking against tests/testdata/expected_result.json.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use forecast_core::constants::CITIES;
use forecast_core::model::RankedCityStats;
use forecast_core::source::FixtureForecastSource;
use forecast_orchestration::{
    run_pipeline, JsonFileStore, MemoryStore, NullPresenter, ParseFailurePolicy, PipelineOptions,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn workspace_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn load_expected() -> Vec<RankedCityStats> {
    let data = std::fs::read_to_string(workspace_path("tests/testdata/expected_result.json"))
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

fn cities() -> Vec<String> {
    CITIES.iter().map(|c| (*c).to_string()).collect()
}

fn options(workers: usize) -> PipelineOptions {
    PipelineOptions {
        io_workers: workers,
        cpu_workers: workers,
        on_parse_error: ParseFailurePolicy::Abort,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_ranking() {
    let source = FixtureForecastSource::new(workspace_path("data"));
    let store = Arc::new(MemoryStore::new());
    let outcome = run_pipeline(&source, &cities(), store.clone(), &NullPresenter, &options(4))
        .expect("pipeline failed on sample data");

    let expected = load_expected();
    assert_eq!(outcome.ranked.len(), CITIES.len());
    for (got, want) in outcome.ranked.iter().zip(&expected) {
        assert_eq!(got, want, "rating {} mismatch", want.rating);
    }
    assert_eq!(store.saved().unwrap(), expected);
}

#[test]
fn golden_best_cities() {
    let source = FixtureForecastSource::new(workspace_path("data"));
    let outcome = run_pipeline(
        &source,
        &cities(),
        Arc::new(MemoryStore::new()),
        &NullPresenter,
        &options(2),
    )
    .unwrap();
    assert_eq!(outcome.best.cities, vec!["Abu Dhabi", "Cairo"]);
}

#[test]
fn golden_artifact_matches_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("result.json");
    let source = FixtureForecastSource::new(workspace_path("data"));
    run_pipeline(
        &source,
        &cities(),
        Arc::new(JsonFileStore::new(&path)),
        &NullPresenter,
        &options(0),
    )
    .unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let expected: Value = serde_json::from_str(
        &std::fs::read_to_string(workspace_path("tests/testdata/expected_result.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(written, expected);
}
