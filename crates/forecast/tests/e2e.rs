//! End-to-end CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn forecast() -> Command {
    let mut cmd = Command::cargo_bin("forecast").expect("binary not found");
    for var in [
        "FORECAST_DATA_DIR",
        "FORECAST_OUTPUT",
        "FORECAST_IO_WORKERS",
        "FORECAST_CPU_WORKERS",
        "FORECAST_ON_PARSE_ERROR",
        "FORECAST_DETAILS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn sample_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// Copy the sample documents so a test can damage one of them.
fn copy_sample_data(dir: &Path) -> PathBuf {
    let target = dir.join("data");
    std::fs::create_dir_all(&target).unwrap();
    for entry in std::fs::read_dir(sample_data()).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), target.join(entry.file_name())).unwrap();
    }
    target
}

fn read_result(path: &Path) -> Vec<Value> {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn help_flag() {
    forecast()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cities"));
}

#[test]
fn version_flag() {
    forecast()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("forecast"));
}

#[test]
fn reports_best_cities_and_writes_result() {
    let dir = TempDir::new().unwrap();
    forecast()
        .current_dir(dir.path())
        .env("FORECAST_DATA_DIR", sample_data())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Most favorable city(ies) for a trip: Abu Dhabi, Cairo",
        ));

    let result = read_result(&dir.path().join("result.json"));
    assert_eq!(result.len(), 15);
    assert_eq!(result[0]["city"], "Abu Dhabi");
    assert_eq!(result[0]["rating"], 1);
    assert_eq!(result[14]["rating"], 15);
    assert!(result[0]["days"][3]["weather"]["average_temp"].is_null());
}

#[test]
fn report_is_a_single_line() {
    let dir = TempDir::new().unwrap();
    let output = forecast()
        .current_dir(dir.path())
        .env("FORECAST_DATA_DIR", sample_data())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn custom_output_and_workers() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("ranking.json");
    forecast()
        .arg("--data-dir")
        .arg(sample_data())
        .arg("--output")
        .arg(&out)
        .args(["--io-workers", "2", "--cpu-workers", "1", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Abu Dhabi, Cairo"));
    assert_eq!(read_result(&out).len(), 15);
}

#[test]
fn malformed_city_is_skipped_by_default() {
    let dir = TempDir::new().unwrap();
    let data = copy_sample_data(dir.path());
    std::fs::write(data.join("CAIRO.json"), r#"{"forecasts": []}"#).unwrap();

    forecast()
        .current_dir(dir.path())
        .env("FORECAST_DATA_DIR", &data)
        .assert()
        .success()
        .stdout(predicate::str::contains("trip: Abu Dhabi"))
        .stdout(predicate::str::contains("Cairo").not());

    let result = read_result(&dir.path().join("result.json"));
    assert_eq!(result.len(), 14);
}

#[test]
fn malformed_city_aborts_when_requested() {
    let dir = TempDir::new().unwrap();
    let data = copy_sample_data(dir.path());
    std::fs::write(data.join("ROMA.json"), r#"{"geo_object": {}, "forecasts": []}"#).unwrap();

    forecast()
        .current_dir(dir.path())
        .env("FORECAST_DATA_DIR", &data)
        .args(["--on-parse-error", "abort"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ROMA"));
    assert!(!dir.path().join("result.json").exists());
}

#[test]
fn missing_city_fails_fetch() {
    let dir = TempDir::new().unwrap();
    let data = copy_sample_data(dir.path());
    std::fs::remove_file(data.join("BERLIN.json")).unwrap();

    forecast()
        .current_dir(dir.path())
        .env("FORECAST_DATA_DIR", &data)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BERLIN"));
    assert!(!dir.path().join("result.json").exists());
}

#[test]
fn missing_data_dir_is_config_error() {
    let dir = TempDir::new().unwrap();
    forecast()
        .current_dir(dir.path())
        .env("FORECAST_DATA_DIR", dir.path().join("nowhere"))
        .assert()
        .code(5);
}

#[test]
fn unwritable_output_fails_persist() {
    let dir = TempDir::new().unwrap();
    forecast()
        .current_dir(dir.path())
        .env("FORECAST_DATA_DIR", sample_data())
        .env("FORECAST_OUTPUT", dir.path().join("missing").join("result.json"))
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_policy_is_rejected() {
    forecast()
        .args(["--on-parse-error", "retry"])
        .assert()
        .failure();
}
