use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tripsmith_cmd() -> Command {
    Command::cargo_bin("tripsmith").expect("Failed to find tripsmith binary")
}

#[test]
fn test_cli_help() {
    tripsmith_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip itinerary wizard"));
}

#[test]
fn test_cli_schema_prints_config_schema() {
    tripsmith_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_trip_styles"))
        .stdout(predicate::str::contains("claude_cli"));
}

#[test]
fn test_cli_generate_dry_run_prints_prompt() {
    tripsmith_cmd()
        .args([
            "generate",
            "--destination",
            "Paris, France",
            "--start",
            "2025-06-01",
            "--end",
            "2025-06-03",
            "--styles",
            "culture",
            "--budget",
            "moderate",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3-day"))
        .stdout(predicate::str::contains("Paris, France"))
        .stdout(predicate::str::contains("culture"))
        .stdout(predicate::str::contains("moderate"));
}

#[test]
fn test_cli_generate_rejects_reversed_dates() {
    tripsmith_cmd()
        .args([
            "generate",
            "--destination",
            "Paris, France",
            "--start",
            "2025-06-05",
            "--end",
            "2025-06-01",
            "--styles",
            "culture",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("before start date"));
}

#[test]
fn test_cli_generate_requires_styles() {
    tripsmith_cmd()
        .args([
            "generate",
            "--destination",
            "Paris, France",
            "--start",
            "2025-06-01",
            "--end",
            "2025-06-03",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one --styles"));
}

#[test]
fn test_cli_init_writes_config() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_path = temp_dir.path().join("tripsmith.yaml");

    tripsmith_cmd()
        .args(["init", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("provider"));
    assert!(content.contains("max_trip_styles"));
}

#[test]
fn test_cli_init_refuses_existing_config() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_path = temp_dir.path().join("tripsmith.yaml");
    std::fs::write(&config_path, "version: 1\n").unwrap();

    tripsmith_cmd()
        .args(["init", "--config", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
