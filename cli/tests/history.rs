//! # MindMate CLI History Integration Tests
//!
//! File: cli/tests/history.rs
//!
//! Covers `mindmate history` against missing, populated and project-configured
//! mood logs.
//!

mod common;
use common::*;
use predicates::prelude::*;

const SAMPLE: &str = r#"[
    {"text": "a", "emotion": "sadness", "date": "2024-01-01 10:00"},
    {"text": "b", "emotion": "joy", "date": "2024-01-01 11:00"},
    {"text": "c", "emotion": "sadness", "date": "2024-01-02 09:30"}
]"#;

#[test]
fn test_history_without_log() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mood history found."));
}

#[test]
fn test_history_counts_emotions() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.log_path(), SAMPLE).unwrap();

    sandbox
        .cmd()
        .arg("history")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Your Mood Summary:")
                .and(predicate::str::contains(" - sadness: 2 times"))
                .and(predicate::str::contains(" - joy: 1 times")),
        );
}

#[test]
fn test_history_json_output() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.log_path(), SAMPLE).unwrap();

    let output = sandbox.cmd().args(["history", "--json"]).output().unwrap();
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["counts"][0]["emotion"], "sadness");
    assert_eq!(summary["counts"][0]["count"], 2);
}

#[test]
fn test_history_reads_path_from_project_config() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.path().join("custom.json"), SAMPLE).unwrap();
    std::fs::write(
        sandbox.path().join(".mindmate.toml"),
        "[log]\npath = \"custom.json\"\n",
    )
    .unwrap();

    sandbox
        .cmd()
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains(" - sadness: 2 times"));
}

#[test]
fn test_history_empty_log_prints_header() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.log_path(), "[]").unwrap();

    sandbox
        .cmd()
        .arg("history")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Your Mood Summary:")
                .and(predicate::str::contains("No mood history found.").not()),
        );
}

#[test]
fn test_history_bar_width_scales_chart() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.log_path(), SAMPLE).unwrap();

    sandbox
        .cmd()
        .args(["history", "--bar-width", "4"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("sadness | ████ 2")
                .and(predicate::str::contains("joy     | ██ 1")),
        );
}

#[test]
fn test_history_bar_width_zero_hides_chart() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.log_path(), SAMPLE).unwrap();

    sandbox
        .cmd()
        .args(["history", "--bar-width", "0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(" - sadness: 2 times")
                .and(predicate::str::contains("█").not()),
        );
}

#[test]
fn test_history_rejects_oversized_bar_width() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.log_path(), SAMPLE).unwrap();

    sandbox
        .cmd()
        .args(["history", "--bar-width", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bar-width"));
}
