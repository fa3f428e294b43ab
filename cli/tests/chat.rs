//! # MindMate CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! Drives `mindmate chat` through stdin and checks the transcript and the
//! mood history it leaves behind.
//!

mod common;
use common::*;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_chat_logs_classified_messages() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("chat")
        .write_stdin("I feel very tired and lonely today.\nbreath\nbye\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Emotion Detected: SADNESS")
                .and(predicate::str::contains("Let's breathe together"))
                .and(predicate::str::contains("Take care.")),
        );

    let raw = std::fs::read_to_string(sandbox.log_path()).unwrap();
    let entries: Value = serde_json::from_str(&raw).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["text"], "I feel very tired and lonely today.");
    assert_eq!(entries[0]["emotion"], "sadness");
    assert_eq!(entries[0]["date"].as_str().unwrap().len(), "2024-01-01 10:00".len());
    assert!(raw.contains("\n    {\n        \"text\""));
}

#[test]
fn test_chat_appends_to_existing_history() {
    let sandbox = Sandbox::new();
    let log = sandbox.path().join("journal").join("moods.json");
    std::fs::create_dir_all(log.parent().unwrap()).unwrap();
    std::fs::write(
        &log,
        r#"[{"text": "earlier", "emotion": "joy", "date": "2024-01-01 10:00"}]"#,
    )
    .unwrap();

    sandbox
        .cmd()
        .args(["chat", "--quiet", "--log-file"])
        .arg(&log)
        .write_stdin("I am so angry\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion Detected: ANGER"));

    let entries: Value = serde_json::from_str(&std::fs::read_to_string(&log).unwrap()).unwrap();
    let emotions: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["emotion"].as_str().unwrap())
        .collect();
    assert_eq!(emotions, vec!["joy", "anger"]);
}

#[test]
fn test_chat_fails_on_corrupt_history() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.log_path(), "[{broken").unwrap();

    sandbox
        .cmd()
        .arg("chat")
        .write_stdin("I am sad\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid entry list"));

    assert_eq!(std::fs::read_to_string(sandbox.log_path()).unwrap(), "[{broken");
}
