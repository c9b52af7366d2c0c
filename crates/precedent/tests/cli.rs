use assert_cmd::prelude::*;
use assert_fs::prelude::*;

use predicates::prelude::*;
use predicates::str::contains;
use serial_test::serial;
use std::process::Command;

const ALERTS: &str = r#"[
  {
    "id": "live-1",
    "title": "Uplink flapping",
    "severity": "high",
    "category": "network",
    "status": "active",
    "aiSummary": "interface flapping on uplink",
    "device": { "name": "edge-rtr-01" }
  },
  {
    "id": "old-1",
    "title": "Uplink unstable",
    "severity": "major",
    "category": "network",
    "status": "resolved",
    "aiSummary": "uplink interface flapping detected",
    "device": { "name": "edge-rtr-01" }
  },
  {
    "id": "old-2",
    "title": "Backup overran",
    "severity": "low",
    "category": "storage",
    "status": "dismissed",
    "aiSummary": "nightly backup exceeded window"
  },
  {
    "id": "live-2",
    "title": "Uplink flapping again",
    "category": "network",
    "status": "investigating",
    "aiSummary": "uplink interface flapping detected"
  }
]"#;

/// Helper to create a Command for the `precedent` binary running inside `dir`.
fn precedent_cmd(dir: &assert_fs::TempDir) -> Command {
  let mut cmd = Command::cargo_bin("precedent").expect("binary exists");
  cmd.current_dir(dir.path());
  cmd.env_remove("PRECEDENT_CONFIG");
  cmd.env_remove("RUST_LOG");
  cmd.env("HOME", dir.path());
  cmd
}

fn workspace() -> assert_fs::TempDir {
  let temp = assert_fs::TempDir::new().unwrap();
  temp.child("alerts.json").write_str(ALERTS).unwrap();
  temp
}

#[test]
fn test_similar_lists_resolved_precedent() {
  let temp = workspace();

  precedent_cmd(&temp)
    .args(["similar", "alerts.json", "live-1"])
    .assert()
    .success()
    .stdout(contains("old-1").and(contains("Uplink unstable")))
    .stdout(contains("live-2").not())
    .stdout(contains("old-2").not());

  temp.close().unwrap();
}

#[test]
fn test_similar_json_output() {
  let temp = workspace();

  let output = precedent_cmd(&temp).args(["similar", "alerts.json", "live-1", "--json"]).output().unwrap();
  assert!(output.status.success());

  let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let results = results.as_array().unwrap();
  assert_eq!(results.len(), 1);
  assert_eq!(results[0]["id"], "old-1");
  assert!(results[0]["similarityScore"].as_f64().unwrap() >= 0.25);

  temp.close().unwrap();
}

#[test]
fn test_similar_min_score_filters_everything() {
  let temp = workspace();

  precedent_cmd(&temp)
    .args(["similar", "alerts.json", "live-1", "--min-score", "1.0"])
    .assert()
    .success()
    .stdout(contains("No similar alerts found"));

  temp.close().unwrap();
}

#[test]
fn test_similar_unknown_alert_fails() {
  let temp = workspace();

  precedent_cmd(&temp)
    .args(["similar", "alerts.json", "missing"])
    .assert()
    .failure()
    .stderr(contains("Alert 'missing' not found"));

  temp.close().unwrap();
}

#[test]
fn test_missing_alert_file_fails() {
  let temp = assert_fs::TempDir::new().unwrap();

  precedent_cmd(&temp)
    .args(["similar", "nope.json", "live-1"])
    .assert()
    .failure()
    .stderr(contains("Failed to load alerts"));

  temp.close().unwrap();
}

#[test]
fn test_score_shows_breakdown() {
  let temp = workspace();

  precedent_cmd(&temp)
    .args(["score", "alerts.json", "live-1", "old-2"])
    .assert()
    .success()
    .stdout(contains("category").and(contains("device")).and(contains("skipped")));

  temp.close().unwrap();
}

#[test]
fn test_score_json_breakdown() {
  let temp = workspace();

  let output = precedent_cmd(&temp).args(["score", "alerts.json", "live-1", "old-1", "--json"]).output().unwrap();
  assert!(output.status.success());

  let breakdown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(breakdown["device"]["kind"], "scored");
  assert_eq!(breakdown["device"]["value"], 1.0);
  assert_eq!(breakdown["category"]["value"], 1.0);

  temp.close().unwrap();
}

#[test]
fn test_keywords_lists_most_frequent_first() {
  let temp = workspace();

  let output = precedent_cmd(&temp)
    .args(["keywords", "alerts.json", "live-1", "--json", "-n", "2"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let keywords: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let keywords = keywords.as_array().unwrap();
  assert_eq!(keywords.len(), 2);
  assert_eq!(keywords[0]["keyword"], "flapping");
  assert_eq!(keywords[0]["count"], 2);
  assert_eq!(keywords[1]["keyword"], "uplink");

  temp.close().unwrap();
}

#[test]
fn test_local_config_file_is_used() {
  let temp = workspace();
  temp.child(".precedent.json").write_str(r#"{ "ranking": { "min_similarity_score": 0.99 } }"#).unwrap();

  precedent_cmd(&temp)
    .args(["similar", "alerts.json", "live-1"])
    .assert()
    .success()
    .stdout(contains("No similar alerts found"));

  temp.close().unwrap();
}

#[test]
fn test_invalid_config_fails() {
  let temp = workspace();
  temp.child("bad.json").write_str(r#"{ "weights": { "device": -2 } }"#).unwrap();

  precedent_cmd(&temp)
    .args(["--config", "bad.json", "similar", "alerts.json", "live-1"])
    .assert()
    .failure()
    .stderr(contains("must be a non-negative number"));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_config_from_environment() {
  let temp = workspace();
  temp.child("env.yaml").write_str("ranking:\n  exclude_current_alert: false\n  min_similarity_score: 0.0\n").unwrap();

  precedent_cmd(&temp)
    .env("PRECEDENT_CONFIG", temp.child("env.yaml").path())
    .args(["similar", "alerts.json", "old-1", "--json"])
    .assert()
    .success()
    .stdout(contains("\"id\": \"old-1\""));

  temp.close().unwrap();
}
