use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::alert::Alert;
use crate::error::{PrecedentError, Result};

/// Alert list wrapped the way the alerts API returns it
#[derive(Deserialize)]
struct Envelope {
  alerts: Vec<Alert>,
}

/// Load alerts from a JSON or YAML file
pub fn load_alerts<P: AsRef<Path>>(path: P) -> Result<Vec<Alert>> {
  let path = path.as_ref();
  let content = fs::read_to_string(path)?;

  let alerts: Vec<Alert> = match path.extension().and_then(|e| e.to_str()) {
    Some("yaml") | Some("yml") => parse_yaml(&content)?,
    _ => parse_json(&content)?,
  };

  debug!(path = %path.display(), count = alerts.len(), "loaded alerts");
  Ok(alerts)
}

/// Parse a JSON array of alerts or an `{ "alerts": [...] }` envelope
pub fn parse_json(content: &str) -> Result<Vec<Alert>> {
  if content.trim_start().starts_with('[') {
    Ok(serde_json::from_str(content)?)
  } else {
    let envelope: Envelope = serde_json::from_str(content)?;
    Ok(envelope.alerts)
  }
}

/// Parse a YAML sequence of alerts or a mapping with an `alerts` key
pub fn parse_yaml(content: &str) -> Result<Vec<Alert>> {
  let value: serde_yaml::Value = serde_yaml::from_str(content)?;
  if value.is_sequence() {
    Ok(serde_yaml::from_value(value)?)
  } else {
    let envelope: Envelope = serde_yaml::from_value(value)?;
    Ok(envelope.alerts)
  }
}

/// Look up an alert by identifier
pub fn find_alert<'a>(alerts: &'a [Alert], id: &str) -> Result<&'a Alert> {
  alerts.iter().find(|alert| alert.id == id).ok_or_else(|| PrecedentError::alert_not_found(id))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::alert::AlertStatus;
  use tempfile::TempDir;

  #[test]
  fn test_parse_json_list() {
    let alerts = parse_json(r#"[{ "id": "a" }, { "id": "b", "status": "resolved" }]"#).unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[1].status, AlertStatus::Resolved);
  }

  #[test]
  fn test_parse_json_envelope() {
    let alerts = parse_json(r#"{ "alerts": [{ "id": "a" }] }"#).unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, "a");
  }

  #[test]
  fn test_parse_json_rejects_garbage() {
    assert!(matches!(parse_json("{ not json"), Err(PrecedentError::Json(_))));
  }

  #[test]
  fn test_unrecognized_status_does_not_fail_the_file() {
    let alerts = parse_json(r#"[{ "id": "a", "status": "closed" }, { "id": "b", "status": "Resolved" }]"#).unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].status, AlertStatus::Unknown);
    assert_eq!(alerts[1].status, AlertStatus::Resolved);
  }

  #[test]
  fn test_parse_errors_name_the_problem() {
    let err = parse_json(r#"[{ "title": "no id" }]"#).unwrap_err().to_string();
    assert!(err.contains("missing field `id`"), "{err}");
    assert!(err.contains("line 1"), "{err}");

    let err = parse_json(r#"{ "items": [] }"#).unwrap_err().to_string();
    assert!(err.contains("missing field `alerts`"), "{err}");

    let err = parse_yaml("- title: no id\n").unwrap_err().to_string();
    assert!(err.contains("missing field `id`"), "{err}");
  }

  #[test]
  fn test_parse_yaml_list() {
    let yaml = "- id: a\n  category: network\n- id: b\n  status: dismissed\n";
    let alerts = parse_yaml(yaml).unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].category.as_deref(), Some("network"));
    assert_eq!(alerts[1].status, AlertStatus::Dismissed);
  }

  #[test]
  fn test_load_alerts_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    let json_path = temp_dir.path().join("alerts.json");
    let yaml_path = temp_dir.path().join("alerts.yml");

    fs::write(&json_path, r#"[{ "id": "j" }]"#).unwrap();
    fs::write(&yaml_path, "alerts:\n  - id: y\n").unwrap();

    assert_eq!(load_alerts(&json_path).unwrap()[0].id, "j");
    assert_eq!(load_alerts(&yaml_path).unwrap()[0].id, "y");
  }

  #[test]
  fn test_find_alert() {
    let alerts = vec![Alert::new("a"), Alert::new("b")];
    assert_eq!(find_alert(&alerts, "b").unwrap().id, "b");
    assert!(matches!(find_alert(&alerts, "z"), Err(PrecedentError::AlertNotFound(_))));
  }
}
