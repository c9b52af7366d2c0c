use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::severity::Severity;

/// Lifecycle state of an alert
///
/// Parsed case-insensitively. States this tool does not know about become
/// `Unknown`, which is never treated as historical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AlertStatus {
  #[default]
  Active,
  Acknowledged,
  Investigating,
  Resolved,
  Dismissed,
  Unknown,
}

impl From<String> for AlertStatus {
  fn from(raw: String) -> Self {
    match raw.trim().to_lowercase().as_str() {
      "active" => AlertStatus::Active,
      "acknowledged" => AlertStatus::Acknowledged,
      "investigating" => AlertStatus::Investigating,
      "resolved" => AlertStatus::Resolved,
      "dismissed" => AlertStatus::Dismissed,
      _ => AlertStatus::Unknown,
    }
  }
}

impl AlertStatus {
  /// Closed alerts are the only ones worth offering as precedent
  pub fn is_historical(&self) -> bool {
    matches!(self, AlertStatus::Resolved | AlertStatus::Dismissed)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      AlertStatus::Active => "active",
      AlertStatus::Acknowledged => "acknowledged",
      AlertStatus::Investigating => "investigating",
      AlertStatus::Resolved => "resolved",
      AlertStatus::Dismissed => "dismissed",
      AlertStatus::Unknown => "unknown",
    }
  }
}

impl fmt::Display for AlertStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Structured AI breakdown attached to an alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub root_causes: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub business_impact: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub recommended_actions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
  pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub severity: Option<Severity>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(default)]
  pub status: AlertStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ai_summary: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub analysis: Option<Analysis>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub device: Option<Device>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
}

impl Alert {
  /// Create an active alert with nothing but an identifier
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into(), ..Default::default() }
  }

  /// Category, if present and not blank
  pub fn category(&self) -> Option<&str> {
    self.category.as_deref().filter(|c| !c.is_empty())
  }

  /// Severity, if present and not a blank string
  pub fn severity(&self) -> Option<&Severity> {
    self.severity.as_ref().filter(|s| !matches!(s, Severity::Other(raw) if raw.trim().is_empty()))
  }

  /// Device name, if a device is attached and named
  pub fn device_name(&self) -> Option<&str> {
    self.device.as_ref().map(|d| d.name.as_str()).filter(|n| !n.is_empty())
  }

  /// Title for display, falling back to the identifier
  pub fn display_title(&self) -> &str {
    self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(&self.id)
  }
}
