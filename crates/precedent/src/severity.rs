//! Alert severity scale
//!
//! Severities arrive as free strings from different monitoring sources. Known
//! names map onto a shared ordinal scale; anything else is kept verbatim and
//! ranks at the bottom of the scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest ordinal on the severity scale
pub const MAX_LEVEL: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
  Critical,
  High,
  Major,
  Medium,
  Minor,
  Low,
  Info,
  Other(String),
}

impl Severity {
  /// Ordinal level, 0 for unrecognized severities
  pub fn level(&self) -> u8 {
    match self {
      Severity::Critical => 4,
      Severity::High | Severity::Major => 3,
      Severity::Medium => 2,
      Severity::Minor | Severity::Low => 1,
      Severity::Info | Severity::Other(_) => 0,
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      Severity::Critical => "critical",
      Severity::High => "high",
      Severity::Major => "major",
      Severity::Medium => "medium",
      Severity::Minor => "minor",
      Severity::Low => "low",
      Severity::Info => "info",
      Severity::Other(raw) => raw,
    }
  }

  /// Closeness of two severities: 1 when equal, 0.25 per level apart
  pub fn closeness(&self, other: &Severity) -> f64 {
    let diff = self.level().abs_diff(other.level()) as f64;
    (1.0 - diff / MAX_LEVEL as f64).max(0.0)
  }
}

impl From<&str> for Severity {
  fn from(raw: &str) -> Self {
    match raw.to_lowercase().as_str() {
      "critical" => Severity::Critical,
      "high" => Severity::High,
      "major" => Severity::Major,
      "medium" => Severity::Medium,
      "minor" => Severity::Minor,
      "low" => Severity::Low,
      "info" => Severity::Info,
      _ => Severity::Other(raw.to_string()),
    }
  }
}

impl From<String> for Severity {
  fn from(raw: String) -> Self {
    Severity::from(raw.as_str())
  }
}

impl From<Severity> for String {
  fn from(severity: Severity) -> Self {
    severity.as_str().to_string()
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
