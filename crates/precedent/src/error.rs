use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrecedentError>;

#[derive(Error, Debug)]
pub enum PrecedentError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Invalid YAML: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("Weight '{name}' must be a non-negative number, got {value}")]
  InvalidWeight { name: String, value: f64 },

  #[error("Minimum similarity score must be within [0, 1], got {0}")]
  InvalidThreshold(f64),

  #[error("Alert '{0}' not found")]
  AlertNotFound(String),
}

impl PrecedentError {
  pub fn invalid_weight(name: impl Into<String>, value: f64) -> Self {
    Self::InvalidWeight { name: name.into(), value }
  }

  pub fn alert_not_found(id: impl Into<String>) -> Self {
    Self::AlertNotFound(id.into())
  }
}
