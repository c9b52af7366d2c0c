//! Configuration management for precedent
//!
//! Handles loading, validating, and saving scoring weights, ranking
//! options and digest options.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::digest::DigestOptions;
use crate::error::{PrecedentError, Result};
use crate::rank::FindOptions;
use crate::score::Weights;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "PRECEDENT_CONFIG";

/// Config files looked up in the working directory, in order
const LOCAL_CONFIG_PATHS: &[&str] = &[".precedent.json", "precedent.json", ".precedent.yaml"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
  /// Weight of each similarity dimension
  #[serde(default)]
  pub weights: Weights,
  /// Filtering and truncation of ranked results
  #[serde(default)]
  pub ranking: FindOptions,
  /// Keyword digest limits
  #[serde(default)]
  pub digest: DigestOptions,
}

impl Config {
  /// Load configuration from a JSON or YAML file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let config: Config = if is_yaml(path) {
      serde_yaml::from_str(&content)?
    } else {
      serde_json::from_str(&content)?
    };

    config.validate()?;
    Ok(config)
  }

  /// Load configuration from the environment, working directory, home directory or defaults
  pub fn load() -> Result<Self> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
      info!(path = %path, "loading config from {}", CONFIG_ENV_VAR);
      return Self::load_from_file(path);
    }

    for path in LOCAL_CONFIG_PATHS {
      if Path::new(path).exists() {
        info!(path = %path, "loading local config");
        return Self::load_from_file(path);
      }
    }

    if let Some(path) = user_config_path().filter(|p| p.exists()) {
      info!(path = %path.display(), "loading user config");
      return Self::load_from_file(path);
    }

    // No config file found, use defaults
    Ok(Config::default())
  }

  /// Save configuration to a file as pretty JSON
  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    let content = serde_json::to_string_pretty(self)?;
    std::fs::write(path, content)?;
    Ok(())
  }

  pub fn validate(&self) -> Result<()> {
    self.weights.validate()?;

    let threshold = self.ranking.min_similarity_score;
    if !(0.0..=1.0).contains(&threshold) {
      return Err(PrecedentError::InvalidThreshold(threshold));
    }
    Ok(())
  }
}

/// `~/.precedent/config.json`, if a home directory is known
pub fn user_config_path() -> Option<PathBuf> {
  dirs::home_dir().map(|home| home.join(".precedent").join("config.json"))
}

fn is_yaml(path: &Path) -> bool {
  matches!(path.extension().and_then(|e| e.to_str()), Some("yaml") | Some("yml"))
}
