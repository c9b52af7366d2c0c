//! Composite similarity between two alerts
//!
//! Five independent dimensions are scored. A dimension only counts when both
//! alerts carry the data it needs; the composite is the weighted mean of the
//! dimensions that were actually scored.

use serde::{Deserialize, Serialize};

use crate::alert::Alert;
use crate::error::{PrecedentError, Result};
use crate::keywords;
use crate::similarity::{keyword_jaccard, weighted_similarity};

/// Partial credit for two alerts on different, named devices
pub const DIFFERENT_DEVICE_SCORE: f64 = 0.3;

/// Relative importance of each dimension. Need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
  /// Keyword overlap of the AI analysis and summary
  #[serde(default = "default_ai_analysis")]
  pub ai_analysis: f64,
  /// Category match
  #[serde(default = "default_category")]
  pub category: f64,
  /// Severity closeness
  #[serde(default = "default_severity")]
  pub severity: f64,
  /// Same originating device
  #[serde(default = "default_device")]
  pub device: f64,
  /// Keyword overlap of title and summary
  #[serde(default = "default_content")]
  pub content: f64,
}

fn default_ai_analysis() -> f64 {
  0.45
}
fn default_category() -> f64 {
  0.20
}
fn default_severity() -> f64 {
  0.10
}
fn default_device() -> f64 {
  0.15
}
fn default_content() -> f64 {
  0.10
}

impl Default for Weights {
  fn default() -> Self {
    Self {
      ai_analysis: default_ai_analysis(),
      category: default_category(),
      severity: default_severity(),
      device: default_device(),
      content: default_content(),
    }
  }
}

impl Weights {
  /// Reject negative or non-finite weights
  pub fn validate(&self) -> Result<()> {
    let named = [
      ("ai_analysis", self.ai_analysis),
      ("category", self.category),
      ("severity", self.severity),
      ("device", self.device),
      ("content", self.content),
    ];

    for (name, value) in named {
      if !value.is_finite() || value < 0.0 {
        return Err(PrecedentError::invalid_weight(name, value));
      }
    }
    Ok(())
  }
}

/// Outcome of one dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SubScore {
  /// One side lacked the data for this dimension
  Skipped,
  Scored(f64),
}

impl SubScore {
  pub fn value(&self) -> Option<f64> {
    match self {
      SubScore::Skipped => None,
      SubScore::Scored(v) => Some(*v),
    }
  }

  pub fn is_scored(&self) -> bool {
    matches!(self, SubScore::Scored(_))
  }
}

/// Every dimension of one comparison, plus the combined score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
  pub analysis: SubScore,
  pub category: SubScore,
  pub severity: SubScore,
  pub device: SubScore,
  pub content: SubScore,
  pub score: f64,
}

impl ScoreBreakdown {
  /// Number of dimensions that contributed
  pub fn coverage(&self) -> usize {
    self.dimensions().iter().filter(|(_, s)| s.is_scored()).count()
  }

  /// Dimensions in a fixed display order
  pub fn dimensions(&self) -> [(&'static str, SubScore); 5] {
    [
      ("analysis", self.analysis),
      ("category", self.category),
      ("severity", self.severity),
      ("device", self.device),
      ("content", self.content),
    ]
  }
}

pub fn analysis_score(target: &Alert, candidate: &Alert) -> SubScore {
  let a = keywords::analysis_keywords(target);
  let b = keywords::analysis_keywords(candidate);
  if a.is_empty() || b.is_empty() {
    return SubScore::Skipped;
  }
  SubScore::Scored(weighted_similarity(&a, &b))
}

pub fn category_score(target: &Alert, candidate: &Alert) -> SubScore {
  match (target.category(), candidate.category()) {
    (Some(a), Some(b)) => SubScore::Scored(if a.to_lowercase() == b.to_lowercase() { 1.0 } else { 0.0 }),
    _ => SubScore::Skipped,
  }
}

pub fn severity_score(target: &Alert, candidate: &Alert) -> SubScore {
  match (target.severity(), candidate.severity()) {
    (Some(a), Some(b)) => SubScore::Scored(a.closeness(b)),
    _ => SubScore::Skipped,
  }
}

pub fn device_score(target: &Alert, candidate: &Alert) -> SubScore {
  match (target.device_name(), candidate.device_name()) {
    (Some(a), Some(b)) => SubScore::Scored(if a == b { 1.0 } else { DIFFERENT_DEVICE_SCORE }),
    _ => SubScore::Skipped,
  }
}

pub fn content_score(target: &Alert, candidate: &Alert) -> SubScore {
  let a = keywords::content_keywords(target);
  let b = keywords::content_keywords(candidate);
  if a.is_empty() || b.is_empty() {
    return SubScore::Skipped;
  }
  SubScore::Scored(keyword_jaccard(&a, &b))
}

/// Weighted mean of the scored dimensions, 0 when nothing was scored
pub fn combine(parts: &[(SubScore, f64)]) -> f64 {
  let (total_score, total_weight) = parts
    .iter()
    .filter_map(|(sub, weight)| sub.value().map(|v| (v * weight, *weight)))
    .fold((0.0, 0.0), |(score, weight), (s, w)| (score + s, weight + w));

  if total_weight > 0.0 {
    total_score / total_weight
  } else {
    0.0
  }
}

/// Score every dimension of `candidate` against `target`
pub fn breakdown(target: &Alert, candidate: &Alert, weights: &Weights) -> ScoreBreakdown {
  let analysis = analysis_score(target, candidate);
  let category = category_score(target, candidate);
  let severity = severity_score(target, candidate);
  let device = device_score(target, candidate);
  let content = content_score(target, candidate);

  let score = combine(&[
    (analysis, weights.ai_analysis),
    (category, weights.category),
    (severity, weights.severity),
    (device, weights.device),
    (content, weights.content),
  ]);

  ScoreBreakdown { analysis, category, severity, device, content, score }
}

/// Composite similarity in [0, 1]
pub fn similarity(target: &Alert, candidate: &Alert, weights: &Weights) -> f64 {
  breakdown(target, candidate, weights).score
}
