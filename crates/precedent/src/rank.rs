use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use crate::alert::Alert;
use crate::score::{self, Weights};

/// Options for ranking historical alerts against a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FindOptions {
  /// Candidates scoring below this are dropped
  #[serde(default = "default_min_similarity_score")]
  pub min_similarity_score: f64,
  /// Maximum number of precedents returned
  #[serde(default = "default_max_results")]
  pub max_results: usize,
  /// Drop candidates sharing the target's identifier
  #[serde(default = "default_exclude_current_alert")]
  pub exclude_current_alert: bool,
}

fn default_min_similarity_score() -> f64 {
  0.25
}
fn default_max_results() -> usize {
  5
}
fn default_exclude_current_alert() -> bool {
  true
}

impl Default for FindOptions {
  fn default() -> Self {
    Self {
      min_similarity_score: default_min_similarity_score(),
      max_results: default_max_results(),
      exclude_current_alert: default_exclude_current_alert(),
    }
  }
}

/// A historical alert with its similarity to the target
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarAlert<'a> {
  #[serde(flatten)]
  pub alert: &'a Alert,
  pub similarity_score: f64,
}

impl SimilarAlert<'_> {
  /// Score as a whole percentage for display
  pub fn percent(&self) -> u32 {
    (self.similarity_score * 100.0).round() as u32
  }
}

/// Highest score first, then ascending identifier
fn by_score_then_id(a: &SimilarAlert, b: &SimilarAlert) -> Ordering {
  b.similarity_score
    .partial_cmp(&a.similarity_score)
    .unwrap_or(Ordering::Equal)
    .then_with(|| a.alert.id.cmp(&b.alert.id))
}

/// Rank resolved and dismissed alerts by similarity to `target`
pub fn find_similar<'a>(
  target: &Alert,
  candidates: &'a [Alert],
  weights: &Weights,
  options: &FindOptions,
) -> Vec<SimilarAlert<'a>> {
  let mut results: Vec<SimilarAlert<'a>> = candidates
    .iter()
    .filter(|candidate| candidate.status.is_historical())
    .filter(|candidate| !(options.exclude_current_alert && candidate.id == target.id))
    .map(|candidate| SimilarAlert {
      alert: candidate,
      similarity_score: score::similarity(target, candidate, weights),
    })
    .filter(|result| result.similarity_score >= options.min_similarity_score)
    .collect();

  results.sort_by(by_score_then_id);
  results.truncate(options.max_results);

  debug!(
    alert = %target.id,
    candidates = candidates.len(),
    matched = results.len(),
    "ranked similar alerts"
  );

  results
}
