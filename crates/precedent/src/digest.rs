use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::alert::Alert;
use crate::keywords;

/// Options for summarizing an alert as keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestOptions {
  #[serde(default = "default_max_keywords")]
  pub max_keywords: usize,
}

fn default_max_keywords() -> usize {
  10
}

impl Default for DigestOptions {
  fn default() -> Self {
    Self { max_keywords: default_max_keywords() }
  }
}

/// A keyword and how often it appears in an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
  pub keyword: String,
  pub count: usize,
}

/// Distinct analysis and title keywords, most frequent first.
///
/// Equal counts keep the order in which the keywords first appeared.
pub fn keyword_counts(alert: &Alert) -> Vec<KeywordCount> {
  let mut tokens = keywords::analysis_keywords(alert);
  tokens.extend(keywords::title_keywords(alert));

  let mut index: HashMap<String, usize> = HashMap::new();
  let mut counts: Vec<KeywordCount> = Vec::new();

  for token in tokens {
    match index.get(&token) {
      Some(&slot) => counts[slot].count += 1,
      None => {
        index.insert(token.clone(), counts.len());
        counts.push(KeywordCount { keyword: token, count: 1 });
      }
    }
  }

  // stable sort keeps first-occurrence order among ties
  counts.sort_by(|a, b| b.count.cmp(&a.count));
  counts
}

/// The `max_keywords` most frequent keywords of an alert
pub fn top_keywords(alert: &Alert, max_keywords: usize) -> Vec<String> {
  keyword_counts(alert).into_iter().take(max_keywords).map(|k| k.keyword).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::alert::Analysis;

  #[test]
  fn test_top_keywords_orders_by_frequency() {
    let mut alert = Alert::new("a");
    alert.title = Some("Disk latency on storage array".to_string());
    alert.ai_summary = Some("storage latency spike, storage controller saturated".to_string());

    assert_eq!(
      top_keywords(&alert, 3),
      vec!["storage", "latency", "spike"]
    );
  }

  #[test]
  fn test_ties_keep_first_occurrence() {
    let mut alert = Alert::new("a");
    alert.analysis = Some(Analysis {
      summary: Some("zeta alpha mid".to_string()),
      ..Analysis::default()
    });

    assert_eq!(top_keywords(&alert, 10), vec!["zeta", "alpha", "mid"]);
  }

  #[test]
  fn test_top_keywords_respects_limit_and_is_distinct() {
    let mut alert = Alert::new("a");
    alert.title = Some("one two three four five six".to_string());
    alert.ai_summary = Some("three three four".to_string());

    let top = top_keywords(&alert, 4);
    assert_eq!(top.len(), 4);
    assert_eq!(top[0], "three");
    assert_eq!(top[1], "four");

    let counts = keyword_counts(&alert);
    assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
  }

  #[test]
  fn test_empty_alert_has_no_keywords() {
    assert!(top_keywords(&Alert::new("a"), 10).is_empty());
    assert!(top_keywords(&Alert::new("a"), 0).is_empty());
  }
}
