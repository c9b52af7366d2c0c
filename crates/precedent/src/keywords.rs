use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::alert::Alert;

/// Tokens at or below this many characters never count as keywords
const MAX_DROPPED_LEN: usize = 2;

/// Common English function words that carry no signal for alert matching
const STOP_WORDS: &[&str] = &[
  // Articles and determiners
  "the", "a", "an", "this", "that", "these", "those", // Conjunctions
  "and", "or", "but", "nor", "not", // Prepositions
  "in", "on", "at", "to", "for", "of", "with", "by", "from", "into", "over", "about", // Common verbs
  "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
  "will", "would", "could", "should", "may", "might", "can", // Pronouns
  "it", "its", "they", "them", "their", "there", "which",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.iter().copied().collect());

static NON_WORD: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[^\w\s-]").expect("keyword separator pattern is valid"));

/// Check whether a lowercase token is a stop word
pub fn is_stop_word(token: &str) -> bool {
  STOP_WORD_SET.contains(token)
}

/// Extract keywords from free text.
///
/// Punctuation other than hyphens becomes whitespace, tokens of two characters
/// or fewer and stop words are dropped. Order of occurrence is kept and
/// repeats are preserved so callers can weight by frequency.
pub fn extract_keywords(text: Option<&str>) -> Vec<String> {
  let Some(text) = text else {
    return Vec::new();
  };

  let lowered = text.to_lowercase();
  let cleaned = NON_WORD.replace_all(&lowered, " ");

  cleaned
    .split_whitespace()
    .filter(|word| word.chars().count() > MAX_DROPPED_LEN && !is_stop_word(word))
    .map(|word| word.trim().to_string())
    .filter(|word| !word.is_empty())
    .collect()
}

/// Keywords from the structured analysis and the AI summary of an alert
pub fn analysis_keywords(alert: &Alert) -> Vec<String> {
  let mut keywords = Vec::new();

  if let Some(analysis) = &alert.analysis {
    keywords.extend(extract_keywords(analysis.summary.as_deref()));
    for cause in &analysis.root_causes {
      keywords.extend(extract_keywords(Some(cause)));
    }
    keywords.extend(extract_keywords(analysis.business_impact.as_deref()));
    for action in &analysis.recommended_actions {
      keywords.extend(extract_keywords(Some(action)));
    }
  }

  keywords.extend(extract_keywords(alert.ai_summary.as_deref()));
  keywords
}

/// Keywords from the alert title only
pub fn title_keywords(alert: &Alert) -> Vec<String> {
  extract_keywords(alert.title.as_deref())
}

/// Keywords from the title and the AI summary, used for content overlap
pub fn content_keywords(alert: &Alert) -> Vec<String> {
  let mut keywords = title_keywords(alert);
  keywords.extend(extract_keywords(alert.ai_summary.as_deref()));
  keywords
}
