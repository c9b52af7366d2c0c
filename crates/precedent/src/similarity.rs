use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Jaccard index of two sets, 0 when both are empty
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
  let union = a.union(b).count();
  if union == 0 {
    return 0.0;
  }

  let intersection = a.intersection(b).count();
  intersection as f64 / union as f64
}

/// Jaccard index over the distinct tokens of two keyword lists
pub fn keyword_jaccard(a: &[String], b: &[String]) -> f64 {
  let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
  let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
  jaccard(&set_a, &set_b)
}

/// Count occurrences of each token
pub fn frequencies(tokens: &[String]) -> HashMap<&str, usize> {
  let mut counts = HashMap::new();
  for token in tokens {
    *counts.entry(token.as_str()).or_insert(0) += 1;
  }
  counts
}

/// Multiset overlap of two token lists.
///
/// Every distinct token contributes `min(fa, fb)` to the overlap and
/// `max(fa, fb)` to the total, so identical multisets score 1 and disjoint
/// vocabularies score 0.
pub fn weighted_similarity(a: &[String], b: &[String]) -> f64 {
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }

  let freq_a = frequencies(a);
  let freq_b = frequencies(b);

  let mut score = 0usize;
  let mut max_score = 0usize;

  for (token, &count_a) in &freq_a {
    let count_b = freq_b.get(token).copied().unwrap_or(0);
    score += count_a.min(count_b);
    max_score += count_a.max(count_b);
  }

  for (token, &count_b) in &freq_b {
    if !freq_a.contains_key(token) {
      max_score += count_b;
    }
  }

  if max_score == 0 {
    0.0
  } else {
    score as f64 / max_score as f64
  }
}
