use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use tracing::debug;

use precedent::digest;
use precedent::score::{self, ScoreBreakdown, SubScore};
use precedent::store;
use precedent::{find_similar, Config, FindOptions, SimilarAlert};

/// Overrides for ranking options given on the command line
#[derive(Debug, Default, Clone, Copy)]
pub struct RankOverrides {
  pub min_score: Option<f64>,
  pub max_results: Option<usize>,
  pub include_self: bool,
}

impl RankOverrides {
  fn apply(&self, mut options: FindOptions) -> FindOptions {
    if let Some(min_score) = self.min_score {
      options.min_similarity_score = min_score;
    }
    if let Some(max_results) = self.max_results {
      options.max_results = max_results;
    }
    if self.include_self {
      options.exclude_current_alert = false;
    }
    options
  }
}

/// Show resolved or dismissed alerts similar to the given alert
pub fn similar_alerts(
  file: &Path,
  id: &str,
  config: &Config,
  overrides: RankOverrides,
  json: bool,
) -> Result<()> {
  let alerts = load(file)?;
  let target = store::find_alert(&alerts, id)?;
  let options = overrides.apply(config.ranking);
  debug!(?options, "ranking options");

  let results = find_similar(target, &alerts, &config.weights, &options);

  if json {
    println!("{}", serde_json::to_string_pretty(&results)?);
    return Ok(());
  }

  if results.is_empty() {
    println!("No similar alerts found for: {}", id.yellow());
  } else {
    println!("Similar alerts for {} ({}):", id.cyan().bold(), target.display_title());
    println!();
    for result in &results {
      display_similar(result);
    }
  }
  Ok(())
}

/// Show how two alerts score against each other, dimension by dimension
pub fn score_alerts(file: &Path, target_id: &str, candidate_id: &str, config: &Config, json: bool) -> Result<()> {
  let alerts = load(file)?;
  let target = store::find_alert(&alerts, target_id)?;
  let candidate = store::find_alert(&alerts, candidate_id)?;

  let breakdown = score::breakdown(target, candidate, &config.weights);

  if json {
    println!("{}", serde_json::to_string_pretty(&breakdown)?);
  } else {
    display_breakdown(target_id, candidate_id, &breakdown);
  }
  Ok(())
}

/// Show the most frequent keywords of an alert
pub fn alert_keywords(file: &Path, id: &str, max: Option<usize>, config: &Config, json: bool) -> Result<()> {
  let alerts = load(file)?;
  let alert = store::find_alert(&alerts, id)?;
  let max = max.unwrap_or(config.digest.max_keywords);

  let counts: Vec<_> = digest::keyword_counts(alert).into_iter().take(max).collect();

  if json {
    println!("{}", serde_json::to_string_pretty(&counts)?);
  } else if counts.is_empty() {
    println!("No keywords found for: {}", id.yellow());
  } else {
    for entry in counts {
      println!("  {:<24} {}", entry.keyword.cyan(), entry.count);
    }
  }
  Ok(())
}

fn load(file: &Path) -> Result<Vec<precedent::Alert>> {
  store::load_alerts(file).with_context(|| format!("Failed to load alerts from {}", file.display()))
}

fn display_similar(result: &SimilarAlert) {
  let alert = result.alert;
  let percent = format!("{}%", result.percent());

  println!(
    "=== {} {} [{}] ===",
    alert.id.blue().bold(),
    alert.display_title().yellow().bold(),
    percent.green()
  );

  let mut details = vec![format!("status: {}", alert.status)];
  if let Some(category) = alert.category() {
    details.push(format!("category: {category}"));
  }
  if let Some(severity) = alert.severity() {
    details.push(format!("severity: {severity}"));
  }
  if let Some(device) = alert.device_name() {
    details.push(format!("device: {device}"));
  }
  if let Some(created_at) = alert.created_at {
    details.push(format!("created: {}", created_at.format("%Y-%m-%d %H:%M")));
  }
  println!("{}", details.join(" | ").dimmed());

  if let Some(summary) = &alert.ai_summary {
    println!("{summary}");
  }
  println!();
}

fn display_breakdown(target_id: &str, candidate_id: &str, breakdown: &ScoreBreakdown) {
  println!("{} vs {}", target_id.cyan().bold(), candidate_id.cyan().bold());

  for (name, sub) in breakdown.dimensions() {
    let value = match sub {
      SubScore::Scored(v) => format!("{v:.3}"),
      SubScore::Skipped => "skipped".dimmed().to_string(),
    };
    println!("  {name:<10} {value}");
  }

  println!(
    "  {:<10} {} ({} of 5 dimensions)",
    "score".bold(),
    format!("{:.3}", breakdown.score).green().bold(),
    breakdown.coverage()
  );
}
