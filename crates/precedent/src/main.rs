use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use precedent::Config;

mod commands;

#[derive(Parser)]
#[command(name = "precedent")]
#[command(about = "Precedent - Alert Similarity\nFind resolved alerts that look like the one you are triaging")]
#[command(version)]
struct Cli {
  /// Configuration file (JSON or YAML)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Alert file and the alert of interest
#[derive(Args)]
struct AlertRef {
  /// JSON or YAML file containing alerts
  file: PathBuf,
  /// Identifier of the alert
  id: String,
}

#[derive(Subcommand)]
enum Commands {
  /// Rank resolved and dismissed alerts by similarity to an alert
  Similar {
    #[command(flatten)]
    alert: AlertRef,
    /// Minimum similarity score to report
    #[arg(short, long)]
    min_score: Option<f64>,
    /// Maximum number of results
    #[arg(short = 'n', long)]
    max_results: Option<usize>,
    /// Keep the alert itself among the candidates
    #[arg(long)]
    include_self: bool,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
  },
  /// Show the per-dimension similarity of two alerts
  Score {
    /// JSON or YAML file containing alerts
    file: PathBuf,
    /// Identifier of the alert being triaged
    target: String,
    /// Identifier of the alert to compare against
    candidate: String,
    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
  },
  /// List the most frequent keywords of an alert
  Keywords {
    #[command(flatten)]
    alert: AlertRef,
    /// Maximum number of keywords
    #[arg(short = 'n', long)]
    max: Option<usize>,
    /// Print keywords as JSON
    #[arg(long)]
    json: bool,
  },
}

fn init_logging(verbose: bool) {
  let default_filter = if verbose { "precedent=debug,warn" } else { "precedent=warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
  match path {
    Some(path) => Config::load_from_file(path)
      .with_context(|| format!("Failed to load config from {}", path.display())),
    None => Config::load().context("Failed to load config"),
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let config = load_config(cli.config.as_ref())?;

  match cli.command {
    Commands::Similar { alert, min_score, max_results, include_self, json } => {
      let overrides = commands::RankOverrides { min_score, max_results, include_self };
      commands::similar_alerts(&alert.file, &alert.id, &config, overrides, json)?;
    }
    Commands::Score { file, target, candidate, json } => {
      commands::score_alerts(&file, &target, &candidate, &config, json)?;
    }
    Commands::Keywords { alert, max, json } => {
      commands::alert_keywords(&alert.file, &alert.id, max, &config, json)?;
    }
  }

  Ok(())
}
