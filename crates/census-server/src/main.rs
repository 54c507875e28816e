//! `census` — serves user metrics over HTTP.
//!
//! Reads `census.toml` (or the path given with `--config`), builds a remote
//! user source and serves the JSON API under `/api`.
//!
//! # Usage
//!
//! ```
//! census --source-url http://localhost:3000/api/?results=100
//! census --summary
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use census_core::UserSource as _;
use census_server::{ServerConfig, app, summary_report};
use census_source::RemoteSource;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Census user metrics server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "census.toml")]
  config: PathBuf,

  /// Remote endpoint to fetch users from; overrides the config file.
  #[arg(long, env = "RANDOMUSER_API_URL")]
  source_url: Option<String>,

  /// Acquire once, print the metrics report as JSON and exit.
  #[arg(long)]
  summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so `--summary` output stays clean.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .context("failed to read configuration")?
    .with_source_url(cli.source_url);

  let source = RemoteSource::from_config(server_cfg.source_url.clone())
    .context("failed to build remote source")?;

  if cli.summary {
    let report = summary_report(&source).await;
    println!(
      "{}",
      serde_json::to_string_pretty(&report).context("failed to serialise report")?
    );
    return Ok(());
  }

  let address = server_cfg.address();
  tracing::info!(
    source_url = %source.source_url(),
    "Listening on http://{address}"
  );

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app(Arc::new(source)))
    .await
    .context("server error")?;

  Ok(())
}
