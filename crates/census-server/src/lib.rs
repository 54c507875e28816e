//! Application wiring for the `census` binary.
//!
//! Configuration loading, the top-level router and the one-shot summary mode
//! live here so they can be tested without starting a listener.

use std::{path::Path, sync::Arc};

use axum::Router;
use census_api::MetricsReport;
use census_core::UserSource;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `census.toml` and `CENSUS_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// Remote endpoint override; `None` means the built-in default.
  #[serde(default)]
  pub source_url: Option<String>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      source_url: None,
    }
  }
}

impl ServerConfig {
  /// Read `path` (optional, format inferred from its extension) layered under
  /// `CENSUS_*` environment variables.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("CENSUS"))
      .build()?
      .try_deserialize()
  }

  /// Replace the configured endpoint when `url` is given and non-empty.
  pub fn with_source_url(mut self, url: Option<String>) -> Self {
    if let Some(url) = url.filter(|u| !u.is_empty()) {
      self.source_url = Some(url);
    }
    self
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the JSON API under `/api`, with request tracing.
pub fn app<S>(source: Arc<S>) -> Router
where
  S: UserSource + 'static,
{
  Router::new()
    .nest("/api", census_api::api_router(source))
    .layer(TraceLayer::new_for_http())
}

// ─── One-shot mode ────────────────────────────────────────────────────────────

/// Acquire once and summarise, for `--summary`.
pub async fn summary_report<S: UserSource>(source: &S) -> MetricsReport {
  let result = source.acquire_with_provenance().await;
  MetricsReport::from(&result)
}
