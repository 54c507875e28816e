//! Handler for `/metrics`.

use std::sync::Arc;

use axum::{Json, extract::State};
use census_core::{
  acquisition::{AcquisitionResult, UserSource},
  metrics::{MetricsSummary, summarize},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metrics over one acquisition, with the provenance of the batch they were
/// computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
  pub fallback_used: bool,
  pub source_url:    String,
  pub fetched_at:    DateTime<Utc>,
  pub metrics:       MetricsSummary,
}

impl From<&AcquisitionResult> for MetricsReport {
  fn from(result: &AcquisitionResult) -> Self {
    Self {
      fallback_used: result.fallback_used(),
      source_url:    result.source_url().to_string(),
      fetched_at:    result.fetched_at(),
      metrics:       summarize(result.users()),
    }
  }
}

/// `GET /metrics`
pub async fn handler<S: UserSource>(
  State(source): State<Arc<S>>,
) -> Json<MetricsReport> {
  let result = source.acquire_with_provenance().await;
  Json(MetricsReport::from(&result))
}
