//! Reqwest-backed user source.

use census_core::{
  acquisition::{AcquisitionResult, UserSource, resolve},
  user::UserRecord,
};
use reqwest::Client;

use crate::{
  dto::ResultsPage,
  error::{Error, FetchError, Result},
};

/// Endpoint used when no override is configured: 500 users from the public
/// randomuser.me demo API.
pub const DEFAULT_SOURCE_URL: &str = "https://randomuser.me/api/?results=500";

/// A [`UserSource`] backed by a single HTTP endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct RemoteSource {
  client: Client,
  url:    String,
}

impl RemoteSource {
  /// Build a source for `url`. The client keeps reqwest's default timeouts.
  pub fn new(url: impl Into<String>) -> Result<Self> {
    let client = Client::builder().build().map_err(Error::Client)?;
    Ok(Self { client, url: url.into() })
  }

  /// Build a source for an optional configured URL, using
  /// [`DEFAULT_SOURCE_URL`] when it is `None` or empty.
  pub fn from_config(url: Option<String>) -> Result<Self> {
    Self::new(
      url
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
    )
  }

  /// One GET against the endpoint, without fallback.
  pub async fn fetch(&self) -> Result<Vec<UserRecord>, FetchError> {
    let resp = self.client.get(&self.url).send().await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(FetchError::Status(status));
    }

    let body = resp.bytes().await?;
    let page: ResultsPage = serde_json::from_slice(&body)?;
    Ok(page.into_users())
  }
}

impl UserSource for RemoteSource {
  fn source_url(&self) -> &str { &self.url }

  async fn acquire_with_provenance(&self) -> AcquisitionResult {
    let outcome = self.fetch().await;
    if let Ok(users) = &outcome {
      tracing::debug!(
        source_url = %self.url,
        count = users.len(),
        "fetched users from remote source"
      );
    }
    resolve(&self.url, outcome)
  }
}
