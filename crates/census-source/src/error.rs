//! Error types for `census-source`.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to set up a [`RemoteSource`](crate::RemoteSource).
#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),
}

/// Why a single remote attempt did not produce users.
///
/// Every variant is handled the same way: the caller falls back to a
/// generated batch.
#[derive(Debug, Error)]
pub enum FetchError {
  /// Connection, DNS, TLS, invalid URL or body read failure.
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("HTTP error! status: {0}")]
  Status(StatusCode),

  /// The body was not a `{"results": [...]}` page of user records.
  #[error("unexpected response body: {0}")]
  Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
