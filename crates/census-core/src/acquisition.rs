//! Acquisition results, the `UserSource` trait and fallback resolution.
//!
//! A source makes one attempt to obtain users and hands the raw outcome to
//! [`resolve`], which is the only place a failure is turned into a fallback
//! batch. Callers of a [`UserSource`] therefore never see an error.

use std::{fmt::Display, future::Future};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{fallback::fallback_batch, user::UserRecord};

// ─── Result type ─────────────────────────────────────────────────────────────

/// A batch of users together with its provenance.
///
/// Built once by [`resolve`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionResult {
  users:         Vec<UserRecord>,
  fallback_used: bool,
  source_url:    String,
  fetched_at:    DateTime<Utc>,
}

impl AcquisitionResult {
  pub fn users(&self) -> &[UserRecord] { &self.users }

  /// `true` when the remote attempt failed and the batch was generated.
  pub fn fallback_used(&self) -> bool { self.fallback_used }

  /// The endpoint that was attempted, whether or not it answered.
  pub fn source_url(&self) -> &str { &self.source_url }

  pub fn fetched_at(&self) -> DateTime<Utc> { self.fetched_at }

  pub fn into_users(self) -> Vec<UserRecord> { self.users }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Turn the outcome of a single remote attempt into an [`AcquisitionResult`].
///
/// `Ok` keeps the remote users. `Err` is logged and replaced by a freshly
/// generated [`fallback_batch`]. In both branches `fetched_at` is taken after
/// the users are in hand.
pub fn resolve<E: Display>(
  source_url: &str,
  outcome: Result<Vec<UserRecord>, E>,
) -> AcquisitionResult {
  let (users, fallback_used) = match outcome {
    Ok(users) => (users, false),
    Err(error) => {
      tracing::warn!(
        source_url,
        error = %error,
        "error fetching users from remote source, using fallback data"
      );
      (fallback_batch(), true)
    }
  };

  AcquisitionResult {
    users,
    fallback_used,
    source_url: source_url.to_string(),
    fetched_at: Utc::now(),
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Anything that can produce a batch of users on demand.
///
/// Implementations must be total: every call yields a usable batch, falling
/// back through [`resolve`] when their backend is unavailable.
pub trait UserSource: Send + Sync {
  /// The endpoint this source attempts.
  fn source_url(&self) -> &str;

  /// Acquire a batch and report how it was obtained.
  fn acquire_with_provenance(
    &self,
  ) -> impl Future<Output = AcquisitionResult> + Send + '_;

  /// Acquire a batch, discarding provenance.
  fn acquire_users_only(
    &self,
  ) -> impl Future<Output = Vec<UserRecord>> + Send + '_ {
    async move { self.acquire_with_provenance().await.into_users() }
  }
}
