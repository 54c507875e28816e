//! Handlers for `/users` and `/fallback`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/users` | Bare list, provenance dropped |
//! | `GET`  | `/users/meta` | `{users, fallbackUsed, sourceUrl, fetchedAt}` |
//! | `GET`  | `/fallback` | A freshly generated batch; never touches the source |

use std::sync::Arc;

use axum::{Json, extract::State};
use census_core::{
  acquisition::{AcquisitionResult, UserSource},
  fallback::fallback_batch,
  user::UserRecord,
};

/// `GET /users`
pub async fn list<S: UserSource>(
  State(source): State<Arc<S>>,
) -> Json<Vec<UserRecord>> {
  Json(source.acquire_users_only().await)
}

/// `GET /users/meta`
pub async fn with_provenance<S: UserSource>(
  State(source): State<Arc<S>>,
) -> Json<AcquisitionResult> {
  Json(source.acquire_with_provenance().await)
}

/// `GET /fallback`
pub async fn fallback() -> Json<Vec<UserRecord>> { Json(fallback_batch()) }
