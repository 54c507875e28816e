//! JSON REST API for census.
//!
//! Exposes an axum [`Router`] backed by any [`census_core::UserSource`].
//! Every request performs its own acquisition; nothing is cached.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", census_api::api_router(source.clone()))
//! ```

pub mod metrics;
pub mod users;

use std::sync::Arc;

use axum::{Router, routing::get};
use census_core::UserSource;

pub use metrics::MetricsReport;

/// Build the API router for `source`.
pub fn api_router<S>(source: Arc<S>) -> Router<()>
where
  S: UserSource + 'static,
{
  Router::new()
    .route("/users", get(users::list::<S>))
    .route("/users/meta", get(users::with_provenance::<S>))
    .route("/metrics", get(metrics::handler::<S>))
    .route("/fallback", get(users::fallback))
    .with_state(source)
}
