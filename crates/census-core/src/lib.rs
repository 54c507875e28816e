//! Core types and pure computations for census.
//!
//! This crate holds the user record model, the fallback batch generator and
//! the metrics aggregator. It has no HTTP dependency; acquisition backends
//! implement [`acquisition::UserSource`] in their own crates.

pub mod acquisition;
pub mod fallback;
pub mod metrics;
pub mod user;

pub use acquisition::{AcquisitionResult, UserSource};
pub use fallback::fallback_batch;
pub use metrics::{MetricsSummary, summarize};
pub use user::UserRecord;
