//! HTTP acquisition backend for census.
//!
//! [`RemoteSource`] makes one GET against a randomuser.me-compatible endpoint
//! and implements [`census_core::UserSource`], substituting a fallback batch
//! whenever the request fails.

mod dto;
mod remote;

pub mod error;

pub use error::{Error, FetchError, Result};
pub use remote::{DEFAULT_SOURCE_URL, RemoteSource};

#[cfg(test)]
mod tests;
