//! The user record — one person, either generated locally or fetched remotely.
//!
//! Both origins produce exactly this shape; nothing downstream can tell them
//! apart except through [`AcquisitionResult::fallback_used`].
//!
//! [`AcquisitionResult::fallback_used`]: crate::acquisition::AcquisitionResult::fallback_used

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Given and family name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
  pub first: String,
  pub last:  String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
  pub country: String,
  pub city:    String,
}

/// When the user registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
  pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
  /// URL of a small portrait image.
  pub thumbnail: String,
}

/// A single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
  /// Opaque token; unique in practice but never checked.
  pub id:         String,
  pub name:       PersonName,
  /// Free-form category, e.g. `male` or `female`.
  pub gender:     String,
  pub email:      String,
  pub phone:      String,
  pub location:   Location,
  pub registered: Registration,
  pub picture:    Picture,
}
