//! Wire shapes for randomuser.me-compatible responses.
//!
//! The body is decoded into these DTOs first and then mapped into
//! [`UserRecord`]s. Fields the service sends that census does not use are
//! ignored.

use census_core::user::{Location, PersonName, Picture, Registration, UserRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ResultsPage {
  pub(crate) results: Vec<RemoteUser>,
}

impl ResultsPage {
  pub(crate) fn into_users(self) -> Vec<UserRecord> {
    self.results.into_iter().map(RemoteUser::into_user).collect()
  }
}

/// randomuser.me sends `{"name": "SSN", "value": null}` for some
/// nationalities.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RemoteId {
  #[serde(default)]
  pub(crate) value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RemoteLogin {
  #[serde(default)]
  pub(crate) uuid: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteName {
  pub(crate) first: String,
  pub(crate) last:  String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteLocation {
  pub(crate) country: String,
  pub(crate) city:    String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteRegistered {
  pub(crate) date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemotePicture {
  pub(crate) thumbnail: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteUser {
  #[serde(default)]
  pub(crate) id:         RemoteId,
  #[serde(default)]
  pub(crate) login:      RemoteLogin,
  pub(crate) name:       RemoteName,
  pub(crate) gender:     String,
  pub(crate) email:      String,
  pub(crate) phone:      String,
  pub(crate) location:   RemoteLocation,
  pub(crate) registered: RemoteRegistered,
  pub(crate) picture:    RemotePicture,
}

impl RemoteUser {
  fn into_user(self) -> UserRecord {
    // National ids repeat across nationalities; the login uuid does not.
    let id = self
      .login
      .uuid
      .filter(|v| !v.is_empty())
      .or(self.id.value.filter(|v| !v.is_empty()))
      .unwrap_or_default();

    UserRecord {
      id,
      name:       PersonName { first: self.name.first, last: self.name.last },
      gender:     self.gender,
      email:      self.email,
      phone:      self.phone,
      location:   Location {
        country: self.location.country,
        city:    self.location.city,
      },
      registered: Registration { date: self.registered.date },
      picture:    Picture { thumbnail: self.picture.thumbnail },
    }
  }
}
