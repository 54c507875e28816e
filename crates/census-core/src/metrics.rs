//! Descriptive statistics over a batch of users.
//!
//! [`summarize`] is a single pass over its input. It has no error cases: an
//! empty batch yields [`MetricsSummary::default`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserRecord;

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

/// The most frequent category seen so far and its count.
///
/// The default (`name: ""`, `count: 0`) stands for "no users".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
  pub name:  String,
  pub count: usize,
}

impl Leader {
  /// Take the lead only on a strictly greater count, so the first category
  /// to reach a maximum keeps it.
  fn observe(&mut self, name: &str, count: usize) {
    if count > self.count {
      self.name = name.to_string();
      self.count = count;
    }
  }
}

/// Aggregate metrics derived from a batch of users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
  pub total_users:                   usize,
  pub genders:                       BTreeMap<String, usize>,
  pub countries:                     BTreeMap<String, usize>,
  pub cities:                        BTreeMap<String, usize>,
  /// Mean of the per-user whole days since registration, rounded.
  pub average_registration_days_ago: u64,
  pub most_common_country:           Leader,
  pub most_common_city:              Leader,
}

/// Summarize `users` against the current wall clock.
pub fn summarize(users: &[UserRecord]) -> MetricsSummary {
  summarize_at(users, Utc::now())
}

/// Summarize `users` as if the current instant were `now`.
pub fn summarize_at(users: &[UserRecord], now: DateTime<Utc>) -> MetricsSummary {
  let mut summary = MetricsSummary {
    total_users: users.len(),
    ..MetricsSummary::default()
  };
  let mut total_days: u64 = 0;

  for user in users {
    tally(&mut summary.genders, &user.gender);

    let country = &user.location.country;
    let count = tally(&mut summary.countries, country);
    summary.most_common_country.observe(country, count);

    let city = &user.location.city;
    let count = tally(&mut summary.cities, city);
    summary.most_common_city.observe(city, count);

    total_days += days_between(now, user.registered.date);
  }

  if summary.total_users > 0 {
    let total = summary.total_users as u64;
    // Round half up.
    summary.average_registration_days_ago = (2 * total_days + total) / (2 * total);
  }

  summary
}

fn tally(counts: &mut BTreeMap<String, usize>, key: &str) -> usize {
  let count = counts.entry(key.to_string()).or_default();
  *count += 1;
  *count
}

/// Whole days between two instants, in either direction, rounded up.
fn days_between(now: DateTime<Utc>, then: DateTime<Utc>) -> u64 {
  (now - then).num_milliseconds().unsigned_abs().div_ceil(DAY_MS)
}
