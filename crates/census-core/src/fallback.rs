//! Synthetic user generation for when the remote source is unavailable.
//!
//! Names, emails and phone numbers are derived from the record index so they
//! are unique within a batch; gender, location, registration date and the id
//! token are random.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

use crate::user::{Location, PersonName, Picture, Registration, UserRecord};

/// Number of records in every fallback batch.
pub const FALLBACK_BATCH_SIZE: usize = 50;

/// Domain used for generated email addresses.
pub const FALLBACK_EMAIL_DOMAIN: &str = "fallback.com";

/// Upper bound on how long ago a generated user registered.
const MAX_REGISTRATION_AGE_MS: i64 = 5 * 365 * 24 * 60 * 60 * 1000;

const ID_TOKEN_LEN: usize = 8;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

static CITIES_BY_COUNTRY: [(&str, [&str; 3]); 5] = [
  ("USA", ["New York", "Los Angeles", "Chicago"]),
  ("Canada", ["Toronto", "Vancouver", "Montreal"]),
  ("UK", ["London", "Manchester", "Birmingham"]),
  ("Australia", ["Sydney", "Melbourne", "Brisbane"]),
  ("Germany", ["Berlin", "Munich", "Hamburg"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
  Male,
  Female,
}

impl Gender {
  const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

  fn as_str(self) -> &'static str {
    match self {
      Gender::Male => "male",
      Gender::Female => "female",
    }
  }

  /// Single-letter tag embedded in generated first names.
  fn tag(self) -> char {
    match self {
      Gender::Male => 'M',
      Gender::Female => 'F',
    }
  }

  fn portrait_dir(self) -> &'static str {
    match self {
      Gender::Male => "men",
      Gender::Female => "women",
    }
  }
}

/// Countries the generator draws from.
pub fn countries() -> impl Iterator<Item = &'static str> {
  CITIES_BY_COUNTRY.iter().map(|(country, _)| *country)
}

/// Cities the generator may pair with `country`; empty for unknown countries.
pub fn cities_of(country: &str) -> &'static [&'static str] {
  CITIES_BY_COUNTRY
    .iter()
    .find(|(c, _)| *c == country)
    .map(|(_, cities)| cities.as_slice())
    .unwrap_or_default()
}

/// Generate a fresh fallback batch using the thread-local RNG and the current
/// time.
pub fn fallback_batch() -> Vec<UserRecord> {
  fallback_batch_with(&mut rand::rng(), Utc::now())
}

/// Generate a fallback batch from an explicit RNG, as if at instant `now`.
///
/// Every registration date lies in `[now - 5 years, now)`.
pub fn fallback_batch_with<R: Rng>(
  rng: &mut R,
  now: DateTime<Utc>,
) -> Vec<UserRecord> {
  (0..FALLBACK_BATCH_SIZE)
    .map(|index| fallback_user(rng, now, index))
    .collect()
}

fn fallback_user<R: Rng>(
  rng: &mut R,
  now: DateTime<Utc>,
  index: usize,
) -> UserRecord {
  let gender = Gender::ALL[rng.random_range(0..Gender::ALL.len())];
  let (country, cities) =
    CITIES_BY_COUNTRY[rng.random_range(0..CITIES_BY_COUNTRY.len())];
  let city = cities[rng.random_range(0..cities.len())];

  let first = format!("Fallback{}{index}", gender.tag());
  let last = format!("User{index}");
  let email = format!(
    "{}.{}@{FALLBACK_EMAIL_DOMAIN}",
    first.to_lowercase(),
    last.to_lowercase()
  );
  let phone = format!("555-{:04}", 1000 + index);

  let age = TimeDelta::milliseconds(rng.random_range(1..=MAX_REGISTRATION_AGE_MS));
  let token: String = (0..ID_TOKEN_LEN)
    .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
    .collect();

  UserRecord {
    id:         format!("F{index:03}-{token}"),
    name:       PersonName { first, last },
    gender:     gender.as_str().to_string(),
    email,
    phone,
    location:   Location {
      country: country.to_string(),
      city:    city.to_string(),
    },
    registered: Registration { date: now - age },
    picture:    Picture {
      thumbnail: format!(
        "https://randomuser.me/api/portraits/thumb/{}/{}.jpg",
        gender.portrait_dir(),
        index % 100
      ),
    },
  }
}
