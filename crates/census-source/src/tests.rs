//! Tests for `RemoteSource` against a local stub server.

use axum::{Json, Router, http::StatusCode, routing::get};
use census_core::{
  UserSource,
  fallback::{FALLBACK_BATCH_SIZE, cities_of},
  user::UserRecord,
};
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::{DEFAULT_SOURCE_URL, FetchError, RemoteSource};

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
  format!("http://{addr}")
}

fn remote_page() -> Value {
  json!({
    "results": [
      {
        "gender": "female",
        "name": { "title": "Ms", "first": "Sofia", "last": "Berg" },
        "location": {
          "street": { "number": 12, "name": "Storgata" },
          "city": "Oslo",
          "state": "Oslo",
          "country": "Norway",
          "postcode": "0150"
        },
        "email": "sofia.berg@example.com",
        "login": { "uuid": "7c0d4e1a-2b8f-4d4e-9a61-0f5a7b3c2d11" },
        "registered": { "date": "2015-04-07T10:20:30.123Z", "age": 9 },
        "phone": "22 33 44 55",
        "id": { "name": "FN", "value": "07019912345" },
        "picture": {
          "large": "https://randomuser.me/api/portraits/women/12.jpg",
          "thumbnail": "https://randomuser.me/api/portraits/thumb/women/12.jpg"
        }
      },
      {
        "gender": "male",
        "name": { "title": "Mr", "first": "Liam", "last": "Walsh" },
        "location": { "city": "Cork", "country": "Ireland" },
        "email": "liam.walsh@example.com",
        "login": { "uuid": "a1b2c3d4-0000-4000-8000-000000000001" },
        "registered": { "date": "2019-11-30T08:00:00.000Z", "age": 5 },
        "phone": "041-123-4567",
        "id": { "name": "PPS", "value": null },
        "picture": { "thumbnail": "https://randomuser.me/api/portraits/thumb/men/3.jpg" }
      },
      {
        "gender": "female",
        "name": { "first": "Emma", "last": "Jansen" },
        "location": { "city": "Utrecht", "country": "Netherlands" },
        "email": "emma.jansen@example.com",
        "registered": { "date": "2021-02-14T12:00:00.000Z" },
        "phone": "(030) 123 4567",
        "id": { "name": "BSN", "value": "0123456789" },
        "picture": { "thumbnail": "https://randomuser.me/api/portraits/thumb/women/8.jpg" }
      }
    ],
    "info": { "seed": "abc", "results": 3, "page": 1, "version": "1.4" }
  })
}

async fn ok_source() -> RemoteSource {
  let router = Router::new().route("/api/", get(|| async { Json(remote_page()) }));
  let base = serve(router).await;
  RemoteSource::new(format!("{base}/api/?results=3")).unwrap()
}

/// Check the generator's invariants for a batch produced between `started`
/// and `finished`.
fn assert_fallback_batch(
  users: &[UserRecord],
  started: DateTime<Utc>,
  finished: DateTime<Utc>,
) {
  let oldest = started - TimeDelta::days(5 * 365);
  assert_eq!(users.len(), FALLBACK_BATCH_SIZE);
  for user in users {
    assert!(cities_of(&user.location.country).contains(&user.location.city.as_str()));
    assert!(user.registered.date < finished);
    assert!(user.registered.date >= oldest);
  }
}

// ─── Success ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn successful_fetch_maps_remote_users() {
  let source = ok_source().await;
  let result = source.acquire_with_provenance().await;

  assert!(!result.fallback_used());
  assert_eq!(result.source_url(), source.source_url());

  let users = result.users();
  assert_eq!(users.len(), 3);
  assert_eq!(users[0].id, "7c0d4e1a-2b8f-4d4e-9a61-0f5a7b3c2d11");
  assert_eq!(users[0].name.first, "Sofia");
  assert_eq!(users[0].location.city, "Oslo");
  assert_eq!(users[0].location.country, "Norway");
  assert_eq!(users[0].registered.date.to_rfc3339(), "2015-04-07T10:20:30.123+00:00");
  assert_eq!(
    users[0].picture.thumbnail,
    "https://randomuser.me/api/portraits/thumb/women/12.jpg"
  );
}

#[tokio::test]
async fn login_uuid_is_preferred_over_national_id() {
  let source = ok_source().await;
  let users = source.acquire_users_only().await;
  assert_eq!(users[1].id, "a1b2c3d4-0000-4000-8000-000000000001");
  assert_eq!(users[2].id, "0123456789");
}

#[tokio::test]
async fn users_only_matches_provenance_on_success() {
  let source = ok_source().await;
  let bare = source.acquire_users_only().await;
  let full = source.acquire_with_provenance().await;
  assert_eq!(bare, full.into_users());
}

// ─── Failure paths ───────────────────────────────────────────────────────────

#[tokio::test]
async fn error_status_uses_fallback() {
  let router = Router::new().route(
    "/",
    get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
  );
  let source = RemoteSource::new(serve(router).await).unwrap();

  match source.fetch().await {
    Err(FetchError::Status(status)) => assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE),
    other => panic!("expected status error, got {other:?}"),
  }

  let started = Utc::now();
  let result = source.acquire_with_provenance().await;
  assert!(result.fallback_used());
  assert_fallback_batch(result.users(), started, result.fetched_at());
}

#[tokio::test]
async fn non_json_body_uses_fallback() {
  let router = Router::new().route("/", get(|| async { "<html>not json</html>" }));
  let source = RemoteSource::new(serve(router).await).unwrap();

  assert!(matches!(source.fetch().await, Err(FetchError::Decode(_))));
  let started = Utc::now();
  let result = source.acquire_with_provenance().await;
  assert!(result.fallback_used());
  assert_fallback_batch(result.users(), started, result.fetched_at());
}

#[tokio::test]
async fn missing_results_field_uses_fallback() {
  let router = Router::new().route("/", get(|| async { Json(json!({ "error": "quota" })) }));
  let source = RemoteSource::new(serve(router).await).unwrap();

  assert!(matches!(source.fetch().await, Err(FetchError::Decode(_))));
  let started = Utc::now();
  let result = source.acquire_with_provenance().await;
  assert!(result.fallback_used());
  assert_fallback_batch(result.users(), started, result.fetched_at());
}

#[tokio::test]
async fn unreachable_endpoint_uses_fallback() {
  let source = RemoteSource::new("http://127.0.0.1:1/api/").unwrap();

  assert!(matches!(source.fetch().await, Err(FetchError::Transport(_))));
  let started = Utc::now();
  let result = source.acquire_with_provenance().await;
  assert!(result.fallback_used());
  assert_eq!(result.source_url(), "http://127.0.0.1:1/api/");
  assert_fallback_batch(result.users(), started, result.fetched_at());
}

#[tokio::test]
async fn malformed_url_uses_fallback() {
  let source = RemoteSource::new("not a url").unwrap();
  let started = Utc::now();
  let users = source.acquire_users_only().await;
  assert_fallback_batch(&users, started, Utc::now());
}

// ─── Configuration ───────────────────────────────────────────────────────────

#[test]
fn unset_url_resolves_to_default() {
  let source = RemoteSource::from_config(None).unwrap();
  assert_eq!(source.source_url(), DEFAULT_SOURCE_URL);

  let source = RemoteSource::from_config(Some("http://localhost:9/api".into())).unwrap();
  assert_eq!(source.source_url(), "http://localhost:9/api");
}

#[test]
fn empty_url_resolves_to_default() {
  let source = RemoteSource::from_config(Some(String::new())).unwrap();
  assert_eq!(source.source_url(), DEFAULT_SOURCE_URL);
}
