//! Shared helpers for route tests.

use std::str::FromStr;

use argon2::Argon2;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use axum_test::TestServer;
pub use serde_json::{json, Value};

pub use crate::{error::Message, Database};

pub const PASSWORD: &str = "hunter2hunter";

/// A fresh in-memory database with migrations applied.
///
/// Every connection to `sqlite::memory:` opens a separate database, so the
/// pool keeps exactly one connection alive.
pub async fn database() -> Database {
	let options = SqliteConnectOptions::from_str("sqlite::memory:")
		.unwrap()
		.foreign_keys(true);

	let database = SqlitePoolOptions::new()
		.max_connections(1)
		.idle_timeout(None)
		.max_lifetime(None)
		.connect_with(options)
		.await
		.unwrap();

	sqlx::migrate!().run(&database).await.unwrap();

	database
}

/// Asserts that `value` is an RFC 3339 timestamp in UTC, such as
/// `2024-05-04T12:00:00.123456Z`.
pub fn assert_utc_timestamp(value: &Value) {
	let text = value.as_str().unwrap();

	assert!(
		chrono::DateTime::parse_from_rfc3339(text).is_ok(),
		"{text} is not an RFC 3339 timestamp"
	);
	assert!(text.ends_with('Z'), "{text} is not in UTC");
}

pub async fn app() -> TestServer {
	let state = crate::State {
		database: database().await,
		hasher: Argon2::default(),
	};

	TestServer::new(crate::app(state)).unwrap()
}

/// Registers `<first_name>@rebellion.org` with [`PASSWORD`].
pub async fn create_user(app: &TestServer, first_name: &str) -> Value {
	let response = app
		.post("/user")
		.json(&json!({
			"first_name": first_name,
			"last_name": "Organa",
			"email": format!("{}@rebellion.org", first_name.to_lowercase()),
			"password": PASSWORD,
		}))
		.await;

	assert_eq!(response.status_code(), 200);
	response.json()
}

pub async fn create_character(app: &TestServer, name: &str) -> Value {
	let response = app
		.post("/people")
		.json(&json!({
			"name": name,
			"hair_color": "blond",
			"birth_year": "19BBY",
		}))
		.await;

	assert_eq!(response.status_code(), 200);
	response.json()
}

pub async fn create_planet(app: &TestServer, name: &str) -> Value {
	let response = app
		.post("/planet")
		.json(&json!({
			"name": name,
			"orbital_period": 304,
			"gravity": "1 standard",
			"population": 200_000,
			"climate": "arid",
		}))
		.await;

	assert_eq!(response.status_code(), 200);
	response.json()
}

pub async fn create_vehicle(app: &TestServer, name: &str) -> Value {
	let response = app
		.post("/vehicle")
		.json(&json!({
			"name": name,
			"model": "YT-1300 light freighter",
			"manufacturer": "Corellian Engineering Corporation",
			"cost_in_credits": 100_000,
			"length": 35,
			"cargo_capacity": 100_000,
		}))
		.await;

	assert_eq!(response.status_code(), 200);
	response.json()
}
