use aide::axum::{
	routing::{get_with, post_with},
	ApiRouter,
};
use axum::http::StatusCode;

use crate::{error, route::favorite, AppState};

pub mod model;
pub mod route;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown user {0}")]
	UnknownUser(i64),
	#[error("email already registered")]
	EmailTaken,
	#[error("password hashing error: {0}")]
	Hash(#[from] argon2::Error),
}

pub type RouteError = error::RouteError<Error>;

error::route_error!(Error);

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/",
			get_with(get_users, get_users_docs).post_with(create_user, create_user_docs),
		)
		.api_route("/me", get_with(get_me, get_me_docs))
		.api_route("/:id", get_with(get_user, get_user_docs))
		.api_route(
			"/:id/favorite",
			get_with(favorite::route::get_user_favorites, favorite::route::get_user_favorites_docs),
		)
		.api_route(
			"/:id/favorite/:category/:target_id",
			post_with(
				favorite::route::add_user_favorite,
				favorite::route::add_user_favorite_docs,
			),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownUser(..) => StatusCode::NOT_FOUND,
			Self::EmailTaken => StatusCode::BAD_REQUEST,
			Self::Hash(..) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn message(&self) -> String {
		match self {
			Self::Hash(..) => "internal server error".into(),
			_ => self.to_string(),
		}
	}
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_create_and_fetch_user() {
		let app = app().await;

		let response = app
			.post("/user")
			.json(&json!({
				"first_name": "Leia",
				"last_name": "Organa",
				"email": "leia@alderaan.gov",
				"password": "helpmeobiwan",
			}))
			.await;

		assert_eq!(response.status_code(), 200);

		let created = response.json::<Value>();

		assert_eq!(created["first_name"], "Leia");
		assert_eq!(created["last_name"], "Organa");
		assert_eq!(created["email"], "leia@alderaan.gov");
		assert!(created["id"].is_i64());
		assert_utc_timestamp(&created["join_date"]);
		assert!(created.get("password").is_none());
		assert!(created.get("salt").is_none());

		let response = app.get(&format!("/user/{}", created["id"])).await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>(), created);
	}

	#[tokio::test]
	async fn test_list_users() {
		let app = app().await;

		for name in ["Leia", "Han", "Lando"] {
			create_user(&app, name).await;
		}

		let users = app.get("/user").await.json::<Vec<Value>>();

		assert_eq!(users.len(), 3);

		for user in &users {
			let response = app.get(&format!("/user/{}", user["id"])).await;

			assert_eq!(response.json::<Value>(), *user);
		}
	}

	#[tokio::test]
	async fn test_create_user_requires_fields() {
		let app = app().await;

		let response = app
			.post("/user")
			.json(&json!({
				"first_name": "Leia",
				"email": "leia@alderaan.gov",
				"password": "helpmeobiwan",
			}))
			.await;

		assert_eq!(response.status_code(), 400);

		let error = response.json::<Message>();

		assert_eq!(error.status_code, 400);
		assert!(error.message.contains("last_name"));

		let response = app
			.post("/user")
			.json(&json!({
				"first_name": "Leia",
				"last_name": "Organa",
				"email": "not an email",
				"password": "helpmeobiwan",
			}))
			.await;

		assert_eq!(response.status_code(), 400);
		assert!(response.json::<Message>().message.contains("email"));
	}

	#[tokio::test]
	async fn test_duplicate_email() {
		let app = app().await;

		create_user(&app, "Leia").await;

		let response = app
			.post("/user")
			.json(&json!({
				"first_name": "Leia",
				"last_name": "Again",
				"email": "leia@rebellion.org",
				"password": "helpmeobiwan",
			}))
			.await;

		assert_eq!(response.status_code(), 400);
		assert_eq!(response.json::<Message>().message, "email already registered");
	}

	#[tokio::test]
	async fn test_unknown_user() {
		let app = app().await;

		let response = app.get("/user/9999").await;

		assert_eq!(response.status_code(), 404);
		assert_eq!(response.json::<Message>().message, "unknown user 9999");
	}

	#[tokio::test]
	async fn test_me_requires_token() {
		let app = app().await;

		let response = app.get("/user/me").await;

		assert_eq!(response.status_code(), 401);
		assert_eq!(response.json::<Message>().status_code, 401);
	}
}
