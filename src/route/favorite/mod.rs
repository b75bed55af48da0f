use aide::axum::{
	routing::{delete_with, get_with},
	ApiRouter,
};
use axum::http::StatusCode;

use crate::{error, AppState};

use self::model::Category;

pub mod model;
pub mod route;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown user {0}")]
	UnknownUser(i64),
	#[error("unknown {0} {1}")]
	UnknownTarget(Category, i64),
	#[error("unknown favorite {0}")]
	UnknownFavorite(i64),
	#[error("{category} {target_id} is already a favorite of user {user_id}")]
	Duplicate {
		user_id: i64,
		category: Category,
		target_id: i64,
	},
}

pub type RouteError = error::RouteError<Error>;

error::route_error!(Error);

/// Routes under `/favorite`. The per-user routes are mounted by the user module.
pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/",
			get_with(get_favorites, get_favorites_docs)
				.post_with(create_favorite, create_favorite_docs),
		)
		.api_route("/:id", delete_with(delete_favorite, delete_favorite_docs))
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownUser(..) | Self::UnknownTarget(..) | Self::UnknownFavorite(..) => {
				StatusCode::NOT_FOUND
			}
			Self::Duplicate { .. } => StatusCode::BAD_REQUEST,
		}
	}
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_favorite_character_scenario() {
		let app = app().await;
		let leia = create_user(&app, "Leia").await;
		let luke = create_character(&app, "Luke Skywalker").await;

		let path = format!("/user/{}/favorite/character/{}", leia["id"], luke["id"]);
		let response = app.post(&path).await;

		assert_eq!(response.status_code(), 200);

		let favorite = response.json::<Value>();

		assert_eq!(favorite["user_id"], leia["id"]);
		assert_eq!(favorite["character_id"], luke["id"]);
		assert_eq!(favorite["category"], "character");
		assert!(favorite.get("planet_id").is_none());
		assert_utc_timestamp(&favorite["created"]);

		let response = app.post(&path).await;

		assert_eq!(response.status_code(), 400);

		let error = response.json::<Message>();

		assert_eq!(error.status_code, 400);
		assert_eq!(
			error.message,
			format!(
				"character {} is already a favorite of user {}",
				luke["id"], leia["id"]
			)
		);

		assert_eq!(app.get("/favorite").await.json::<Vec<Value>>().len(), 1);
	}

	#[tokio::test]
	async fn test_people_alias() {
		let app = app().await;
		let leia = create_user(&app, "Leia").await;
		let luke = create_character(&app, "Luke Skywalker").await;

		let response = app
			.post(&format!("/user/{}/favorite/people/{}", leia["id"], luke["id"]))
			.await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>()["category"], "character");
	}

	#[tokio::test]
	async fn test_unknown_user_or_target() {
		let app = app().await;
		let leia = create_user(&app, "Leia").await;
		let luke = create_character(&app, "Luke Skywalker").await;

		let response = app
			.post(&format!("/user/9999/favorite/character/{}", luke["id"]))
			.await;

		assert_eq!(response.status_code(), 404);
		assert_eq!(response.json::<Message>().message, "unknown user 9999");

		let response = app
			.post(&format!("/user/{}/favorite/planet/9999", leia["id"]))
			.await;

		assert_eq!(response.status_code(), 404);
		assert_eq!(response.json::<Message>().message, "unknown planet 9999");

		let response = app
			.post(&format!("/user/{}/favorite/starship/1", leia["id"]))
			.await;

		assert_eq!(response.status_code(), 400);

		assert!(app.get("/favorite").await.json::<Vec<Value>>().is_empty());
	}

	#[tokio::test]
	async fn test_create_favorite_from_body() {
		let app = app().await;
		let leia = create_user(&app, "Leia").await;
		let hoth = create_planet(&app, "Hoth").await;

		let body = json!({
			"user_id": leia["id"],
			"category": "planet",
			"target_id": hoth["id"],
		});

		let response = app.post("/favorite").json(&body).await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>()["planet_id"], hoth["id"]);

		let response = app.post("/favorite").json(&body).await;

		assert_eq!(response.status_code(), 400);

		let response = app
			.post("/favorite")
			.json(&json!({ "user_id": leia["id"], "category": "planet" }))
			.await;

		assert_eq!(response.status_code(), 400);
		assert!(response.json::<Message>().message.contains("target_id"));
	}

	#[tokio::test]
	async fn test_list_user_favorites() {
		let app = app().await;
		let leia = create_user(&app, "Leia").await;
		let han = create_user(&app, "Han").await;
		let luke = create_character(&app, "Luke Skywalker").await;
		let hoth = create_planet(&app, "Hoth").await;
		let falcon = create_vehicle(&app, "Millennium Falcon").await;

		for path in [
			format!("/user/{}/favorite/character/{}", leia["id"], luke["id"]),
			format!("/user/{}/favorite/planet/{}", leia["id"], hoth["id"]),
			format!("/user/{}/favorite/vehicle/{}", han["id"], falcon["id"]),
		] {
			assert_eq!(app.post(&path).await.status_code(), 200);
		}

		let favorites = app
			.get(&format!("/user/{}/favorite", leia["id"]))
			.await
			.json::<Vec<Value>>();

		assert_eq!(favorites.len(), 2);
		assert_eq!(favorites[0]["character_id"], luke["id"]);
		assert_eq!(favorites[1]["planet_id"], hoth["id"]);

		let favorites = app
			.get(&format!("/user/{}/favorite?category=planet", leia["id"]))
			.await
			.json::<Vec<Value>>();

		assert_eq!(favorites.len(), 1);
		assert_eq!(favorites[0]["planet_id"], hoth["id"]);

		let lando = create_user(&app, "Lando").await;
		let favorites = app
			.get(&format!("/user/{}/favorite", lando["id"]))
			.await
			.json::<Vec<Value>>();

		assert!(favorites.is_empty());

		let response = app.get("/user/9999/favorite").await;

		assert_eq!(response.status_code(), 404);
	}

	#[tokio::test]
	async fn test_delete_favorite() {
		let app = app().await;
		let leia = create_user(&app, "Leia").await;
		let falcon = create_vehicle(&app, "Millennium Falcon").await;

		let favorite = app
			.post(&format!("/user/{}/favorite/vehicle/{}", leia["id"], falcon["id"]))
			.await
			.json::<Value>();

		let response = app.delete("/favorite/9999").await;

		assert_eq!(response.status_code(), 404);
		assert_eq!(response.json::<Message>().message, "unknown favorite 9999");
		assert_eq!(app.get("/favorite").await.json::<Vec<Value>>().len(), 1);

		let response = app.delete(&format!("/favorite/{}", favorite["id"])).await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>(), favorite);
		assert!(app.get("/favorite").await.json::<Vec<Value>>().is_empty());

		let response = app.delete(&format!("/favorite/{}", favorite["id"])).await;

		assert_eq!(response.status_code(), 404);
	}
}
