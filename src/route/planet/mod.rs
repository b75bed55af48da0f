use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown planet {0}")]
	UnknownPlanet(i64),
}

pub type RouteError = error::RouteError<Error>;

error::route_error!(Error);

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/",
			get_with(get_planets, get_planets_docs).post_with(create_planet, create_planet_docs),
		)
		.api_route(
			"/:id",
			get_with(get_planet, get_planet_docs).put_with(update_planet, update_planet_docs),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownPlanet(..) => StatusCode::NOT_FOUND,
		}
	}
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_unknown_planet() {
		let app = app().await;

		let response = app.get("/planet/9999").await;

		assert_eq!(response.status_code(), 404);

		let error = response.json::<Value>();

		assert_eq!(
			error,
			json!({ "message": "unknown planet 9999", "status_code": 404 })
		);
	}

	#[tokio::test]
	async fn test_malformed_id() {
		let app = app().await;

		let response = app.get("/planet/tatooine").await;

		assert_eq!(response.status_code(), 400);
		assert_eq!(response.json::<Message>().status_code, 400);
	}

	#[tokio::test]
	async fn test_create_and_list_planets() {
		let app = app().await;

		let tatooine = create_planet(&app, "Tatooine").await;

		assert_eq!(tatooine["name"], "Tatooine");
		assert_eq!(tatooine["orbital_period"], 304);
		assert_eq!(tatooine["population"], 200_000);

		create_planet(&app, "Alderaan").await;
		create_planet(&app, "Hoth").await;

		let planets = app.get("/planet").await.json::<Vec<Value>>();

		assert_eq!(planets.len(), 3);
		assert_eq!(planets[0], tatooine);

		for planet in &planets {
			let response = app.get(&format!("/planet/{}", planet["id"])).await;

			assert_eq!(response.json::<Value>(), *planet);
		}
	}

	#[tokio::test]
	async fn test_create_planet_rejects_negative_population() {
		let app = app().await;

		let response = app
			.post("/planet")
			.json(&json!({
				"name": "Alderaan",
				"orbital_period": 364,
				"gravity": "1 standard",
				"population": -1,
				"climate": "temperate",
			}))
			.await;

		assert_eq!(response.status_code(), 400);
		assert_eq!(
			response.json::<Message>().message,
			"invalid field `population`: range"
		);
	}

	#[tokio::test]
	async fn test_update_planet() {
		let app = app().await;
		let planet = create_planet(&app, "Alderaan").await;

		tokio::time::sleep(std::time::Duration::from_millis(5)).await;

		let response = app
			.put(&format!("/planet/{}", planet["id"]))
			.json(&json!({ "population": 0, "climate": null }))
			.await;

		assert_eq!(response.status_code(), 200);

		let updated = response.json::<Value>();

		assert_eq!(updated["population"], 0);
		assert_eq!(updated["climate"], planet["climate"]);
		assert_eq!(updated["name"], "Alderaan");
		assert_eq!(updated["created"], planet["created"]);
		assert_ne!(updated["edited"], planet["edited"]);
		assert_utc_timestamp(&updated["edited"]);

		let response = app
			.put("/planet/9999")
			.json(&json!({ "population": 0 }))
			.await;

		assert_eq!(response.status_code(), 404);
	}
}
