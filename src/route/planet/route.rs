use axum::extract::State;
use macros::route;

use crate::{
	entity,
	extract::{Json, Path},
	openapi::tag,
	route::model::IdInput,
	Database,
};

use super::{model, Error, RouteError};

/// Get all planets
/// Returns every planet, in insertion order.
#[route(tag = tag::PLANET)]
pub async fn get_planets(
	State(database): State<Database>,
) -> Result<Json<Vec<model::Planet>>, RouteError> {
	let planets = entity::fetch_all::<model::Planet>(&database).await?;

	Ok(Json(planets))
}

/// Get single planet
/// Returns a single planet by its unique id.
#[route(tag = tag::PLANET)]
pub async fn get_planet(
	State(database): State<Database>,
	Path(path): Path<IdInput>,
) -> Result<Json<model::Planet>, RouteError> {
	let planet = entity::fetch::<model::Planet>(&database, path.id).await?;

	Ok(Json(planet.ok_or(Error::UnknownPlanet(path.id))?))
}

/// Create planet
/// Creates a new planet.
#[route(tag = tag::PLANET)]
pub async fn create_planet(
	State(database): State<Database>,
	Json(input): Json<model::CreatePlanetInput>,
) -> Result<Json<model::Planet>, RouteError> {
	let planet = model::Planet::create(&database, input).await?;

	Ok(Json(planet))
}

/// Update planet
/// Updates the provided fields of an existing planet. Omitted fields keep their value.
#[route(tag = tag::PLANET)]
pub async fn update_planet(
	State(database): State<Database>,
	Path(path): Path<IdInput>,
	Json(input): Json<model::UpdatePlanetInput>,
) -> Result<Json<model::Planet>, RouteError> {
	let planet = model::Planet::update(&database, path.id, input).await?;

	Ok(Json(planet.ok_or(Error::UnknownPlanet(path.id))?))
}
