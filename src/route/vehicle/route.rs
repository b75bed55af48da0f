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

/// Get all vehicles
/// Returns every vehicle, in insertion order.
#[route(tag = tag::VEHICLE)]
pub async fn get_vehicles(
	State(database): State<Database>,
) -> Result<Json<Vec<model::Vehicle>>, RouteError> {
	let vehicles = entity::fetch_all::<model::Vehicle>(&database).await?;

	Ok(Json(vehicles))
}

/// Get single vehicle
/// Returns a single vehicle by its unique id.
#[route(tag = tag::VEHICLE)]
pub async fn get_vehicle(
	State(database): State<Database>,
	Path(path): Path<IdInput>,
) -> Result<Json<model::Vehicle>, RouteError> {
	let vehicle = entity::fetch::<model::Vehicle>(&database, path.id).await?;

	Ok(Json(vehicle.ok_or(Error::UnknownVehicle(path.id))?))
}

/// Create vehicle
/// Creates a new vehicle.
#[route(tag = tag::VEHICLE)]
pub async fn create_vehicle(
	State(database): State<Database>,
	Json(input): Json<model::CreateVehicleInput>,
) -> Result<Json<model::Vehicle>, RouteError> {
	let vehicle = model::Vehicle::create(&database, input).await?;

	Ok(Json(vehicle))
}

/// Update vehicle
/// Updates the provided fields of an existing vehicle. Omitted fields keep their value.
#[route(tag = tag::VEHICLE)]
pub async fn update_vehicle(
	State(database): State<Database>,
	Path(path): Path<IdInput>,
	Json(input): Json<model::UpdateVehicleInput>,
) -> Result<Json<model::Vehicle>, RouteError> {
	let vehicle = model::Vehicle::update(&database, path.id, input).await?;

	Ok(Json(vehicle.ok_or(Error::UnknownVehicle(path.id))?))
}
