use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown vehicle {0}")]
	UnknownVehicle(i64),
}

pub type RouteError = error::RouteError<Error>;

error::route_error!(Error);

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/",
			get_with(get_vehicles, get_vehicles_docs).post_with(create_vehicle, create_vehicle_docs),
		)
		.api_route(
			"/:id",
			get_with(get_vehicle, get_vehicle_docs).put_with(update_vehicle, update_vehicle_docs),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownVehicle(..) => StatusCode::NOT_FOUND,
		}
	}
}
