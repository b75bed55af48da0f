use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown character {0}")]
	UnknownCharacter(i64),
}

pub type RouteError = error::RouteError<Error>;

error::route_error!(Error);

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/",
			get_with(get_people, get_people_docs).post_with(create_person, create_person_docs),
		)
		.api_route(
			"/:id",
			get_with(get_person, get_person_docs).put_with(update_person, update_person_docs),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownCharacter(..) => StatusCode::NOT_FOUND,
		}
	}
}
