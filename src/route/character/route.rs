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

/// Get all people
/// Returns every character, in insertion order.
#[route(tag = tag::CHARACTER)]
pub async fn get_people(
	State(database): State<Database>,
) -> Result<Json<Vec<model::Character>>, RouteError> {
	let people = entity::fetch_all::<model::Character>(&database).await?;

	Ok(Json(people))
}

/// Get single person
/// Returns a single character by its unique id.
#[route(tag = tag::CHARACTER)]
pub async fn get_person(
	State(database): State<Database>,
	Path(path): Path<IdInput>,
) -> Result<Json<model::Character>, RouteError> {
	let person = entity::fetch::<model::Character>(&database, path.id).await?;

	Ok(Json(person.ok_or(Error::UnknownCharacter(path.id))?))
}

/// Create person
/// Creates a new character.
#[route(tag = tag::CHARACTER)]
pub async fn create_person(
	State(database): State<Database>,
	Json(input): Json<model::CreateCharacterInput>,
) -> Result<Json<model::Character>, RouteError> {
	let person = model::Character::create(&database, input).await?;

	Ok(Json(person))
}

/// Update person
/// Updates the provided fields of an existing character. Omitted fields keep their value.
#[route(tag = tag::CHARACTER)]
pub async fn update_person(
	State(database): State<Database>,
	Path(path): Path<IdInput>,
	Json(input): Json<model::UpdateCharacterInput>,
) -> Result<Json<model::Character>, RouteError> {
	let person = model::Character::update(&database, path.id, input).await?;

	Ok(Json(person.ok_or(Error::UnknownCharacter(path.id))?))
}
