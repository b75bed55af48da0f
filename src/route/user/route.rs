use axum::extract::State;
use macros::route;
use uuid::Uuid;

use crate::{
	entity,
	extract::{Auth, Json, Path},
	openapi::tag,
	route::{auth, model::IdInput},
	AppState, Database,
};

use super::{model, Error, RouteError};

/// Get all users
/// Returns every user, in registration order.
#[route(tag = tag::USER)]
pub async fn get_users(
	State(database): State<Database>,
) -> Result<Json<Vec<model::User>>, RouteError> {
	let users = entity::fetch_all::<model::User>(&database).await?;

	Ok(Json(users))
}

/// Get single user
/// Returns a single user by their unique id.
#[route(tag = tag::USER)]
pub async fn get_user(
	State(database): State<Database>,
	Path(path): Path<IdInput>,
) -> Result<Json<model::User>, RouteError> {
	let user = entity::fetch::<model::User>(&database, path.id).await?;

	Ok(Json(user.ok_or(Error::UnknownUser(path.id))?))
}

/// Create user
/// Registers a new user. The password is hashed and never returned.
#[route(tag = tag::USER)]
pub async fn create_user(
	State(state): State<AppState>,
	Json(input): Json<model::CreateUserInput>,
) -> Result<Json<model::User>, RouteError> {
	let salt = Uuid::new_v4();
	let password = auth::hash_password(&state.hasher, &input.password, salt.as_bytes())
		.map_err(Error::Hash)?;

	let user = model::User::create(&state.database, &input, &password, salt.as_bytes())
		.await
		.map_err(|e| match e {
			sqlx::Error::Database(ref d) if d.is_unique_violation() => Error::EmailTaken.into(),
			e => RouteError::from(e),
		})?;

	tracing::info!(user = user.id, "registered user");

	Ok(Json(user))
}

/// Get own user
/// Returns the user that owns the bearer token.
#[route(tag = tag::USER)]
pub async fn get_me(auth: Auth) -> Json<model::User> {
	Json(auth.user)
}
