use axum::extract::State;
use macros::route;
use uuid::Uuid;

use crate::{
	extract::{Auth, Json},
	openapi::tag,
	route::user::model::User,
	AppState, Database,
};

use super::{hash_password, model, Error, RouteError};

/// Create token
/// Exchanges an email and password for a bearer token.
#[route(tag = tag::AUTH, response(status = 200, description = "Token issued.", shape = "Json<model::Token>"))]
pub async fn create_token(
	State(state): State<AppState>,
	Json(input): Json<model::TokenInput>,
) -> Result<Json<model::Token>, RouteError> {
	let user = User::fetch_by_email(&state.database, &input.email)
		.await?
		.ok_or(Error::InvalidEmailOrPassword)?;

	let hashed =
		hash_password(&state.hasher, &input.password, &user.salt).map_err(Error::Hash)?;

	if user.password != hashed {
		return Err(Error::InvalidEmailOrPassword.into());
	}

	let token = sqlx::query_as::<_, model::Token>(
		"INSERT INTO token (id, user_id, created) VALUES (?, ?, ?) RETURNING *",
	)
	.bind(Uuid::new_v4())
	.bind(user.id)
	.bind(chrono::Utc::now())
	.fetch_one(&state.database)
	.await?;

	tracing::info!(user = user.id, monotonic_counter.tokens_issued = 1, "issued token");

	Ok(Json(token))
}

/// Revoke token
/// Revokes the bearer token used to authenticate this request.
#[route(tag = tag::AUTH)]
pub async fn delete_token(
	State(database): State<Database>,
	auth: Auth,
) -> Result<(), RouteError> {
	sqlx::query("DELETE FROM token WHERE id = ?")
		.bind(auth.token)
		.execute(&database)
		.await?;

	Ok(())
}
