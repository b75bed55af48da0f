use axum::extract::State;
use macros::route;

use crate::{
	extract::{Json, Path, Query},
	openapi::tag,
	route::model::IdInput,
	Database,
};

use super::{model, RouteError};

/// Get all favorites
/// Returns the favorites of every user, oldest first.
#[route(tag = tag::FAVORITE)]
pub async fn get_favorites(
	State(database): State<Database>,
) -> Result<Json<Vec<model::Favorite>>, RouteError> {
	let favorites = model::Favorite::all(&database).await?;

	Ok(Json(favorites))
}

/// Add favorite
/// Adds a character, planet or vehicle to a user's favorites.
#[route(tag = tag::FAVORITE)]
pub async fn create_favorite(
	State(database): State<Database>,
	Json(input): Json<model::CreateFavoriteInput>,
) -> Result<Json<model::Favorite>, RouteError> {
	let favorite =
		model::Favorite::add(&database, input.user_id, input.category, input.target_id).await?;

	tracing::info!(
		user = favorite.user_id,
		category = %favorite.category,
		monotonic_counter.favorites_added = 1,
		"added favorite"
	);

	Ok(Json(favorite))
}

/// Delete favorite
/// Removes a favorite by its unique id, returning the removed record.
#[route(tag = tag::FAVORITE)]
pub async fn delete_favorite(
	State(database): State<Database>,
	Path(path): Path<IdInput>,
) -> Result<Json<model::Favorite>, RouteError> {
	let favorite = model::Favorite::remove(&database, path.id).await?;

	Ok(Json(favorite))
}

/// Get user favorites
/// Returns the favorites of a single user, optionally limited to one category.
#[route(tag = tag::FAVORITE)]
pub async fn get_user_favorites(
	State(database): State<Database>,
	Path(path): Path<IdInput>,
	Query(query): Query<model::CategoryQuery>,
) -> Result<Json<Vec<model::Favorite>>, RouteError> {
	let favorites = model::Favorite::list_for_user(&database, path.id, query.category).await?;

	Ok(Json(favorites))
}

/// Add user favorite
/// Adds a character (`character` or `people`), planet or vehicle to the user's favorites.
#[route(tag = tag::FAVORITE)]
pub async fn add_user_favorite(
	State(database): State<Database>,
	Path(path): Path<model::UserFavoritePath>,
) -> Result<Json<model::Favorite>, RouteError> {
	let favorite = model::Favorite::add(&database, path.id, path.category, path.target_id).await?;

	tracing::info!(
		user = favorite.user_id,
		category = %favorite.category,
		monotonic_counter.favorites_added = 1,
		"added favorite"
	);

	Ok(Json(favorite))
}
