use aide::axum::ApiRouter;

use crate::AppState;

pub mod auth;
pub mod character;
pub mod docs;
pub mod favorite;
pub mod model;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod vehicle;

pub fn routes() -> ApiRouter<AppState> {
	ApiRouter::new()
		.merge(sitemap::routes())
		.nest("/user", user::routes())
		.nest("/people", character::routes())
		.nest("/planet", planet::routes())
		.nest("/vehicle", vehicle::routes())
		.nest("/favorite", favorite::routes())
		.nest("/token", auth::routes())
		.nest("/docs", docs::routes())
}
