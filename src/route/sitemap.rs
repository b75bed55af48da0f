use std::sync::Arc;

use aide::{
	axum::{routing::get_with, ApiRouter},
	openapi::{OpenApi, ReferenceOr},
};
use axum::Extension;
use macros::route;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{extract::Json, AppState};

/// Every route served by the API.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Sitemap {
	pub routes: Vec<Route>,
}

#[derive(Debug, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Route {
	/// The HTTP method, such as `GET`.
	pub method: &'static str,
	/// The path, with parameters written as `{name}`.
	pub path: String,
}

impl Sitemap {
	/// Lists the operations of an `OpenAPI` document, ordered by path.
	pub fn from_api(api: &OpenApi) -> Self {
		let mut routes = Vec::new();

		for (path, item) in api.paths.iter().flat_map(|paths| &paths.paths) {
			let ReferenceOr::Item(item) = item else {
				continue;
			};

			// nested `/` routes are documented with a trailing slash
			let path = match path.trim_end_matches('/') {
				"" => "/",
				path => path,
			};

			let operations = [
				("GET", &item.get),
				("POST", &item.post),
				("PUT", &item.put),
				("PATCH", &item.patch),
				("DELETE", &item.delete),
			];

			routes.extend(
				operations
					.into_iter()
					.filter(|(_, operation)| operation.is_some())
					.map(|(method, _)| Route {
						method,
						path: path.to_owned(),
					}),
			);
		}

		routes.sort_by(|a, b| a.path.cmp(&b.path));

		Self { routes }
	}
}

pub fn routes() -> ApiRouter<AppState> {
	ApiRouter::new().api_route("/", get_with(get_sitemap, get_sitemap_docs))
}

/// Get sitemap
/// Lists every documented route with its method.
#[route]
pub async fn get_sitemap(Extension(api): Extension<Arc<OpenApi>>) -> Json<Sitemap> {
	Json(Sitemap::from_api(&api))
}

#[cfg(test)]
mod test {
	use crate::test::*;

	fn has_route(routes: &[Value], method: &str, path: &str) -> bool {
		routes
			.iter()
			.any(|route| route["method"] == method && route["path"] == path)
	}

	#[tokio::test]
	async fn test_sitemap_lists_routes() {
		let app = app().await;

		let response = app.get("/").await;

		assert_eq!(response.status_code(), 200);

		let body = response.json::<Value>();
		let routes = body["routes"].as_array().unwrap();

		assert!(has_route(routes, "GET", "/planet/{id}"));
		assert!(has_route(routes, "PUT", "/vehicle/{id}"));
		assert!(has_route(routes, "DELETE", "/favorite/{id}"));
		assert!(has_route(
			routes,
			"POST",
			"/user/{id}/favorite/{category}/{target_id}"
		));
		assert!(has_route(routes, "GET", "/"));
		assert!(has_route(routes, "GET", "/user"));
		assert!(has_route(routes, "POST", "/token"));
		assert!(has_route(routes, "DELETE", "/token"));
		assert!(has_route(routes, "GET", "/docs"));
	}

	#[tokio::test]
	async fn test_sitemap_paths_are_served() {
		let app = app().await;

		assert_eq!(app.get("/user").await.status_code(), 200);
		assert_eq!(app.get("/docs").await.status_code(), 200);
		assert_eq!(app.delete("/token").await.status_code(), 401);
	}
}
