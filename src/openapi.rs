use aide::{
	openapi::{ApiKeyLocation, SecurityScheme, Tag},
	transform::TransformOpenApi,
};
use axum::http::{header, StatusCode};

use crate::{error, extract::Json};

pub const SECURITY_SCHEME_BEARER: &str = "Bearer Token";

pub mod tag {
	pub const AUTH: &str = "Auth";
	pub const USER: &str = "User";
	pub const CHARACTER: &str = "Character";
	pub const PLANET: &str = "Planet";
	pub const VEHICLE: &str = "Vehicle";
	pub const FAVORITE: &str = "Favorite";
}

fn tag(name: &str, description: &str) -> Tag {
	Tag {
		name: name.into(),
		description: Some(description.into()),
		..Default::default()
	}
}

pub fn docs(api: TransformOpenApi) -> TransformOpenApi {
	api.title("Holonet API")
		.summary("Characters, planets and vehicles of a galaxy far, far away")
		.description(include_str!("../README.md"))
		.tag(tag(tag::AUTH, "Token issuance and revocation"))
		.tag(tag(tag::USER, "User accounts"))
		.tag(tag(tag::CHARACTER, "People of the galaxy"))
		.tag(tag(tag::PLANET, "Planets"))
		.tag(tag(tag::VEHICLE, "Vehicles"))
		.tag(tag(tag::FAVORITE, "Per-user favorite characters, planets and vehicles"))
		.security_scheme(
			SECURITY_SCHEME_BEARER,
			SecurityScheme::ApiKey {
				location: ApiKeyLocation::Header,
				name: header::AUTHORIZATION.as_str().into(),
				description: Some("A token from `POST /token`, sent as `Bearer <token>`".into()),
				extensions: Default::default(),
			},
		)
		.default_response_with::<Json<error::Message>, _>(|res| {
			res.example(error::Message::new(
				StatusCode::NOT_FOUND,
				"unknown planet 9999",
			))
		})
}
