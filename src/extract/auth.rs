use aide::OperationInput;
use axum::{
	extract::{FromRef, FromRequestParts},
	http::{header, request},
};
use uuid::Uuid;

use crate::{
	error::RouteError,
	openapi::SECURITY_SCHEME_BEARER,
	route::{auth, user::model::User},
	Database,
};

pub const AUTHORIZATION_PREFIX: &str = "Bearer ";

/// Extracts the bearer token and the user that owns it.
///
/// If the `Authorization` header is missing, a [`auth::Error::NoToken`] is returned.
/// If the token is malformed or unknown, a [`auth::Error::InvalidToken`] is returned.
///
/// ```rust
/// async fn route(auth: Auth) {
///   println!("{:?}", auth.user);
/// }
/// ```
#[derive(Debug)]
pub struct Auth {
	pub token: Uuid,
	pub user: User,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Auth
where
	Database: FromRef<S>,
	S: Sync + Send,
{
	type Rejection = RouteError<auth::Error>;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let header = parts
			.headers
			.get(header::AUTHORIZATION)
			.ok_or(auth::Error::NoToken)?;

		let token = header
			.to_str()
			.ok()
			.and_then(|value| value.strip_prefix(AUTHORIZATION_PREFIX))
			.and_then(|value| Uuid::parse_str(value.trim()).ok())
			.ok_or(auth::Error::InvalidToken)?;

		let database = Database::from_ref(state);
		let user = sqlx::query_as::<_, User>(
			r#"
				SELECT "user".* FROM "user"
				INNER JOIN token ON token.user_id = "user".id
				WHERE token.id = ?
			"#,
		)
		.bind(token)
		.fetch_optional(&database)
		.await?;

		let user = user.ok_or(auth::Error::InvalidToken)?;

		Ok(Self { token, user })
	}
}

impl OperationInput for Auth {
	/// Adds a bearer token requirement to the `OpenAPI` operation.
	fn operation_input(_ctx: &mut aide::gen::GenContext, operation: &mut aide::openapi::Operation) {
		operation.security.push(
			[(SECURITY_SCHEME_BEARER.to_string(), Vec::new())]
				.into_iter()
				.collect(),
		);
	}
}
