use aide::axum::{routing::post_with, ApiRouter};
use argon2::Argon2;
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

pub const KEY_LENGTH: usize = 32;

/// An error that can occur during authentication.
///
/// Note that the messages are presented to the client, so they should not contain
/// sensitive information.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid email or password")]
	InvalidEmailOrPassword,
	#[error("password hashing error: {0}")]
	Hash(#[from] argon2::Error),
	#[error("missing bearer token")]
	NoToken,
	#[error("invalid bearer token")]
	InvalidToken,
}

pub type RouteError = error::RouteError<Error>;

error::route_error!(Error);

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new().api_route(
		"/",
		post_with(create_token, create_token_docs).delete_with(delete_token, delete_token_docs),
	)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::InvalidEmailOrPassword | Self::NoToken | Self::InvalidToken => {
				StatusCode::UNAUTHORIZED
			}
			Self::Hash(..) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn message(&self) -> String {
		match self {
			Self::Hash(..) => "internal server error".into(),
			_ => self.to_string(),
		}
	}
}

/// Hashes a password with Argon2 using the user's random salt.
pub fn hash_password(
	hasher: &Argon2,
	password: &str,
	salt: &[u8],
) -> Result<[u8; KEY_LENGTH], argon2::Error> {
	let mut hash = [0; KEY_LENGTH];

	hasher.hash_password_into(password.as_bytes(), salt, &mut hash)?;
	Ok(hash)
}
