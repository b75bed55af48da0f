use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A bearer token that authenticates requests on behalf of a user.
#[derive(Debug, Serialize, JsonSchema, sqlx::FromRow)]
pub struct Token {
	/// The token, sent as `Authorization: Bearer <token>`.
	#[serde(rename = "token")]
	pub id: Uuid,
	/// When the token was issued.
	pub created: DateTime<Utc>,
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct TokenInput {
	#[validate(email)]
	pub email: String,
	#[validate(length(min = 1, max = 128))]
	pub password: String,
}
