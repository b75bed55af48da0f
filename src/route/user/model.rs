use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{entity::Entity, Database};

/// A single user.
#[derive(Debug, Serialize, JsonSchema, sqlx::FromRow)]
pub struct User {
	/// The unique identifier of the user.
	pub id: i64,
	pub first_name: String,
	pub last_name: String,
	/// The user's email address, used to obtain tokens.
	pub email: String,
	/// The hashed password.
	#[serde(skip)]
	pub password: Vec<u8>,
	/// The per-user salt used when hashing the password.
	#[serde(skip)]
	pub salt: Vec<u8>,
	/// When the user registered.
	pub join_date: DateTime<Utc>,
}

impl Entity for User {
	const TABLE: &'static str = "user";
}

impl User {
	/// Inserts a new user with an already hashed password.
	pub async fn create(
		database: &Database,
		input: &CreateUserInput,
		password: &[u8],
		salt: &[u8],
	) -> Result<Self, sqlx::Error> {
		sqlx::query_as(
			r#"
				INSERT INTO "user" (first_name, last_name, email, password, salt, join_date)
				VALUES (?, ?, ?, ?, ?, ?)
				RETURNING *
			"#,
		)
		.bind(&input.first_name)
		.bind(&input.last_name)
		.bind(&input.email)
		.bind(password)
		.bind(salt)
		.bind(Utc::now())
		.fetch_one(database)
		.await
	}

	pub async fn fetch_by_email(
		database: &Database,
		email: &str,
	) -> Result<Option<Self>, sqlx::Error> {
		sqlx::query_as(r#"SELECT * FROM "user" WHERE email = ?"#)
			.bind(email)
			.fetch_optional(database)
			.await
	}
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct CreateUserInput {
	#[validate(length(min = 1, max = 250))]
	pub first_name: String,
	#[validate(length(min = 1, max = 250))]
	pub last_name: String,
	#[validate(email, length(max = 250))]
	pub email: String,
	#[validate(length(min = 8, max = 128))]
	pub password: String,
}
