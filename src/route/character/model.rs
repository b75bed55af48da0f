use chrono::{DateTime, Utc};
use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{entity::Entity, Database};

/// A person of the galaxy.
#[model]
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, sqlx::FromRow)]
pub struct Character {
	/// The unique identifier of the character.
	#[serde(skip_deserializing)]
	pub id: i64,
	/// The name of the character.
	#[validate(length(min = 1, max = 250))]
	pub name: String,
	pub hair_color: Option<String>,
	pub skin_color: Option<String>,
	pub eye_color: Option<String>,
	/// The birth year relative to the Battle of Yavin, such as `19BBY`.
	#[validate(length(min = 1, max = 250))]
	pub birth_year: String,
	pub gender: Option<String>,
	/// Height in centimeters.
	pub height: Option<String>,
	/// Mass in kilograms.
	pub mass: Option<String>,
	/// The name of the character's home planet.
	pub homeworld: Option<String>,
	/// The creation time of the record.
	#[serde(skip_deserializing)]
	pub created: DateTime<Utc>,
	/// The last time the record was changed.
	#[serde(skip_deserializing)]
	pub edited: DateTime<Utc>,
}

impl Entity for Character {
	const TABLE: &'static str = "character";
}

impl Character {
	pub async fn create(
		database: &Database,
		input: CreateCharacterInput,
	) -> Result<Self, sqlx::Error> {
		let now = Utc::now();

		sqlx::query_as(
			r"
				INSERT INTO character (
					name, hair_color, skin_color, eye_color, birth_year,
					gender, height, mass, homeworld, created, edited
				)
				VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
				RETURNING *
			",
		)
		.bind(input.name)
		.bind(input.hair_color)
		.bind(input.skin_color)
		.bind(input.eye_color)
		.bind(input.birth_year)
		.bind(input.gender)
		.bind(input.height)
		.bind(input.mass)
		.bind(input.homeworld)
		.bind(now)
		.bind(now)
		.fetch_one(database)
		.await
	}

	/// Applies the provided fields and bumps `edited`. Returns `None` if no
	/// character has the id.
	pub async fn update(
		database: &Database,
		id: i64,
		input: UpdateCharacterInput,
	) -> Result<Option<Self>, sqlx::Error> {
		sqlx::query_as(
			r"
				UPDATE character
				SET
					name = COALESCE(?, name),
					hair_color = COALESCE(?, hair_color),
					skin_color = COALESCE(?, skin_color),
					eye_color = COALESCE(?, eye_color),
					birth_year = COALESCE(?, birth_year),
					gender = COALESCE(?, gender),
					height = COALESCE(?, height),
					mass = COALESCE(?, mass),
					homeworld = COALESCE(?, homeworld),
					edited = ?
				WHERE id = ?
				RETURNING *
			",
		)
		.bind(input.name)
		.bind(input.hair_color)
		.bind(input.skin_color)
		.bind(input.eye_color)
		.bind(input.birth_year)
		.bind(input.gender)
		.bind(input.height)
		.bind(input.mass)
		.bind(input.homeworld)
		.bind(Utc::now())
		.bind(id)
		.fetch_optional(database)
		.await
	}
}
