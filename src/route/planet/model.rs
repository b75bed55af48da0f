use chrono::{DateTime, Utc};
use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{entity::Entity, Database};

/// A planet.
#[model]
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, sqlx::FromRow)]
pub struct Planet {
	/// The unique identifier of the planet.
	#[serde(skip_deserializing)]
	pub id: i64,
	#[validate(length(min = 1, max = 250))]
	pub name: String,
	/// Standard days in a year on this planet.
	#[validate(range(min = 0))]
	pub orbital_period: i64,
	/// Relative to standard gravity, such as `1 standard`.
	#[validate(length(min = 1, max = 250))]
	pub gravity: String,
	#[validate(range(min = 0))]
	pub population: i64,
	#[validate(length(min = 1, max = 250))]
	pub climate: String,
	/// The creation time of the record.
	#[serde(skip_deserializing)]
	pub created: DateTime<Utc>,
	/// The last time the record was changed.
	#[serde(skip_deserializing)]
	pub edited: DateTime<Utc>,
}

impl Entity for Planet {
	const TABLE: &'static str = "planet";
}

impl Planet {
	pub async fn create(database: &Database, input: CreatePlanetInput) -> Result<Self, sqlx::Error> {
		let now = Utc::now();

		sqlx::query_as(
			r"
				INSERT INTO planet (
					name, orbital_period, gravity, population, climate, created, edited
				)
				VALUES (?, ?, ?, ?, ?, ?, ?)
				RETURNING *
			",
		)
		.bind(input.name)
		.bind(input.orbital_period)
		.bind(input.gravity)
		.bind(input.population)
		.bind(input.climate)
		.bind(now)
		.bind(now)
		.fetch_one(database)
		.await
	}

	pub async fn update(
		database: &Database,
		id: i64,
		input: UpdatePlanetInput,
	) -> Result<Option<Self>, sqlx::Error> {
		sqlx::query_as(
			r"
				UPDATE planet
				SET
					name = COALESCE(?, name),
					orbital_period = COALESCE(?, orbital_period),
					gravity = COALESCE(?, gravity),
					population = COALESCE(?, population),
					climate = COALESCE(?, climate),
					edited = ?
				WHERE id = ?
				RETURNING *
			",
		)
		.bind(input.name)
		.bind(input.orbital_period)
		.bind(input.gravity)
		.bind(input.population)
		.bind(input.climate)
		.bind(Utc::now())
		.bind(id)
		.fetch_optional(database)
		.await
	}
}
