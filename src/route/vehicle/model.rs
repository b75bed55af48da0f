use chrono::{DateTime, Utc};
use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{entity::Entity, Database};

/// A vehicle, such as a speeder or a walker.
#[model]
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, sqlx::FromRow)]
pub struct Vehicle {
	/// The unique identifier of the vehicle.
	#[serde(skip_deserializing)]
	pub id: i64,
	#[validate(length(min = 1, max = 250))]
	pub name: String,
	#[validate(length(min = 1, max = 250))]
	pub model: String,
	#[validate(length(min = 1, max = 250))]
	pub manufacturer: String,
	#[validate(range(min = 0))]
	pub cost_in_credits: i64,
	/// Length in meters.
	#[validate(range(min = 0))]
	pub length: i64,
	/// Maximum cargo in kilograms.
	#[validate(range(min = 0))]
	pub cargo_capacity: i64,
	/// Personnel needed to run or pilot the vehicle.
	#[validate(range(min = 0))]
	pub crew: Option<i64>,
	#[validate(range(min = 0))]
	pub passengers: Option<i64>,
	pub hyperdrive_rating: Option<f64>,
	/// The creation time of the record.
	#[serde(skip_deserializing)]
	pub created: DateTime<Utc>,
	/// The last time the record was changed.
	#[serde(skip_deserializing)]
	pub edited: DateTime<Utc>,
}

impl Entity for Vehicle {
	const TABLE: &'static str = "vehicle";
}

impl Vehicle {
	pub async fn create(
		database: &Database,
		input: CreateVehicleInput,
	) -> Result<Self, sqlx::Error> {
		let now = Utc::now();

		sqlx::query_as(
			r"
				INSERT INTO vehicle (
					name, model, manufacturer, cost_in_credits, length, cargo_capacity,
					crew, passengers, hyperdrive_rating, created, edited
				)
				VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
				RETURNING *
			",
		)
		.bind(input.name)
		.bind(input.model)
		.bind(input.manufacturer)
		.bind(input.cost_in_credits)
		.bind(input.length)
		.bind(input.cargo_capacity)
		.bind(input.crew)
		.bind(input.passengers)
		.bind(input.hyperdrive_rating)
		.bind(now)
		.bind(now)
		.fetch_one(database)
		.await
	}

	pub async fn update(
		database: &Database,
		id: i64,
		input: UpdateVehicleInput,
	) -> Result<Option<Self>, sqlx::Error> {
		sqlx::query_as(
			r"
				UPDATE vehicle
				SET
					name = COALESCE(?, name),
					model = COALESCE(?, model),
					manufacturer = COALESCE(?, manufacturer),
					cost_in_credits = COALESCE(?, cost_in_credits),
					length = COALESCE(?, length),
					cargo_capacity = COALESCE(?, cargo_capacity),
					crew = COALESCE(?, crew),
					passengers = COALESCE(?, passengers),
					hyperdrive_rating = COALESCE(?, hyperdrive_rating),
					edited = ?
				WHERE id = ?
				RETURNING *
			",
		)
		.bind(input.name)
		.bind(input.model)
		.bind(input.manufacturer)
		.bind(input.cost_in_credits)
		.bind(input.length)
		.bind(input.cargo_capacity)
		.bind(input.crew)
		.bind(input.passengers)
		.bind(input.hyperdrive_rating)
		.bind(Utc::now())
		.bind(id)
		.fetch_optional(database)
		.await
	}
}
