use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
	entity::{self, Entity},
	route::{
		character::model::Character, planet::model::Planet, user::model::User,
		vehicle::model::Vehicle,
	},
	Database,
};

use super::{Error, RouteError};

/// The kind of record a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Category {
	#[serde(alias = "people")]
	Character,
	Planet,
	Vehicle,
}

impl Category {
	/// The table holding the records of this category.
	pub fn table(self) -> &'static str {
		match self {
			Self::Character => Character::TABLE,
			Self::Planet => Planet::TABLE,
			Self::Vehicle => Vehicle::TABLE,
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.table())
	}
}

/// A record marking a character, planet or vehicle as one of a user's favorites.
///
/// Exactly one of `character_id`, `planet_id` or `vehicle_id` is present,
/// matching `category`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct Favorite {
	/// The unique identifier of the favorite.
	pub id: i64,
	/// The user that owns the favorite.
	pub user_id: i64,
	pub category: Category,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub character_id: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub planet_id: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vehicle_id: Option<i64>,
	/// When the favorite was added.
	pub created: DateTime<Utc>,
}

/// A row of the `favorite` table.
#[derive(sqlx::FromRow)]
struct Row {
	id: i64,
	user_id: i64,
	category: Category,
	target_id: i64,
	created: DateTime<Utc>,
}

impl From<Row> for Favorite {
	fn from(row: Row) -> Self {
		let target = |category| (row.category == category).then_some(row.target_id);

		Self {
			id: row.id,
			user_id: row.user_id,
			category: row.category,
			character_id: target(Category::Character),
			planet_id: target(Category::Planet),
			vehicle_id: target(Category::Vehicle),
			created: row.created,
		}
	}
}

impl Favorite {
	/// Adds `target_id` of `category` to the user's favorites.
	///
	/// Both the user and the target must exist, and the pair must not already be
	/// a favorite. The existence checks and the insert are a single statement,
	/// so the write lock is taken up front and the unique index is the only
	/// signal for a duplicate.
	pub async fn add(
		database: &Database,
		user_id: i64,
		category: Category,
		target_id: i64,
	) -> Result<Self, RouteError> {
		let sql = format!(
			r#"
				INSERT INTO favorite (user_id, category, target_id, created)
				SELECT ?, ?, ?, ?
				WHERE EXISTS (SELECT 1 FROM "user" WHERE id = ?)
					AND EXISTS (SELECT 1 FROM "{}" WHERE id = ?)
				RETURNING *
			"#,
			category.table()
		);

		let row = sqlx::query_as::<_, Row>(&sql)
			.bind(user_id)
			.bind(category)
			.bind(target_id)
			.bind(Utc::now())
			.bind(user_id)
			.bind(target_id)
			.fetch_optional(database)
			.await
			.map_err(|e| match e {
				sqlx::Error::Database(ref d) if d.is_unique_violation() => Error::Duplicate {
					user_id,
					category,
					target_id,
				}
				.into(),
				e => RouteError::from(e),
			})?;

		if let Some(row) = row {
			return Ok(row.into());
		}

		if !entity::exists(database, User::TABLE, user_id).await? {
			return Err(Error::UnknownUser(user_id).into());
		}

		Err(Error::UnknownTarget(category, target_id).into())
	}

	/// Deletes a favorite by id, returning the removed record.
	pub async fn remove(database: &Database, id: i64) -> Result<Self, RouteError> {
		let row = sqlx::query_as::<_, Row>("DELETE FROM favorite WHERE id = ? RETURNING *")
			.bind(id)
			.fetch_optional(database)
			.await?;

		Ok(row.ok_or(Error::UnknownFavorite(id))?.into())
	}

	/// Lists the favorites of a user, optionally limited to one category.
	pub async fn list_for_user(
		database: &Database,
		user_id: i64,
		category: Option<Category>,
	) -> Result<Vec<Self>, RouteError> {
		if !entity::exists(database, User::TABLE, user_id).await? {
			return Err(Error::UnknownUser(user_id).into());
		}

		let rows = sqlx::query_as::<_, Row>(
			r"
				SELECT * FROM favorite
				WHERE user_id = ? AND (? IS NULL OR category = ?)
				ORDER BY id
			",
		)
		.bind(user_id)
		.bind(category)
		.bind(category)
		.fetch_all(database)
		.await?;

		Ok(rows.into_iter().map(Self::from).collect())
	}

	/// Lists every favorite of every user.
	pub async fn all(database: &Database) -> Result<Vec<Self>, sqlx::Error> {
		let rows = sqlx::query_as::<_, Row>("SELECT * FROM favorite ORDER BY id")
			.fetch_all(database)
			.await?;

		Ok(rows.into_iter().map(Self::from).collect())
	}
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct CreateFavoriteInput {
	/// The user that owns the favorite.
	pub user_id: i64,
	pub category: Category,
	/// The id of the character, planet or vehicle.
	pub target_id: i64,
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct UserFavoritePath {
	/// The unique identifier of the user.
	pub id: i64,
	pub category: Category,
	/// The id of the character, planet or vehicle.
	pub target_id: i64,
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct CategoryQuery {
	/// Only return favorites of this category.
	pub category: Option<Category>,
}
