//! Storage access shared by every entity table.

use sqlx::{sqlite::SqliteRow, FromRow, SqliteExecutor};

use crate::Database;

/// A record type stored in its own table, keyed by `id INTEGER PRIMARY KEY`.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
	const TABLE: &'static str;
}

/// Fetches a single record by id.
pub async fn fetch<T: Entity>(database: &Database, id: i64) -> Result<Option<T>, sqlx::Error> {
	let sql = format!(r#"SELECT * FROM "{}" WHERE id = ?"#, T::TABLE);

	sqlx::query_as::<_, T>(&sql)
		.bind(id)
		.fetch_optional(database)
		.await
}

/// Fetches every record, in insertion order.
pub async fn fetch_all<T: Entity>(database: &Database) -> Result<Vec<T>, sqlx::Error> {
	let sql = format!(r#"SELECT * FROM "{}" ORDER BY id"#, T::TABLE);

	sqlx::query_as::<_, T>(&sql).fetch_all(database).await
}

/// Whether a row with the given id exists in `table`.
pub async fn exists<'e, E>(executor: E, table: &str, id: i64) -> Result<bool, sqlx::Error>
where
	E: SqliteExecutor<'e>,
{
	let sql = format!(r#"SELECT COUNT(*) FROM "{table}" WHERE id = ?"#);
	let count = sqlx::query_scalar::<_, i64>(&sql)
		.bind(id)
		.fetch_one(executor)
		.await?;

	Ok(count > 0)
}
