#![warn(clippy::pedantic)]

mod config;
mod entity;
mod error;
mod extract;
mod openapi;
mod route;
#[cfg(test)]
mod test;
mod trace;

use std::{str::FromStr, sync::Arc};

use aide::openapi::OpenApi;
use argon2::Argon2;
use axum::{extract::Request, Extension, Router, ServiceExt};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::Layer;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	normalize_path::NormalizePathLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};

pub type Database = sqlx::Pool<sqlx::Sqlite>;
pub type AppState = State;

/// The shared application state.
///
/// This contains every dependency handlers need to access: the database
/// connection pool and the password hasher.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub database: Database,
	pub hasher: Argon2<'static>,
}

/// Builds the router with generated documentation and middleware attached.
pub fn app(state: State) -> Router {
	let mut api = OpenApi::default();

	route::routes()
		.finish_api_with(&mut api, openapi::docs)
		.layer(Extension(Arc::new(api)))
		.layer(CompressionLayer::new())
		.layer(CorsLayer::permissive())
		.layer(PropagateRequestIdLayer::x_request_id())
		.layer(TraceLayer::new_for_http())
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.with_state(state)
}

/// Opens the database, creating the file if needed, and applies migrations.
pub async fn connect(url: &str) -> Result<Database, sqlx::Error> {
	let options = SqliteConnectOptions::from_str(url)?
		.create_if_missing(true)
		.foreign_keys(true);

	let database = SqlitePoolOptions::new().connect_with(options).await?;

	sqlx::migrate!().run(&database).await?;

	Ok(database)
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		tracing::error!(%error, "failed to listen for shutdown signal");
	}

	tracing::info!("shutting down");
}

#[tokio::main]
async fn main() {
	dotenvy::dotenv().ok();

	let config = config::Config::from_env().expect("invalid configuration");
	let _guard = trace::init_tracing_subscriber(&config).expect("failed to initialize tracing");

	let state = State {
		database: connect(&config.database_url)
			.await
			.expect("failed to connect to database"),
		hasher: Argon2::default(),
	};

	let app = NormalizePathLayer::trim_trailing_slash().layer(app(state));

	let listener = tokio::net::TcpListener::bind((config.host, config.port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on {}:{}", config.host, config.port);

	axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
		.with_graceful_shutdown(shutdown_signal())
		.await
		.expect("server error");
}
