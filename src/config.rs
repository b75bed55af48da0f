use std::{fmt::Display, net::IpAddr, str::FromStr};

use tracing::Level;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://starwars.db";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid value for environment variable {var}: {reason}")]
	InvalidEnvValue { var: &'static str, reason: String },
}

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub host: IpAddr,
	pub port: u16,
	pub log_level: Level,
	/// When set, traces and metrics are also exported over OTLP.
	pub otlp_endpoint: Option<String>,
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		Ok(Self {
			database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
			host: parse(&lookup, "HOST")?.unwrap_or(IpAddr::from([0, 0, 0, 0])),
			port: parse(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT),
			log_level: parse(&lookup, "LOG_LEVEL")?.unwrap_or(Level::INFO),
			otlp_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|value| !value.is_empty()),
		})
	}
}

fn parse<T>(
	lookup: &impl Fn(&str) -> Option<String>,
	var: &'static str,
) -> Result<Option<T>, ConfigError>
where
	T: FromStr,
	T::Err: Display,
{
	lookup(var)
		.map(|value| {
			value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
				var,
				reason: e.to_string(),
			})
		})
		.transpose()
}
