use axum::{
	body::Body,
	extract::rejection::{JsonRejection, PathRejection, QueryRejection},
	http::{Response, StatusCode},
	response::IntoResponse,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct Message {
	/// A human-readable description of the error.
	pub message: String,
	/// The HTTP status code, repeated for clients that only see the body.
	pub status_code: u16,
}

impl Message {
	pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			status_code: status.as_u16(),
		}
	}
}

/// Describes how an error is presented to the client.
///
/// The `Display` output is used as the message by default, so it must not
/// contain sensitive information unless [`ErrorShape::message`] is overridden.
pub trait ErrorShape: std::fmt::Display {
	fn status(&self) -> StatusCode;

	fn message(&self) -> String {
		self.to_string()
	}
}

/// Errors shared by every route: malformed input and storage failures.
///
/// The Display trait is not sent to the client for server errors, so it can
/// show sensitive information.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("{}", describe_validation(.0))]
	Validation(#[from] validator::ValidationErrors),
	#[error("{}", .0.body_text())]
	Json(#[from] JsonRejection),
	#[error("{}", .0.body_text())]
	Query(#[from] QueryRejection),
	#[error("{}", .0.body_text())]
	Path(#[from] PathRejection),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

fn describe_validation(errors: &validator::ValidationErrors) -> String {
	let mut messages = errors
		.field_errors()
		.into_iter()
		.flat_map(|(field, errors)| {
			errors
				.iter()
				.map(move |error| format!("invalid field `{field}`: {}", error.code))
		})
		.collect::<Vec<_>>();

	// field_errors is backed by a HashMap
	messages.sort();
	messages.join(", ")
}

impl ErrorShape for AppError {
	fn status(&self) -> StatusCode {
		match self {
			Self::Validation(..) | Self::Json(..) | Self::Query(..) | Self::Path(..) => {
				StatusCode::BAD_REQUEST
			}
			Self::Database(..) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn message(&self) -> String {
		match self {
			Self::Database(..) => "internal server error".into(),
			_ => self.to_string(),
		}
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response<Body> {
		respond(&self)
	}
}

/// The error type returned by route handlers, combining the route module's
/// own error `T` with the application-wide [`AppError`].
#[derive(Debug)]
pub enum RouteError<T> {
	App(AppError),
	Route(T),
}

impl<T> From<AppError> for RouteError<T> {
	fn from(error: AppError) -> Self {
		Self::App(error)
	}
}

impl<T> From<sqlx::Error> for RouteError<T> {
	fn from(error: sqlx::Error) -> Self {
		Self::App(AppError::Database(error))
	}
}

impl<T> From<validator::ValidationErrors> for RouteError<T> {
	fn from(error: validator::ValidationErrors) -> Self {
		Self::App(AppError::Validation(error))
	}
}

/// Implements `From<$error>` for `RouteError<$error>`.
///
/// This cannot be a blanket impl since it would overlap with the
/// conversions from [`AppError`] and [`sqlx::Error`].
macro_rules! route_error {
	($error:ty) => {
		impl From<$error> for $crate::error::RouteError<$error> {
			fn from(error: $error) -> Self {
				Self::Route(error)
			}
		}
	};
}

pub(crate) use route_error;

impl<T: ErrorShape> IntoResponse for RouteError<T> {
	fn into_response(self) -> Response<Body> {
		match self {
			Self::App(error) => respond(&error),
			Self::Route(error) => respond(&error),
		}
	}
}

impl<T> aide::OperationOutput for RouteError<T> {
	type Inner = Message;
}

fn respond(error: &impl ErrorShape) -> Response<Body> {
	let status = error.status();

	if status.is_server_error() {
		tracing::error!(%error, "request failed");
	} else {
		tracing::debug!(%error, status = status.as_u16(), "request rejected");
	}

	(
		status,
		axum::Json(Message::new(status, error.message())),
	)
		.into_response()
}

#[cfg(test)]
mod test {
	use validator::Validate;

	use super::*;

	#[derive(Validate)]
	struct Input {
		#[validate(length(min = 1))]
		name: String,
		#[validate(range(min = 0))]
		population: i64,
	}

	#[test]
	fn test_validation_message_lists_fields() {
		let errors = Input {
			name: String::new(),
			population: -1,
		}
		.validate()
		.unwrap_err();

		let error = AppError::from(errors);

		assert_eq!(error.status(), StatusCode::BAD_REQUEST);
		assert_eq!(
			error.message(),
			"invalid field `name`: length, invalid field `population`: range"
		);
	}

	#[test]
	fn test_database_message_is_hidden() {
		let error = AppError::from(sqlx::Error::RowNotFound);

		assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(error.message(), "internal server error");
	}
}
