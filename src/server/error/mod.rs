//! Error types for the holocron server.
//!
//! Client-caused failures (`RequestError`, rejected JSON bodies and failed writes) are mapped
//! to 4xx responses carrying a readable message. Everything else is logged and reported as a
//! generic 500 so implementation details never reach the client.

pub mod config;
pub mod request;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, request::RequestError},
};

/// Main error type for the holocron server.
///
/// Uses `thiserror`'s `#[from]` attribute to enable automatic conversion from underlying error
/// types via the `?` operator. A plain `?` on a database call yields [`Error::DbErr`]; writes
/// whose failure should be reported to the client are mapped to [`Error::Storage`] explicitly.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Validation failure or missing resource caused by the request.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Request body could not be parsed as the expected JSON document.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Path parameter could not be parsed, such as a non-numeric ID.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
    /// Insert or delete rejected by the database, such as a constraint violation.
    ///
    /// The transaction has already been rolled back when this is returned.
    #[error("{0}")]
    Storage(sea_orm::DbErr),
    /// Database error outside of a write (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing fields, malformed body, unknown referenced resource or a
///   rejected write (body carries the database error text)
/// - 404 Not Found - Resource requested by ID does not exist or the ID is not a number
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);

                bad_request(rejection.body_text())
            }
            Self::PathRejection(rejection) => {
                tracing::debug!("Rejected path parameter: {}", rejection);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: rejection.body_text(),
                    }),
                )
                    .into_response()
            }
            Self::Storage(err) => {
                tracing::debug!("Database rejected write: {}", err);

                bad_request(err.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// 400 Bad Request with the provided message as the `error` field.
pub(crate) fn bad_request(error: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
