//! Error types for the passport server.
//!
//! This module provides the error handling system for the server, with specialized error types
//! for each domain (configuration, game path, pilot lookups, photos). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their `Display` and `Error`
//! implementations.

pub mod config;
pub mod game_path;
pub mod photo;
pub mod pilot;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, game_path::GamePathError, photo::PhotoError, pilot::PilotError,
    },
};

/// Main error type for the passport server.
///
/// Aggregates the domain-specific error types and external library errors into one type so
/// handlers and services can use `?` throughout. The `IntoResponse` implementation maps each
/// variant to the HTTP response the client expects.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables, missing home directory).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Game path error (no path, missing `cp.db`, no game configured).
    #[error(transparent)]
    GamePathError(#[from] GamePathError),
    /// Pilot lookup error (missing identifier, unknown pilot or career).
    #[error(transparent)]
    PilotError(#[from] PilotError),
    /// Photo upload error (missing fields, undecodable image).
    #[error(transparent)]
    PhotoError(#[from] PhotoError),
    /// Internal error indicating a bug in the passport's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, unexpected schema).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Filesystem error (settings file, photo directory, rank artwork copy).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Settings file could not be encoded or decoded.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing parameters, no game configured, invalid photo data
/// - 404 Not Found - Unknown pilot or career, `cp.db` missing from the submitted path
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::GamePathError(err) => err.into_response(),
            Self::PilotError(err) => err.into_response(),
            Self::PhotoError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

#[cfg(test)]
impl From<passport_test_utils::TestError> for Error {
    fn from(err: passport_test_utils::TestError) -> Self {
        Self::InternalError(err.to_string())
    }
}

/// Builds a JSON error response with the given status and client-facing message.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking filesystem paths or database details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
