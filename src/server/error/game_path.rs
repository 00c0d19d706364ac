use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum GamePathError {
    #[error("No game path provided")]
    NoPathProvided,
    #[error("Career database not found at {0:?}")]
    DatabaseNotFound(PathBuf),
    #[error("No IL-2 installation is configured")]
    NotConfigured,
}

impl IntoResponse for GamePathError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NoPathProvided => error_response(StatusCode::BAD_REQUEST, "No path provided"),
            Self::DatabaseNotFound(_) => error_response(
                StatusCode::NOT_FOUND,
                "cp.db not found in the provided path",
            ),
            Self::NotConfigured => error_response(
                StatusCode::BAD_REQUEST,
                "IL-2 not found. Please provide the correct game path.",
            ),
        }
    }
}
