use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum PilotError {
    #[error("Request is missing the pilot description")]
    MissingDesc,
    #[error("No pilot matches description {0:?}")]
    PilotNotFound(String),
    #[error("No career found for pilot ID {0}")]
    CareerNotFound(i32),
}

impl IntoResponse for PilotError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingDesc => error_response(StatusCode::BAD_REQUEST, "Missing desc"),
            Self::PilotNotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Pilot not found")
            }
            Self::CareerNotFound(pilot_id) => {
                tracing::debug!(pilot_id = %pilot_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "Career not found")
            }
        }
    }
}
