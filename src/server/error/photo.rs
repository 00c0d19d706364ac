use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Photo upload is missing the pilot description")]
    MissingDesc,
    #[error("Photo upload is missing the image data")]
    MissingImage,
    #[error("Photo upload image data is not valid base64: {0}")]
    InvalidImage(#[from] base64::DecodeError),
}

impl IntoResponse for PhotoError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingDesc => error_response(StatusCode::BAD_REQUEST, "No pilot description"),
            Self::MissingImage => error_response(StatusCode::BAD_REQUEST, "No image data"),
            Self::InvalidImage(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, "Invalid image data")
            }
        }
    }
}
