use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;

use crate::{
    model::api::PingResponse,
    server::{model::app::AppState, service::liveness::schedule_shutdown},
};

pub static LIVENESS_TAG: &str = "liveness";

/// Report that the client page is still open
#[utoipa::path(
    post,
    path = "/api/ping",
    tag = LIVENESS_TAG,
    responses(
        (status = 200, description = "Ping recorded", body = PingResponse)
    ),
)]
pub async fn ping(State(state): State<AppState>) -> impl IntoResponse {
    state.liveness.touch();
    tracing::trace!("Ping received");

    (StatusCode::OK, Json(PingResponse { ok: true }))
}

/// Stop the server
#[utoipa::path(
    post,
    path = "/api/shutdown",
    tag = LIVENESS_TAG,
    responses(
        (status = 200, description = "Server is shutting down", body = String)
    ),
)]
pub async fn shutdown() -> impl IntoResponse {
    schedule_shutdown();

    (StatusCode::OK, "Server shutting down...")
}
