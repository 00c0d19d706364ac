//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.
//! The game artwork, uploaded pilot photos and mirrored rank artwork are served from disk.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{config::Config, controller, model::app::AppState};

/// Largest accepted request body; cropped photos arrive as base64 form fields.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Builds the application's HTTP router with all API endpoints, static file trees and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/set_game_path` - Set the game installation folder
/// - `GET /api/pilots` - List pilots of every career
/// - `GET /api/service_record?desc=` - Pilot identity, promotions and awards
/// - `GET /api/pilot_stats?desc=` - Ordered lifetime statistics
/// - `GET /api/pilot_sorties?desc=` - Logbook entries
/// - `POST /api/save_photo` - Store a cropped pilot photo
/// - `POST /api/ping` - Client liveness ping
/// - `POST /api/shutdown` - Stop the server
///
/// # Static Trees
/// - `/static/*` - Bundled game artwork from [`Config::static_root`]
/// - `/pilot_photos/*` - Uploaded photos from [`Config::pilot_photo_dir`]
/// - `/charactersranks/*` - Mirrored rank artwork from [`Config::charactersranks_dir`]
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
pub fn routes(config: &Config) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pilot Passport", description = "Pilot Passport API"), tags(
        (name = controller::game_path::GAME_PATH_TAG, description = "Game installation routes"),
        (name = controller::pilot::PILOT_TAG, description = "Pilot roster, record, stats and logbook routes"),
        (name = controller::photo::PHOTO_TAG, description = "Pilot photo routes"),
        (name = controller::liveness::LIVENESS_TAG, description = "Client liveness routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::game_path::set_game_path))
        .routes(routes!(controller::pilot::get_pilots))
        .routes(routes!(controller::pilot::get_service_record))
        .routes(routes!(controller::pilot::get_pilot_stats))
        .routes(routes!(controller::pilot::get_pilot_sorties))
        .routes(routes!(controller::photo::save_photo))
        .routes(routes!(controller::liveness::ping))
        .routes(routes!(controller::liveness::shutdown))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service("/static", ServeDir::new(&config.static_root))
        .nest_service("/pilot_photos", ServeDir::new(&config.pilot_photo_dir))
        .nest_service("/charactersranks", ServeDir::new(&config.charactersranks_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}
