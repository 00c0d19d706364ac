//! HTTP controller endpoints for the passport API.
//!
//! Axum handlers for the game path, the pilot roster and per-pilot pages, photo uploads and the
//! client liveness ping. Handlers extract and validate request data, call into the services, and
//! document themselves for the OpenAPI spec through utoipa.

pub mod game_path;
pub mod liveness;
pub mod photo;
pub mod pilot;
