use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        pilot::{PilotDto, PilotStatsDto, ServiceRecordDto, SortieDto},
    },
    server::{
        error::{pilot::PilotError, Error},
        model::app::AppState,
        service::{game_path::GamePathService, pilot::PilotService},
    },
};

pub static PILOT_TAG: &str = "pilot";

/// Query string identifying a pilot by description
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DescQuery {
    /// Pilot description as listed by `/api/pilots`
    pub desc: Option<String>,
}

impl DescQuery {
    fn required(&self) -> Result<&str, Error> {
        match self.desc.as_deref() {
            Some(desc) if !desc.is_empty() => Ok(desc),
            _ => Err(PilotError::MissingDesc.into()),
        }
    }
}

/// List the pilots of every career in the configured installation
///
/// Without a usable installation the stored game path is forgotten so the client asks for a new
/// one.
#[utoipa::path(
    get,
    path = "/api/pilots",
    tag = PILOT_TAG,
    responses(
        (status = 200, description = "One entry per career", body = Vec<PilotDto>),
        (status = 400, description = "IL-2 not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilots(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let career = GamePathService::new(&state.config, &state.career)
        .current_or_forget()
        .await?;

    let pilots = PilotService::new(&career.db, &state.config)
        .list_pilots()
        .await?;

    Ok((StatusCode::OK, Json(pilots)))
}

/// Get a pilot's passport: identity, promotions and awards
#[utoipa::path(
    get,
    path = "/api/service_record",
    tag = PILOT_TAG,
    params(DescQuery),
    responses(
        (status = 200, description = "Service record of the pilot's career", body = ServiceRecordDto),
        (status = 400, description = "Missing desc or IL-2 not found", body = ErrorDto),
        (status = 404, description = "Pilot or career not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_record(
    State(state): State<AppState>,
    Query(query): Query<DescQuery>,
) -> Result<impl IntoResponse, Error> {
    let career = GamePathService::new(&state.config, &state.career)
        .current()
        .await?;
    let desc = query.required()?;

    let record = PilotService::new(&career.db, &state.config)
        .service_record(desc)
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Get a pilot's lifetime statistics in display order
#[utoipa::path(
    get,
    path = "/api/pilot_stats",
    tag = PILOT_TAG,
    params(DescQuery),
    responses(
        (status = 200, description = "Ordered stat label to value map", body = PilotStatsDto),
        (status = 400, description = "Missing desc or IL-2 not found", body = ErrorDto),
        (status = 404, description = "Pilot or career not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot_stats(
    State(state): State<AppState>,
    Query(query): Query<DescQuery>,
) -> Result<impl IntoResponse, Error> {
    let career = GamePathService::new(&state.config, &state.career)
        .current()
        .await?;
    let desc = query.required()?;

    let stats = PilotService::new(&career.db, &state.config)
        .stats(desc)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Get every sortie of a pilot's career, oldest first
#[utoipa::path(
    get,
    path = "/api/pilot_sorties",
    tag = PILOT_TAG,
    params(DescQuery),
    responses(
        (status = 200, description = "Logbook entries", body = Vec<SortieDto>),
        (status = 400, description = "Missing desc or IL-2 not found", body = ErrorDto),
        (status = 404, description = "Pilot or career not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot_sorties(
    State(state): State<AppState>,
    Query(query): Query<DescQuery>,
) -> Result<impl IntoResponse, Error> {
    let career = GamePathService::new(&state.config, &state.career)
        .current()
        .await?;
    let desc = query.required()?;

    let sorties = PilotService::new(&career.db, &state.config)
        .sorties(desc)
        .await?;

    Ok((StatusCode::OK, Json(sorties)))
}
