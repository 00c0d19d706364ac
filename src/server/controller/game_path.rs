use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, SetGamePathRequest, SetGamePathResponse},
    server::{error::Error, model::app::AppState, service::game_path::GamePathService},
};

pub static GAME_PATH_TAG: &str = "game path";

/// Set the IL-2 Sturmovik installation folder
///
/// The folder must contain `data/Career/cp.db`. The accepted path is remembered across launches.
#[utoipa::path(
    post,
    path = "/api/set_game_path",
    tag = GAME_PATH_TAG,
    request_body = SetGamePathRequest,
    responses(
        (status = 200, description = "Game path accepted", body = SetGamePathResponse),
        (status = 400, description = "No path provided", body = ErrorDto),
        (status = 404, description = "cp.db not found in the provided path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_game_path(
    State(state): State<AppState>,
    Json(request): Json<SetGamePathRequest>,
) -> Result<impl IntoResponse, Error> {
    let career = GamePathService::new(&state.config, &state.career)
        .set_game_path(&request.game_path)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SetGamePathResponse {
            ok: true,
            error: None,
            game_path: Some(career.game_path.display().to_string()),
            db_path: Some(career.db_path.display().to_string()),
        }),
    ))
}
