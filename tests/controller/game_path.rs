use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pilot_passport::{
    model::api::SetGamePathRequest, server::controller::game_path::set_game_path,
};

use super::*;

fn request(game_path: String) -> Json<SetGamePathRequest> {
    Json(SetGamePathRequest { game_path })
}

/// Expect 200 OK and an active career database for a valid installation
#[tokio::test]
async fn accepts_installation_with_database() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.unconfigured_state();

    let result = set_game_path(
        State(state.clone()),
        request(test.game_path().display().to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(state.career.is_configured().await);

    Ok(())
}

/// Expect 404 Not Found for a folder without `cp.db`
#[tokio::test]
async fn not_found_without_database() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = set_game_path(
        State(test.unconfigured_state()),
        request(test.root().join("elsewhere").display().to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 Bad Request for a blank path
#[tokio::test]
async fn bad_request_for_blank_path() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = set_game_path(State(test.unconfigured_state()), request("  ".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
