//! Requests sent through the assembled router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use passport_test_utils::prelude::*;
use pilot_passport::{
    model::{
        api::SetGamePathResponse,
        pilot::{PilotDto, PilotStatsDto, SortieDto},
    },
    server::{model::app::AppState, router::routes},
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::util::TestSetupExt;

static IVAN: &str = "fullname=Ivan%20Petrov&birthCountryInfo=101&birthDate=1920.03.14";

fn router(state: AppState) -> Router {
    routes(&state.config).with_state(state)
}

async fn json<T: DeserializeOwned>(router: Router, request: Request<Body>) -> (StatusCode, T) {
    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");

    (status, serde_json::from_slice(&bytes).expect("JSON body"))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Expect the game path to be accepted and the roster to list the career's pilot
#[tokio::test]
async fn set_game_path_then_list_pilots() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_career(1, 10, -1)
        .with_pilot(factory::pilot(10, IVAN))
        .build()
        .await?;
    let state = test.unconfigured_state();

    let body = serde_json::json!({ "game_path": test.game_path().display().to_string() });
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/set_game_path")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");

    let (status, response): (_, SetGamePathResponse) = json(router(state.clone()), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(response.ok);

    let (status, pilots): (_, Vec<PilotDto>) = json(router(state), get("/api/pilots")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pilots.len(), 1);
    assert_eq!(pilots[0].desc, IVAN);
    assert_eq!(pilots[0].country, "Soviet Union");

    Ok(())
}

/// Expect a rejected path to answer with `{error}` and no `ok`
#[tokio::test]
async fn rejected_game_path_reports_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/set_game_path")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"game_path": "/nowhere"}"#))
        .expect("valid request");

    let (status, response): (_, SetGamePathResponse) =
        json(router(test.unconfigured_state()), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!response.ok);
    assert_eq!(
        response.error.as_deref(),
        Some("cp.db not found in the provided path")
    );

    Ok(())
}

/// Expect a `desc` containing reserved characters to reach the handler unchanged
#[tokio::test]
async fn percent_encoded_desc_round_trips() -> Result<(), TestError> {
    let desc = "fullname=Ivan/Petrov&birthCountryInfo=101";
    let test = TestBuilder::new()
        .with_career(1, 10, -1)
        .with_pilot(entity::pilot::Model {
            sorties: Some(4),
            good_sorties: Some(3),
            ..factory::pilot(10, desc)
        })
        .with_sortie(factory::sortie(1, 10, "1942.11.20 08:00:00"))
        .build()
        .await?;
    let state = test.app_state().await;

    let encoded: String = url::form_urlencoded::byte_serialize(desc.as_bytes()).collect();

    let (status, stats): (_, PilotStatsDto) = json(
        router(state.clone()),
        get(&format!("/api/pilot_stats?desc={}", encoded)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats.0.get("Sorties"), Some(&serde_json::json!(4)));
    assert_eq!(stats.0.get("Success Rate"), Some(&serde_json::json!("75.0%")));

    let (status, sorties): (_, Vec<SortieDto>) = json(
        router(state),
        get(&format!("/api/pilot_sorties?desc={}", encoded)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorties.len(), 1);

    Ok(())
}

/// Expect a photo upload larger than axum's default body limit to be accepted
#[tokio::test]
async fn accepts_large_photo_upload() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.unconfigured_state();

    let img_data = format!("data:image/png;base64,{}", "A".repeat(4 * 1024 * 1024));
    let body = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("desc", IVAN)
        .append_pair("img_data", &img_data)
        .finish();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/save_photo")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("valid request");

    let (status, response): (_, serde_json::Value) = json(router(state.clone()), request).await;
    assert_eq!(status, StatusCode::OK);

    let path = response["path"].as_str().expect("photo path");
    assert!(path.starts_with("/pilot_photos/"));

    let file = path.trim_start_matches("/pilot_photos/");
    let served = router(state)
        .oneshot(get(&format!("/pilot_photos/{}", file)))
        .await
        .expect("router responds");
    assert_eq!(served.status(), StatusCode::OK);

    Ok(())
}

/// Expect pings to be acknowledged and to arm the idle monitor
#[tokio::test]
async fn ping_is_acknowledged() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.unconfigured_state();
    assert_eq!(state.liveness.idle_for(), None);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/ping")
        .body(Body::empty())
        .expect("valid request");

    let (status, body): (_, serde_json::Value) = json(router(state.clone()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "ok": true }));
    assert!(state.liveness.idle_for().is_some());

    Ok(())
}
