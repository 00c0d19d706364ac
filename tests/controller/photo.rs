use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use pilot_passport::{model::api::SavePhotoForm, server::controller::photo::save_photo};

use super::*;

/// 1x1 transparent PNG
static PIXEL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Expect 200 OK and the photo written under the photo directory
#[tokio::test]
async fn stores_photo() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.unconfigured_state();

    let result = save_photo(
        State(state.clone()),
        Form(SavePhotoForm {
            desc: "fullname=Ivan%20Petrov".to_string(),
            img_data: PIXEL.to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let mut entries = std::fs::read_dir(&state.config.pilot_photo_dir)?;
    let written = entries.next().expect("photo written")?;
    assert_eq!(
        written.path().extension().and_then(|ext| ext.to_str()),
        Some("png")
    );

    Ok(())
}

/// Expect 400 Bad Request when the description is missing
#[tokio::test]
async fn bad_request_without_desc() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = save_photo(
        State(test.unconfigured_state()),
        Form(SavePhotoForm {
            desc: String::new(),
            img_data: PIXEL.to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
