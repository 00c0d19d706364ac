use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    model::api::{ErrorDto, SavePhotoForm, SavePhotoResponse},
    server::{error::Error, model::app::AppState, service::photo::PhotoService},
};

pub static PHOTO_TAG: &str = "photo";

/// Store a cropped pilot photo
///
/// The image replaces any earlier photo of the same pilot.
#[utoipa::path(
    post,
    path = "/api/save_photo",
    tag = PHOTO_TAG,
    request_body(content = SavePhotoForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Photo stored", body = SavePhotoResponse),
        (status = 400, description = "Missing description or image data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_photo(
    State(state): State<AppState>,
    Form(form): Form<SavePhotoForm>,
) -> Result<impl IntoResponse, Error> {
    let path = PhotoService::new(&state.config.pilot_photo_dir)
        .save(&form.desc, &form.img_data)
        .await?;

    Ok((StatusCode::OK, Json(SavePhotoResponse { path })))
}
