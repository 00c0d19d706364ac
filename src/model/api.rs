use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Body of `POST /api/set_game_path`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SetGamePathRequest {
    /// Root folder of the IL-2 Sturmovik installation
    #[serde(default)]
    pub game_path: String,
}

/// Outcome of `POST /api/set_game_path`.
///
/// The same shape is read for success and error statuses: `ok` is only set on success and
/// `error` only on failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SetGamePathResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<String>,
}

/// Form body of `POST /api/save_photo`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SavePhotoForm {
    /// Pilot identifier the photo belongs to
    #[serde(default)]
    pub desc: String,
    /// Image as a base64 `data:` URL
    #[serde(default)]
    pub img_data: String,
}

/// Where a saved pilot photo can be fetched from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SavePhotoResponse {
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PingResponse {
    pub ok: bool,
}
