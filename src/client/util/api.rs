//! HTTP client for the passport backend.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    client::controller::{ApiError, PassportApi, PilotRoster},
    model::{
        api::{SetGamePathRequest, SetGamePathResponse},
        pilot::{PilotDto, PilotStatsDto, ServiceRecordDto, SortieDto},
    },
};

/// Raw status and body of a finished request
struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Decodes the body of a successful response
    fn success_json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status(self.status));
        }

        self.json()
    }
}

#[cfg(feature = "web")]
async fn send(request: reqwasm::http::Request) -> Result<RawResponse, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(RawResponse { status, body })
}

#[cfg(feature = "web")]
async fn get(url: &str) -> Result<RawResponse, ApiError> {
    send(reqwasm::http::Request::get(url)).await
}

#[cfg(feature = "web")]
async fn post(url: &str, content_type: &str, body: String) -> Result<RawResponse, ApiError> {
    let request = reqwasm::http::Request::post(url)
        .header("Content-Type", content_type)
        .body(body);

    send(request).await
}

#[cfg(not(feature = "web"))]
async fn get(_url: &str) -> Result<RawResponse, ApiError> {
    Err(ApiError::Transport(
        "HTTP requests are only available in the browser".to_string(),
    ))
}

#[cfg(not(feature = "web"))]
async fn post(_url: &str, _content_type: &str, _body: String) -> Result<RawResponse, ApiError> {
    Err(ApiError::Transport(
        "HTTP requests are only available in the browser".to_string(),
    ))
}

/// `{path}?desc=...` with `desc` percent-encoded
fn desc_url(path: &str, desc: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(desc.as_bytes()).collect();
    format!("{}?desc={}", path, encoded)
}

fn photo_form(desc: &str, img_data: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("desc", desc)
        .append_pair("img_data", img_data)
        .finish()
}

fn parse_roster(response: &RawResponse) -> Result<PilotRoster, ApiError> {
    match response.success_json::<Value>()? {
        Value::Array(items) => {
            let pilots = items
                .into_iter()
                .map(serde_json::from_value::<PilotDto>)
                .collect::<Result<Vec<_>, _>>();

            Ok(pilots.map_or(PilotRoster::Malformed, PilotRoster::Pilots))
        }
        _ => Ok(PilotRoster::Malformed),
    }
}

fn parse_sorties(response: &RawResponse) -> Result<Option<Vec<SortieDto>>, ApiError> {
    match response.success_json::<Value>()? {
        value @ Value::Array(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
        _ => Ok(None),
    }
}

fn parse_photo_path(response: &RawResponse) -> Result<Option<String>, ApiError> {
    let body: Value = response.json()?;

    Ok(body
        .get("path")
        .and_then(Value::as_str)
        .filter(|path| !path.is_empty())
        .map(str::to_string))
}

/// [`PassportApi`] over the browser's fetch
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpPassportApi;

impl PassportApi for HttpPassportApi {
    async fn set_game_path(&self, game_path: &str) -> Result<SetGamePathResponse, ApiError> {
        let body = serde_json::to_string(&SetGamePathRequest {
            game_path: game_path.to_string(),
        })
        .map_err(|e| ApiError::Decode(e.to_string()))?;

        post("/api/set_game_path", "application/json", body)
            .await?
            .json()
    }

    async fn pilots(&self) -> Result<PilotRoster, ApiError> {
        parse_roster(&get("/api/pilots").await?)
    }

    async fn service_record(&self, desc: &str) -> Result<ServiceRecordDto, ApiError> {
        get(&desc_url("/api/service_record", desc))
            .await?
            .success_json()
    }

    async fn pilot_stats(&self, desc: &str) -> Result<PilotStatsDto, ApiError> {
        get(&desc_url("/api/pilot_stats", desc))
            .await?
            .success_json()
    }

    async fn pilot_sorties(&self, desc: &str) -> Result<Option<Vec<SortieDto>>, ApiError> {
        parse_sorties(&get(&desc_url("/api/pilot_sorties", desc)).await?)
    }

    async fn save_photo(&self, desc: &str, img_data: &str) -> Result<Option<String>, ApiError> {
        let response = post(
            "/api/save_photo",
            "application/x-www-form-urlencoded",
            photo_form(desc, img_data),
        )
        .await?;

        parse_photo_path(&response)
    }

    async fn ping(&self) -> Result<(), ApiError> {
        post("/api/ping", "application/json", String::new())
            .await
            .map(|_| ())
    }
}
