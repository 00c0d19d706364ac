//! Pilot, service record, stats, and sortie payloads shared by client and server.
//!
//! Client-facing fields default when absent so a partial payload still renders with blanks
//! instead of failing to parse.

use serde::{Deserialize, Serialize};

/// One entry of the pilot roster
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PilotDto {
    /// Opaque identifier of the pilot's career record
    pub desc: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub squadron: String,
    #[serde(default)]
    pub pilot_id: Option<i64>,
    #[serde(default)]
    pub root_career_id: Option<i64>,
}

impl PilotDto {
    /// Label shown in the pilot selector
    pub fn label(&self) -> String {
        let display = if self.display.is_empty() {
            "Unknown"
        } else {
            &self.display
        };

        format!("{} - {} - {}", display, self.country, self.squadron)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct PilotInfoDto {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub birth_country: String,
    pub pilot_id: Option<i64>,
    pub squadron: String,
    pub rank_name: String,
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct PromotionDto {
    /// Rank name
    pub desc: String,
    pub date: String,
    /// Rank insignia image URL
    pub img: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct AwardDto {
    /// Award name
    pub desc: String,
    pub date: String,
    /// Achievement folder key used to look up the award's artwork
    pub tpar2: Option<i64>,
}

impl AwardDto {
    /// Preview image of the award under the static root
    pub fn preview_url(&self) -> Option<String> {
        self.tpar2
            .map(|key| format!("/static/achievements/{}/preview.png", key))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ServiceRecordDto {
    pub pilot_info: PilotInfoDto,
    pub promotions: Vec<PromotionDto>,
    pub awards: Vec<AwardDto>,
}

/// Stat label to value, in display order.
///
/// Values are numbers or preformatted strings. Labels containing "flight time" carry seconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", schema(value_type = Object))]
#[serde(transparent)]
pub struct PilotStatsDto(pub serde_json::Map<String, serde_json::Value>);

/// One logbook line
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct SortieDto {
    pub date: String,
    pub aircraft: String,
    pub mission_type: String,
    pub air_kills: u32,
    pub ground_kills: u32,
    pub naval_kills: u32,
    pub artillery_kills: u32,
    pub railway_kills: u32,
    pub structure_kills: u32,
    /// Preformatted duration such as `1h 5m`
    pub flight_time: String,
}
