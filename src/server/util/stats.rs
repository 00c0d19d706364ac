//! Builds the ordered statistics shown on the stats page from a raw `pilot` row.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::model::pilot::PilotStatsDto;

/// Pilot columns that are bookkeeping rather than statistics, plus the columns summarised in
/// the fixed header entries.
pub static SKIPPED_COLUMNS: &[&str] = &[
    "description",
    "id",
    "name",
    "lastName",
    "personageId",
    "avatarPath",
    "birthDay",
    "isDeleted",
    "penalty",
    "penaltyPot",
    "pcp",
    "squadronId",
    "rankId",
    "state",
    "stateDate",
    "statePeriod",
    "trainPot",
    "vehPot",
    "shipPot",
    "buildingPot",
    "score",
    "transferProb",
    "wounded",
    "nickname",
    "deathDate",
    "bioInfo",
    "startDate",
    "playerCountryId",
    "startSquadronInfo",
    "virtualSquadronId",
    "playerPremiumStatus",
    "startRankInfo",
    "careerStartDate",
    "insDate",
    "killLightPlane",
    "killMediumPlane",
    "killHeavyPlane",
    "sorties",
    "goodSorties",
    "success_rate",
];

/// Display order of statistic labels after the header entries.
pub static STAT_ORDER: &[&str] = &[
    "Flight Time",
    "Good Sorties",
    "Sorties",
    "Success Rate",
    "Light Fighter",
    "Light Attack Plane",
    "Light Bomber",
    "Light Recon",
    "Light Transport",
    "Medium Fighter",
    "Medium Attack Plane",
    "Medium Bomber",
    "Medium Recon",
    "Medium Transport",
    "Heavy Fighter",
    "Heavy Attack Plane",
    "Heavy Bomber",
    "Heavy Recon",
    "Heavy Transport",
    "Heavy Armoured",
    "Heavy Tank",
    "Medium Tank",
    "Vehicle",
    "Light Tank",
    "Armoured Vehicle",
    "Truck",
    "Car",
    "Train Locomotive",
    "Train Vagon",
    "Howitzer",
    "Field Gun",
    "Naval Gun",
    "Rocket Launcher",
    "Machine Gun",
    "Searchlight",
    "Static Plane",
    "Air Defence",
    "Heavy Flak",
    "Light Flak",
    "AAA Machine Gun",
    "Ships",
    "Light Ship",
    "Destroyer Ship",
    "Submarine",
    "Large Cargo Ship",
    "Building",
    "Rural Yard",
    "Town Building",
    "Factory Building",
    "Railway Station Facility",
    "Bridge",
    "Airfield Facility",
    "Air Crew",
    "Pilot",
    "Plane Gunner",
    "Driver",
    "Vehicle Gunner",
    "Infantry",
    "Turrets",
    "Plane Turrets",
    "Vehicle Turrets",
    "Plane In Group",
    "Assist",
];

/// Turns a column name such as `killAAAMachineGun` into a label such as `AAA Machine Gun`.
///
/// A leading `kill` is dropped, camel case is split into words, acronyms are kept upper case
/// and every other word is capitalized.
pub fn friendly_label(column: &str) -> String {
    static ACRONYM_RE: OnceLock<Regex> = OnceLock::new();
    static CAMEL_RE: OnceLock<Regex> = OnceLock::new();

    let acronym = ACRONYM_RE
        .get_or_init(|| Regex::new(r"([A-Z]{2,})([A-Z][a-z])").expect("valid acronym regex"));
    let camel =
        CAMEL_RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel case regex"));

    let field = if column.to_lowercase().starts_with("kill") {
        &column[4..]
    } else {
        column
    };

    let field = acronym.replace_all(field, "$1 $2");
    let field = camel.replace_all(&field, "$1 $2");

    field
        .split_whitespace()
        .map(|word| {
            let is_acronym = word.chars().count() > 1
                && word.chars().any(|c| c.is_alphabetic())
                && !word.chars().any(|c| c.is_lowercase());

            if is_acronym {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn count(row: &Map<String, Value>, column: &str) -> f64 {
    row.get(column).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Builds the ordered stat map for one pilot row.
///
/// # Arguments
/// - `columns` - Column names of the `pilot` table in table order
/// - `row` - The pilot's row keyed by column name
///
/// # Returns
/// Flight time (seconds) when non-zero, good sorties, sorties, and success rate first, then every
/// non-zero statistic in [`STAT_ORDER`], then any remaining statistics in table order.
pub fn build_stats(columns: &[String], row: &Map<String, Value>) -> PilotStatsDto {
    let mut labelled = Map::new();
    for column in columns {
        if SKIPPED_COLUMNS.contains(&column.as_str()) {
            continue;
        }

        let Some(value) = row.get(column) else {
            continue;
        };
        if is_blank(value) {
            continue;
        }

        labelled.insert(friendly_label(column), value.clone());
    }

    let mut output = Map::new();

    if let Some(flight_time) = row.get("flightTime").filter(|v| !is_blank(v)) {
        output.insert("Flight Time".to_string(), flight_time.clone());
    }

    let good = count(row, "goodSorties");
    let sorties = count(row, "sorties");

    output.insert(
        "Good Sorties".to_string(),
        row.get("goodSorties")
            .filter(|v| !v.is_null())
            .cloned()
            .unwrap_or(Value::from(0)),
    );
    output.insert(
        "Sorties".to_string(),
        row.get("sorties")
            .filter(|v| !v.is_null())
            .cloned()
            .unwrap_or(Value::from(0)),
    );

    let success_rate = if sorties > 0.0 {
        format!("{:.1}%", good / sorties * 100.0)
    } else {
        "0.0%".to_string()
    };
    output.insert("Success Rate".to_string(), Value::String(success_rate));

    for label in STAT_ORDER {
        if output.contains_key(*label) {
            continue;
        }
        if let Some(value) = labelled.get(*label) {
            output.insert(label.to_string(), value.clone());
        }
    }

    for (label, value) in labelled {
        if !output.contains_key(&label) {
            output.insert(label, value);
        }
    }

    PilotStatsDto(output)
}
