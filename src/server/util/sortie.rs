//! Sortie row summaries for the logbook.

use serde_json::{Map, Value};

use crate::model::pilot::SortieDto;

/// Kill columns counted as air victories.
pub static AIR_COLUMNS: &[&str] = &["killLightPlane", "killMediumPlane", "killHeavyPlane"];

/// Kill columns counted as ground vehicles.
pub static GROUND_COLUMNS: &[&str] = &[
    "killHeavyTank",
    "killMediumTank",
    "killLightTank",
    "killArmouredVehicle",
    "killVehicle",
    "killTruck",
    "killCar",
];

/// Kill columns counted as ships.
pub static NAVAL_COLUMNS: &[&str] = &[
    "killLightShip",
    "killDestroyerShip",
    "killSubmarine",
    "killLargeCargoShip",
];

/// Kill columns counted as guns and air defences.
pub static ARTILLERY_COLUMNS: &[&str] = &[
    "killHowitzer",
    "killFieldGun",
    "killNavalGun",
    "killRocketLauncher",
    "killMachineGun",
    "killSearchlight",
    "killAirDefence",
    "killHeavyFlak",
    "killLightFlak",
    "killAAAMachineGun",
];

/// Kill columns counted as rolling stock.
pub static RAILWAY_COLUMNS: &[&str] = &["killTrainLocomotive", "killTrainVagon"];

/// Kill columns counted as buildings and parked aircraft.
pub static STRUCTURE_COLUMNS: &[&str] = &[
    "killStaticPlane",
    "killBuilding",
    "killRuralYard",
    "killTownBuilding",
    "killFactoryBuilding",
    "killRailwayStationFacility",
    "killBridge",
    "killAirfieldFacility",
];

/// Upper-cased file stem of an aircraft model path such as `LuaScripts/.../yak1s69.txt`.
pub fn aircraft_name(model: &str) -> String {
    let base = model.rsplit(['/', '\\']).next().unwrap_or(model);

    base.replace(".txt", "").to_uppercase()
}

/// Human readable mission type from a mission template name.
///
/// The template is cut before `@`, or before `_p0` when there is no `@`. Dashes and underscores
/// become spaces and each word is capitalized.
pub fn mission_type(template: &str) -> String {
    let template = match template.split_once('@') {
        Some((head, _)) => head,
        None => template
            .find("_p0")
            .map(|idx| &template[..idx])
            .unwrap_or(template),
    };

    template
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Formats a sortie duration in seconds as `1h 5m`, `2h`, or `45m`; empty without a value.
pub fn flight_time(seconds: Option<i64>) -> String {
    let Some(seconds) = seconds else {
        return String::new();
    };

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    match (hours > 0, minutes > 0) {
        (true, true) => format!("{hours}h {minutes}m"),
        (true, false) => format!("{hours}h"),
        _ => format!("{minutes}m"),
    }
}

/// Whole-number value of an integer or REAL column; negative and non-finite values are dropped.
fn whole_number(value: &Value) -> Option<u64> {
    match value.as_u64() {
        Some(count) => Some(count),
        None => value
            .as_f64()
            .filter(|number| number.is_finite() && *number >= 0.0)
            .map(|number| number.floor() as u64),
    }
}

/// Sums the given kill columns of a sortie row, ignoring missing or null columns.
///
/// The total saturates at `u32::MAX`.
pub fn bucket_sum(row: &Map<String, Value>, columns: &[&str]) -> u32 {
    let total = columns
        .iter()
        .filter_map(|column| row.get(*column).and_then(whole_number))
        .fold(0u64, u64::saturating_add);

    u32::try_from(total).unwrap_or(u32::MAX)
}

/// Builds the logbook entry for one raw sortie row.
///
/// # Arguments
/// - `row` - The sortie row keyed by column name
/// - `template` - Template of the sortie's mission, when the mission exists
pub fn summarize(row: &Map<String, Value>, template: Option<&str>) -> SortieDto {
    let date = row
        .get("date")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let aircraft = row
        .get("model")
        .and_then(Value::as_str)
        .map(aircraft_name)
        .unwrap_or_default();

    SortieDto {
        date,
        aircraft,
        mission_type: template.map(mission_type).unwrap_or_default(),
        air_kills: bucket_sum(row, AIR_COLUMNS),
        ground_kills: bucket_sum(row, GROUND_COLUMNS),
        naval_kills: bucket_sum(row, NAVAL_COLUMNS),
        artillery_kills: bucket_sum(row, ARTILLERY_COLUMNS),
        railway_kills: bucket_sum(row, RAILWAY_COLUMNS),
        structure_kills: bucket_sum(row, STRUCTURE_COLUMNS),
        flight_time: flight_time(
            row.get("flightTime")
                .and_then(Value::as_f64)
                .map(|seconds| seconds.floor() as i64),
        ),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn aircraft_is_upper_cased_stem() {
        assert_eq!(aircraft_name("LuaScripts/WorldObjects/Planes/yak1s69.txt"), "YAK1S69");
        assert_eq!(aircraft_name("bf109f4"), "BF109F4");
        assert_eq!(aircraft_name(""), "");
    }

    #[test]
    fn mission_type_is_humanized() {
        assert_eq!(mission_type("free-hunt_p01@xyz"), "Free Hunt P01");
        assert_eq!(mission_type("ground_attack_p0123"), "Ground Attack");
        assert_eq!(mission_type("BOMBING-run"), "Bombing Run");
        assert_eq!(mission_type(""), "");
    }

    #[test]
    fn flight_time_formats() {
        assert_eq!(flight_time(Some(3900)), "1h 5m");
        assert_eq!(flight_time(Some(7200)), "2h");
        assert_eq!(flight_time(Some(2700)), "45m");
        assert_eq!(flight_time(Some(0)), "0m");
        assert_eq!(flight_time(None), "");
    }

    #[test]
    fn kills_are_bucketed() {
        let row = json!({
            "date": "1942.11.19 06:30:00",
            "model": "LuaScripts/WorldObjects/Planes/il2m42.txt",
            "killLightPlane": 1,
            "killHeavyPlane": 2,
            "killTruck": 3,
            "killCar": null,
            "killLightShip": 1,
            "killLightFlak": 4,
            "killTrainVagon": 2,
            "killBridge": 1,
            "killPilot": 7,
            "flightTime": 3900
        });

        let sortie = summarize(row.as_object().unwrap(), Some("ground_attack_p01"));

        assert_eq!(sortie.aircraft, "IL2M42");
        assert_eq!(sortie.mission_type, "Ground Attack");
        assert_eq!(sortie.air_kills, 3);
        assert_eq!(sortie.ground_kills, 3);
        assert_eq!(sortie.naval_kills, 1);
        assert_eq!(sortie.artillery_kills, 4);
        assert_eq!(sortie.railway_kills, 2);
        assert_eq!(sortie.structure_kills, 1);
        assert_eq!(sortie.flight_time, "1h 5m");
    }

    #[test]
    fn real_columns_are_floored() {
        let row = json!({
            "killLightPlane": 1.0,
            "killMediumPlane": 2.7,
            "killTruck": -1.0,
            "flightTime": 3900.0
        });

        let sortie = summarize(row.as_object().unwrap(), None);

        assert_eq!(sortie.air_kills, 3);
        assert_eq!(sortie.ground_kills, 0);
        assert_eq!(sortie.flight_time, "1h 5m");
    }

    #[test]
    fn bucket_sum_saturates() {
        let row = json!({
            "killLightPlane": u64::MAX,
            "killMediumPlane": 5,
            "killHeavyPlane": 4_294_967_295u64
        });

        assert_eq!(bucket_sum(row.as_object().unwrap(), AIR_COLUMNS), u32::MAX);
    }
}
