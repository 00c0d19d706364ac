//! Minimal career rows; override fields with struct update syntax.

use entity::{event, pilot, sortie};

use crate::constant::DEFAULT_SORTIE_MODEL;

/// A pilot with no squadron, rank or statistics
pub fn pilot(id: i32, description: &str) -> pilot::Model {
    pilot::Model {
        id,
        description: description.to_string(),
        name: None,
        last_name: None,
        squadron_id: None,
        rank_id: None,
        ins_date: None,
        score: None,
        flight_time: None,
        sorties: None,
        good_sorties: None,
        kill_light_fighter: None,
        kill_heavy_fighter: None,
        kill_light_plane: None,
        kill_medium_plane: None,
        kill_heavy_plane: None,
        kill_medium_bomber: None,
        kill_heavy_tank: None,
        kill_truck: None,
        kill_train_locomotive: None,
        kill_building: None,
        kill_pilot: None,
        kill_assist: None,
    }
}

fn event(id: i32, pilot_id: i32, date: &str, event_type: i32) -> event::Model {
    event::Model {
        id,
        date: Some(date.to_string()),
        event_type,
        pilot_id,
        rank_id: None,
        tpar2: None,
        squadron_id: None,
    }
}

/// Promotion of `pilot_id` to `rank_id`
pub fn promotion(id: i32, pilot_id: i32, date: &str, rank_id: i32) -> event::Model {
    event::Model {
        rank_id: Some(rank_id),
        ..event(id, pilot_id, date, event::PROMOTION)
    }
}

/// Award with achievement key `tpar2`
pub fn award(id: i32, pilot_id: i32, date: &str, tpar2: i64) -> event::Model {
    event::Model {
        tpar2: Some(tpar2),
        ..event(id, pilot_id, date, event::AWARD)
    }
}

/// A sortie without kills or mission
pub fn sortie(id: i32, pilot_id: i32, date: &str) -> sortie::Model {
    sortie::Model {
        id,
        pilot_id,
        date: Some(date.to_string()),
        model: Some(DEFAULT_SORTIE_MODEL.to_string()),
        mission_id: None,
        kill_light_plane: None,
        kill_medium_plane: None,
        kill_heavy_plane: None,
        kill_heavy_tank: None,
        kill_medium_tank: None,
        kill_light_tank: None,
        kill_armoured_vehicle: None,
        kill_vehicle: None,
        kill_truck: None,
        kill_car: None,
        kill_light_ship: None,
        kill_destroyer_ship: None,
        kill_submarine: None,
        kill_large_cargo_ship: None,
        kill_howitzer: None,
        kill_field_gun: None,
        kill_naval_gun: None,
        kill_rocket_launcher: None,
        kill_machine_gun: None,
        kill_searchlight: None,
        kill_air_defence: None,
        kill_heavy_flak: None,
        kill_light_flak: None,
        kill_aaa_machine_gun: None,
        kill_train_locomotive: None,
        kill_train_vagon: None,
        kill_static_plane: None,
        kill_building: None,
        kill_rural_yard: None,
        kill_town_building: None,
        kill_factory_building: None,
        kill_railway_station_facility: None,
        kill_bridge: None,
        kill_airfield_facility: None,
        kill_pilot: None,
        kill_plane_gunner: None,
        kill_driver: None,
        kill_vehicle_gunner: None,
        kill_infantry: None,
        kill_assist: None,
        plane_status: None,
        status: None,
        flight_time: None,
    }
}
