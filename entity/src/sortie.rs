use sea_orm::entity::prelude::*;

/// One flown sortie with its per-target-type kill counters.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sortie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "pilotId")]
    pub pilot_id: i32,
    pub date: Option<String>,
    pub model: Option<String>,
    #[sea_orm(column_name = "missionId")]
    pub mission_id: Option<i32>,
    #[sea_orm(column_name = "killLightPlane")]
    pub kill_light_plane: Option<i32>,
    #[sea_orm(column_name = "killMediumPlane")]
    pub kill_medium_plane: Option<i32>,
    #[sea_orm(column_name = "killHeavyPlane")]
    pub kill_heavy_plane: Option<i32>,
    #[sea_orm(column_name = "killHeavyTank")]
    pub kill_heavy_tank: Option<i32>,
    #[sea_orm(column_name = "killMediumTank")]
    pub kill_medium_tank: Option<i32>,
    #[sea_orm(column_name = "killLightTank")]
    pub kill_light_tank: Option<i32>,
    #[sea_orm(column_name = "killArmouredVehicle")]
    pub kill_armoured_vehicle: Option<i32>,
    #[sea_orm(column_name = "killVehicle")]
    pub kill_vehicle: Option<i32>,
    #[sea_orm(column_name = "killTruck")]
    pub kill_truck: Option<i32>,
    #[sea_orm(column_name = "killCar")]
    pub kill_car: Option<i32>,
    #[sea_orm(column_name = "killLightShip")]
    pub kill_light_ship: Option<i32>,
    #[sea_orm(column_name = "killDestroyerShip")]
    pub kill_destroyer_ship: Option<i32>,
    #[sea_orm(column_name = "killSubmarine")]
    pub kill_submarine: Option<i32>,
    #[sea_orm(column_name = "killLargeCargoShip")]
    pub kill_large_cargo_ship: Option<i32>,
    #[sea_orm(column_name = "killHowitzer")]
    pub kill_howitzer: Option<i32>,
    #[sea_orm(column_name = "killFieldGun")]
    pub kill_field_gun: Option<i32>,
    #[sea_orm(column_name = "killNavalGun")]
    pub kill_naval_gun: Option<i32>,
    #[sea_orm(column_name = "killRocketLauncher")]
    pub kill_rocket_launcher: Option<i32>,
    #[sea_orm(column_name = "killMachineGun")]
    pub kill_machine_gun: Option<i32>,
    #[sea_orm(column_name = "killSearchlight")]
    pub kill_searchlight: Option<i32>,
    #[sea_orm(column_name = "killAirDefence")]
    pub kill_air_defence: Option<i32>,
    #[sea_orm(column_name = "killHeavyFlak")]
    pub kill_heavy_flak: Option<i32>,
    #[sea_orm(column_name = "killLightFlak")]
    pub kill_light_flak: Option<i32>,
    #[sea_orm(column_name = "killAAAMachineGun")]
    pub kill_aaa_machine_gun: Option<i32>,
    #[sea_orm(column_name = "killTrainLocomotive")]
    pub kill_train_locomotive: Option<i32>,
    #[sea_orm(column_name = "killTrainVagon")]
    pub kill_train_vagon: Option<i32>,
    #[sea_orm(column_name = "killStaticPlane")]
    pub kill_static_plane: Option<i32>,
    #[sea_orm(column_name = "killBuilding")]
    pub kill_building: Option<i32>,
    #[sea_orm(column_name = "killRuralYard")]
    pub kill_rural_yard: Option<i32>,
    #[sea_orm(column_name = "killTownBuilding")]
    pub kill_town_building: Option<i32>,
    #[sea_orm(column_name = "killFactoryBuilding")]
    pub kill_factory_building: Option<i32>,
    #[sea_orm(column_name = "killRailwayStationFacility")]
    pub kill_railway_station_facility: Option<i32>,
    #[sea_orm(column_name = "killBridge")]
    pub kill_bridge: Option<i32>,
    #[sea_orm(column_name = "killAirfieldFacility")]
    pub kill_airfield_facility: Option<i32>,
    #[sea_orm(column_name = "killPilot")]
    pub kill_pilot: Option<i32>,
    #[sea_orm(column_name = "killPlaneGunner")]
    pub kill_plane_gunner: Option<i32>,
    #[sea_orm(column_name = "killDriver")]
    pub kill_driver: Option<i32>,
    #[sea_orm(column_name = "killVehicleGunner")]
    pub kill_vehicle_gunner: Option<i32>,
    #[sea_orm(column_name = "killInfantry")]
    pub kill_infantry: Option<i32>,
    #[sea_orm(column_name = "killAssist")]
    pub kill_assist: Option<i32>,
    #[sea_orm(column_name = "planeStatus")]
    pub plane_status: Option<i32>,
    pub status: Option<i32>,
    #[sea_orm(column_name = "flightTime")]
    pub flight_time: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
