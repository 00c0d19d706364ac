use sea_orm::entity::prelude::*;

/// A pilot row. The game stores lifetime statistics as one column per
/// counter; only the counters the passport exercises are modelled here, the
/// stats page reads whatever columns the table actually has.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pilot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub name: Option<String>,
    #[sea_orm(column_name = "lastName")]
    pub last_name: Option<String>,
    #[sea_orm(column_name = "squadronId")]
    pub squadron_id: Option<i32>,
    #[sea_orm(column_name = "rankId")]
    pub rank_id: Option<i32>,
    #[sea_orm(column_name = "insDate")]
    pub ins_date: Option<String>,
    pub score: Option<i32>,
    #[sea_orm(column_name = "flightTime")]
    pub flight_time: Option<i64>,
    pub sorties: Option<i32>,
    #[sea_orm(column_name = "goodSorties")]
    pub good_sorties: Option<i32>,
    #[sea_orm(column_name = "killLightFighter")]
    pub kill_light_fighter: Option<i32>,
    #[sea_orm(column_name = "killHeavyFighter")]
    pub kill_heavy_fighter: Option<i32>,
    #[sea_orm(column_name = "killLightPlane")]
    pub kill_light_plane: Option<i32>,
    #[sea_orm(column_name = "killMediumPlane")]
    pub kill_medium_plane: Option<i32>,
    #[sea_orm(column_name = "killHeavyPlane")]
    pub kill_heavy_plane: Option<i32>,
    #[sea_orm(column_name = "killMediumBomber")]
    pub kill_medium_bomber: Option<i32>,
    #[sea_orm(column_name = "killHeavyTank")]
    pub kill_heavy_tank: Option<i32>,
    #[sea_orm(column_name = "killTruck")]
    pub kill_truck: Option<i32>,
    #[sea_orm(column_name = "killTrainLocomotive")]
    pub kill_train_locomotive: Option<i32>,
    #[sea_orm(column_name = "killBuilding")]
    pub kill_building: Option<i32>,
    #[sea_orm(column_name = "killPilot")]
    pub kill_pilot: Option<i32>,
    #[sea_orm(column_name = "killAssist")]
    pub kill_assist: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
