use sea_orm::entity::prelude::*;

/// Career event type for a rank promotion.
pub const PROMOTION: i32 = 6;
/// Career event type for an award.
pub const AWARD: i32 = 8;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Option<String>,
    #[sea_orm(column_name = "type")]
    pub event_type: i32,
    #[sea_orm(column_name = "pilotId")]
    pub pilot_id: i32,
    #[sea_orm(column_name = "rankId")]
    pub rank_id: Option<i32>,
    pub tpar2: Option<i64>,
    #[sea_orm(column_name = "squadronId")]
    pub squadron_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
