use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect};

pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    /// Creates a new instance of [`MissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Template name of a mission, `None` when the mission or its template is missing
    pub async fn find_template(&self, mission_id: i32) -> Result<Option<String>, DbErr> {
        let template = entity::prelude::Mission::find_by_id(mission_id)
            .select_only()
            .column(entity::mission::Column::MTemplate)
            .into_tuple::<Option<String>>()
            .one(self.db)
            .await?;

        Ok(template.flatten())
    }
}
