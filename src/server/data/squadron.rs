use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect};

pub struct SquadronRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SquadronRepository<'a, C> {
    /// Creates a new instance of [`SquadronRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Static artwork folder ID (`configId`) of a squadron
    pub async fn find_config_id(&self, squadron_id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::Squadron::find_by_id(squadron_id)
            .select_only()
            .column(entity::squadron::Column::ConfigId)
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }
}
