use entity::{career, event, mission, pilot, sortie, squadron};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, IntoActiveModel};

use crate::error::TestError;

/// Inserts rows into the test career database
pub struct CareerFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CareerFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_career(
        &self,
        id: i32,
        player_id: i32,
        extends: i32,
    ) -> Result<career::Model, TestError> {
        let model = career::ActiveModel {
            id: Set(id),
            player_id: Set(player_id),
            extends: Set(extends),
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_mission(
        &self,
        id: i32,
        template: &str,
    ) -> Result<mission::Model, TestError> {
        let model = mission::ActiveModel {
            id: Set(id),
            m_template: Set(Some(template.to_string())),
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_squadron(
        &self,
        id: i32,
        config_id: i32,
    ) -> Result<squadron::Model, TestError> {
        let model = squadron::ActiveModel {
            id: Set(id),
            config_id: Set(config_id),
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_pilot(&self, pilot: pilot::Model) -> Result<pilot::Model, TestError> {
        Ok(pilot.into_active_model().reset_all().insert(self.db).await?)
    }

    pub async fn insert_event(&self, event: event::Model) -> Result<event::Model, TestError> {
        Ok(event.into_active_model().reset_all().insert(self.db).await?)
    }

    pub async fn insert_sortie(&self, sortie: sortie::Model) -> Result<sortie::Model, TestError> {
        Ok(sortie.into_active_model().reset_all().insert(self.db).await?)
    }
}
