use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use entity::event::{AWARD, PROMOTION};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Promotion and award events of the given pilots, oldest first
    pub async fn service_events(
        &self,
        pilot_ids: &[i32],
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        if pilot_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Event::find()
            .filter(entity::event::Column::EventType.is_in([PROMOTION, AWARD]))
            .filter(entity::event::Column::PilotId.is_in(pilot_ids.iter().copied()))
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use passport_test_utils::prelude::*;

    use super::*;

    /// Expect only promotions and awards of the requested pilots, ordered by date
    #[tokio::test]
    async fn returns_service_events_in_date_order() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_event(factory::award(1, 10, "1943.05.01 10:00:00", 4))
            .with_event(factory::promotion(2, 10, "1942.11.19 06:30:00", 2))
            .with_event(factory::promotion(3, 20, "1944.01.01 06:30:00", 3))
            .with_event(entity::event::Model {
                event_type: 1,
                ..factory::promotion(4, 10, "1942.01.01 06:30:00", 1)
            })
            .with_event(factory::promotion(5, 99, "1942.01.01 06:30:00", 1))
            .build()
            .await?;

        let events = EventRepository::new(&test.db)
            .service_events(&[10, 20])
            .await?;

        let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        Ok(())
    }

    #[tokio::test]
    async fn no_pilots_no_events() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let events = EventRepository::new(&test.db).service_events(&[]).await?;

        assert!(events.is_empty());

        Ok(())
    }
}
