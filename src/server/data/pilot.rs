use sea_orm::{
    ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait, FromQueryResult, JsonValue,
    QueryFilter, QueryOrder, QuerySelect, Statement,
};
use serde_json::{Map, Value};

/// Identity columns of a pilot row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PilotIdentity {
    pub id: i32,
    pub description: String,
    pub squadron_id: Option<i32>,
    pub rank_id: Option<i32>,
}

#[derive(FromQueryResult)]
struct TableColumn {
    name: String,
}

pub struct PilotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PilotRepository<'a, C> {
    /// Creates a new instance of [`PilotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// ID of the first pilot row carrying exactly the given description
    pub async fn find_id_by_description(&self, description: &str) -> Result<Option<i32>, DbErr> {
        entity::prelude::Pilot::find()
            .select_only()
            .column(entity::pilot::Column::Id)
            .filter(entity::pilot::Column::Description.eq(description))
            .order_by_asc(entity::pilot::Column::Id)
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    /// Identity columns of a pilot by ID.
    ///
    /// Only the columns the roster and record need are selected so the query does not depend on
    /// the counter columns a given game version has.
    pub async fn find_identity(&self, pilot_id: i32) -> Result<Option<PilotIdentity>, DbErr> {
        let row = entity::prelude::Pilot::find_by_id(pilot_id)
            .select_only()
            .columns([
                entity::pilot::Column::Id,
                entity::pilot::Column::Description,
                entity::pilot::Column::SquadronId,
                entity::pilot::Column::RankId,
            ])
            .into_tuple::<(i32, String, Option<i32>, Option<i32>)>()
            .one(self.db)
            .await?;

        Ok(row.map(|(id, description, squadron_id, rank_id)| PilotIdentity {
            id,
            description,
            squadron_id,
            rank_id,
        }))
    }

    /// Column names of the `pilot` table in table order
    pub async fn column_names(&self) -> Result<Vec<String>, DbErr> {
        let columns = TableColumn::find_by_statement(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT name FROM pragma_table_info('pilot') ORDER BY cid",
        ))
        .all(self.db)
        .await?;

        Ok(columns.into_iter().map(|column| column.name).collect())
    }

    /// Every column of a pilot row keyed by column name
    pub async fn find_row(&self, pilot_id: i32) -> Result<Option<Map<String, Value>>, DbErr> {
        let row = JsonValue::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT * FROM pilot WHERE id = ?",
            [pilot_id.into()],
        ))
        .one(self.db)
        .await?;

        Ok(row.and_then(|row| match row {
            Value::Object(map) => Some(map),
            _ => None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use passport_test_utils::prelude::*;

    use super::*;

    /// Expect lookups by description to return the lowest matching ID
    #[tokio::test]
    async fn finds_pilot_by_description() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_pilot(factory::pilot(7, "fullname=Ivan%20Petrov"))
            .with_pilot(factory::pilot(3, "fullname=Ivan%20Petrov"))
            .build()
            .await?;

        let repository = PilotRepository::new(&test.db);

        assert_eq!(
            repository
                .find_id_by_description("fullname=Ivan%20Petrov")
                .await?,
            Some(3)
        );
        assert_eq!(repository.find_id_by_description("nobody").await?, None);

        Ok(())
    }

    /// Expect the full row and the table's column order
    #[tokio::test]
    async fn reads_dynamic_columns() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_pilot(entity::pilot::Model {
                kill_truck: Some(4),
                flight_time: Some(3661),
                ..factory::pilot(1, "fullname=A")
            })
            .build()
            .await?;

        let repository = PilotRepository::new(&test.db);

        let columns = repository.column_names().await?;
        assert_eq!(columns.first().map(String::as_str), Some("id"));
        assert!(columns.iter().any(|c| c == "killTruck"));

        let row = repository.find_row(1).await?.expect("pilot row");
        assert_eq!(row["killTruck"], serde_json::json!(4));
        assert_eq!(row["flightTime"], serde_json::json!(3661));
        assert!(repository.find_row(2).await?.is_none());

        Ok(())
    }
}
