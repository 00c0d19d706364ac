use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, JsonValue, Statement};
use serde_json::{Map, Value};

pub struct SortieRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SortieRepository<'a, C> {
    /// Creates a new instance of [`SortieRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every sortie row of the given pilots keyed by column name, oldest first.
    ///
    /// Rows are read whole since the kill counter columns differ between game versions.
    pub async fn rows_for_pilots(
        &self,
        pilot_ids: &[i32],
    ) -> Result<Vec<Map<String, Value>>, DbErr> {
        if pilot_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; pilot_ids.len()].join(", ");
        let sql = format!(
            "SELECT * FROM sortie WHERE pilotId IN ({}) ORDER BY date ASC, id ASC",
            placeholders
        );

        let rows = JsonValue::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            sql,
            pilot_ids.iter().map(|id| (*id).into()),
        ))
        .all(self.db)
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use passport_test_utils::prelude::*;

    use super::*;

    /// Expect sorties of every requested pilot, oldest first
    #[tokio::test]
    async fn returns_rows_in_date_order() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_sortie(factory::sortie(1, 20, "1943.02.01 08:00:00"))
            .with_sortie(factory::sortie(2, 10, "1942.12.01 08:00:00"))
            .with_sortie(factory::sortie(3, 30, "1942.11.01 08:00:00"))
            .build()
            .await?;

        let rows = SortieRepository::new(&test.db)
            .rows_for_pilots(&[10, 20])
            .await?;

        let ids: Vec<i64> = rows
            .iter()
            .filter_map(|row| row.get("id").and_then(Value::as_i64))
            .collect();
        assert_eq!(ids, vec![2, 1]);

        Ok(())
    }
}
