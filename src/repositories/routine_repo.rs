use rusqlite::OptionalExtension;

use crate::db::{with_conn, with_transaction, DbPool};
use crate::error::Result;
use crate::models::{FromSqliteRow, Routine};

#[derive(Clone)]
pub struct RoutineRepository {
    pool: DbPool,
}

impl RoutineRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Routine>> {
        with_conn(&self.pool, move |conn| {
            let sql = format!("SELECT {} FROM rotinas WHERE id = ?", Routine::COLUMNS);
            Ok(conn.query_row(&sql, [id], Routine::from_row).optional()?)
        })
        .await
    }

    pub async fn find_by_class(&self, class_id: i64) -> Result<Vec<Routine>> {
        with_conn(&self.pool, move |conn| {
            let sql = format!(
                "SELECT {} FROM rotinas WHERE aula_id = ? ORDER BY id",
                Routine::COLUMNS
            );
            let mut stmt = conn.prepare(&sql)?;
            let routines = stmt
                .query_map([class_id], Routine::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(routines)
        })
        .await
    }

    pub async fn create(&self, class_id: i64, name: &str, description: &str) -> Result<Routine> {
        let mut routine = Routine {
            id: 0,
            class_id,
            name: name.to_string(),
            description: description.to_string(),
        };

        with_transaction(&self.pool, move |tx| {
            tx.execute(
                "INSERT INTO rotinas (aula_id, nome, descricao) VALUES (?, ?, ?)",
                rusqlite::params![routine.class_id, routine.name, routine.description],
            )?;
            routine.id = tx.last_insert_rowid();
            Ok(routine)
        })
        .await
    }
}
