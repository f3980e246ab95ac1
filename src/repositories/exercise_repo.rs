use rusqlite::OptionalExtension;

use crate::db::{with_conn, with_transaction, DbPool};
use crate::error::Result;
use crate::models::{Exercise, FromSqliteRow};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Exercise>> {
        with_conn(&self.pool, move |conn| {
            let sql = format!("SELECT {} FROM exercicios WHERE id = ?", Exercise::COLUMNS);
            Ok(conn.query_row(&sql, [id], Exercise::from_row).optional()?)
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<Exercise>> {
        with_conn(&self.pool, |conn| {
            let sql = format!("SELECT {} FROM exercicios ORDER BY id", Exercise::COLUMNS);
            let mut stmt = conn.prepare(&sql)?;
            let exercises = stmt
                .query_map([], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
    }

    pub async fn create(
        &self,
        name: &str,
        description: &str,
        muscle_group: &str,
    ) -> Result<Exercise> {
        let mut exercise = Exercise {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            muscle_group: muscle_group.to_string(),
        };

        with_transaction(&self.pool, move |tx| {
            tx.execute(
                "INSERT INTO exercicios (nome, descricao, grupo_muscular) VALUES (?, ?, ?)",
                rusqlite::params![exercise.name, exercise.description, exercise.muscle_group],
            )?;
            exercise.id = tx.last_insert_rowid();
            Ok(exercise)
        })
        .await
    }
}
