use chrono::NaiveDate;
use rusqlite::OptionalExtension;

use crate::db::{with_conn, with_transaction, DbPool};
use crate::error::Result;
use crate::models::{FromSqliteRow, Progress};

#[derive(Clone)]
pub struct ProgressRepository {
    pool: DbPool,
}

impl ProgressRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Progress>> {
        with_conn(&self.pool, move |conn| {
            let sql = format!("SELECT {} FROM progresso_aluno WHERE id = ?", Progress::COLUMNS);
            Ok(conn.query_row(&sql, [id], Progress::from_row).optional()?)
        })
        .await
    }

    /// Entries for one student, oldest measurement first.
    pub async fn find_by_student(&self, student_id: i64) -> Result<Vec<Progress>> {
        with_conn(&self.pool, move |conn| {
            let sql = format!(
                "SELECT {} FROM progresso_aluno WHERE aluno_id = ? ORDER BY data, id",
                Progress::COLUMNS
            );
            let mut stmt = conn.prepare(&sql)?;
            let entries = stmt
                .query_map([student_id], Progress::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
    }

    pub async fn create(
        &self,
        student_id: i64,
        date: NaiveDate,
        weight: f64,
        body_fat: f64,
        muscle: f64,
    ) -> Result<Progress> {
        with_transaction(&self.pool, move |tx| {
            tx.execute(
                "INSERT INTO progresso_aluno (aluno_id, data, peso, gordura_corporal, musculo)
                 VALUES (?, ?, ?, ?, ?)",
                rusqlite::params![student_id, date, weight, body_fat, muscle],
            )?;
            Ok(Progress {
                id: tx.last_insert_rowid(),
                student_id,
                date,
                weight,
                body_fat,
                muscle,
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::error::AppError;
    use crate::migrations::run_migrations_for_tests;

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        pool
    }

    fn create_test_student(pool: &DbPool, email: &str) -> i64 {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO alunos (nome, sobrenome, email, telefone, data_nascimento, ativo)
             VALUES ('Ana', 'Silva', ?, '0', '1990-06-15', 1)",
            [email],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_progress() {
        let pool = setup_test_db();
        let student_id = create_test_student(&pool, "ana@example.com");
        let repo = ProgressRepository::new(pool);

        let entry = repo
            .create(student_id, date(2024, 1, 10), 80.5, 20.0, 35.25)
            .await
            .unwrap();
        let found = repo.find_by_id(entry.id).await.unwrap().unwrap();

        assert_eq!(found.student_id, student_id);
        assert_eq!(found.date, date(2024, 1, 10));
        assert_eq!(found.weight, 80.5);
        assert_eq!(found.muscle, 35.25);
    }

    #[tokio::test]
    async fn test_find_by_student_only_returns_own_entries() {
        let pool = setup_test_db();
        let ana = create_test_student(&pool, "ana@example.com");
        let bruno = create_test_student(&pool, "bruno@example.com");
        let repo = ProgressRepository::new(pool);

        repo.create(ana, date(2024, 2, 1), 79.0, 19.5, 35.5).await.unwrap();
        repo.create(ana, date(2024, 1, 1), 80.0, 20.0, 35.0).await.unwrap();
        repo.create(bruno, date(2024, 1, 1), 90.0, 25.0, 38.0).await.unwrap();

        let entries = repo.find_by_student(ana).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, date(2024, 1, 1));
        assert_eq!(entries[1].date, date(2024, 2, 1));

        assert!(repo.find_by_student(9999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_for_missing_student_fails() {
        let repo = ProgressRepository::new(setup_test_db());
        let err = repo
            .create(404, date(2024, 1, 1), 1.0, 1.0, 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
