use chrono::NaiveDateTime;
use rusqlite::OptionalExtension;

use crate::db::{with_conn, with_transaction, DbPool};
use crate::error::Result;
use crate::models::{Class, ClassDuration, FromSqliteRow};

#[derive(Clone)]
pub struct ClassRepository {
    pool: DbPool,
}

impl ClassRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Class>> {
        with_conn(&self.pool, move |conn| {
            let sql = format!("SELECT {} FROM aulas WHERE id = ?", Class::COLUMNS);
            Ok(conn.query_row(&sql, [id], Class::from_row).optional()?)
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<Class>> {
        with_conn(&self.pool, |conn| {
            let sql = format!("SELECT {} FROM aulas ORDER BY id", Class::COLUMNS);
            let mut stmt = conn.prepare(&sql)?;
            let classes = stmt
                .query_map([], Class::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(classes)
        })
        .await
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        with_conn(&self.pool, move |conn| {
            let found: bool = conn.query_row(
                "SELECT COUNT(*) > 0 FROM aulas WHERE id = ?",
                [id],
                |row| row.get(0),
            )?;
            Ok(found)
        })
        .await
    }

    /// Stores the full length in seconds; the returned record carries the
    /// same within-a-day view a later read would produce.
    pub async fn create(
        &self,
        description: &str,
        starts_at: NaiveDateTime,
        seconds: i64,
        location: &str,
    ) -> Result<Class> {
        let description = description.to_string();
        let location = location.to_string();

        with_transaction(&self.pool, move |tx| {
            tx.execute(
                "INSERT INTO aulas (descricao, data_hora, duracao_segundos, localizacao)
                 VALUES (?, ?, ?, ?)",
                rusqlite::params![description, starts_at, seconds, location],
            )?;
            Ok(Class {
                id: tx.last_insert_rowid(),
                description,
                starts_at,
                duration: ClassDuration::from_total_seconds(seconds),
                location,
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;
    use crate::models::class::parse_class_date_time;

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        pool
    }

    #[tokio::test]
    async fn test_create_and_find_class() {
        let repo = ClassRepository::new(setup_test_db());
        let starts_at = parse_class_date_time("2024-05-10 07:00:00").unwrap();

        let class = repo
            .create("Pilates", starts_at, 5400, "Sala 1")
            .await
            .unwrap();

        let found = repo.find_by_id(class.id).await.unwrap().unwrap();
        assert_eq!(found.description, "Pilates");
        assert_eq!(found.starts_at, starts_at);
        assert_eq!(found.duration, ClassDuration { hours: 1, minutes: 30 });
        assert!(repo.exists(class.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_long_duration_is_stored_whole() {
        let pool = setup_test_db();
        let repo = ClassRepository::new(pool.clone());
        let starts_at = parse_class_date_time("2024-05-10 07:00:00").unwrap();

        let class = repo
            .create("Retiro", starts_at, 25 * 3600, "Sítio")
            .await
            .unwrap();
        assert_eq!(class.duration, ClassDuration { hours: 1, minutes: 0 });

        let conn = pool.get().unwrap();
        let seconds: i64 = conn
            .query_row(
                "SELECT duracao_segundos FROM aulas WHERE id = ?",
                [class.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(seconds, 25 * 3600);
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = ClassRepository::new(setup_test_db());
        let starts_at = parse_class_date_time("2024-05-10 07:00:00").unwrap();
        repo.create("Yoga", starts_at, 3600, "Sala 1").await.unwrap();
        repo.create("Funcional", starts_at, 3600, "Sala 2").await.unwrap();

        let all = repo.find_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(names, vec!["Yoga", "Funcional"]);
    }
}
