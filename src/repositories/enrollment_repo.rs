use rusqlite::OptionalExtension;

use crate::db::{with_conn, with_transaction, DbPool};
use crate::error::Result;
use crate::models::{Enrollment, FromSqliteRow};

#[derive(Clone)]
pub struct EnrollmentRepository {
    pool: DbPool,
}

impl EnrollmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        with_conn(&self.pool, move |conn| {
            let sql = format!("SELECT {} FROM aluno_aula WHERE id = ?", Enrollment::COLUMNS);
            Ok(conn.query_row(&sql, [id], Enrollment::from_row).optional()?)
        })
        .await
    }

    /// Fails with a foreign key violation when either side does not exist.
    pub async fn create(&self, student_id: i64, class_id: i64, status: i64) -> Result<Enrollment> {
        with_transaction(&self.pool, move |tx| {
            tx.execute(
                "INSERT INTO aluno_aula (aluno_id, aula_id, status) VALUES (?, ?, ?)",
                [student_id, class_id, status],
            )?;
            Ok(Enrollment {
                id: tx.last_insert_rowid(),
                student_id,
                class_id,
                status,
            })
        })
        .await
    }
}
