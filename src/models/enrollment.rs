use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// Link between a student and a class, carrying an attendance/enrollment
/// status code.
#[derive(Debug, Clone, Serialize)]
pub struct Enrollment {
    pub id: i64,
    #[serde(rename = "aluno_id")]
    pub student_id: i64,
    #[serde(rename = "aula_id")]
    pub class_id: i64,
    pub status: i64,
}

impl FromSqliteRow for Enrollment {
    const COLUMNS: &'static str = "id, aluno_id, aula_id, status";

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            student_id: row.get("aluno_id")?,
            class_id: row.get("aula_id")?,
            status: row.get("status")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEnrollment {
    #[serde(rename = "aluno_id")]
    pub student_id: i64,
    #[serde(rename = "aula_id")]
    pub class_id: i64,
    pub status: i64,
}
