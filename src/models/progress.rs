use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::de::float_or_string;
use super::FromSqliteRow;

pub const PROGRESS_DATE_FORMAT: &str = "%Y-%m-%d";

/// One body-measurement entry for a student.
#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub id: i64,
    #[serde(rename = "aluno_id")]
    pub student_id: i64,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "gordura_corporal")]
    pub body_fat: f64,
    #[serde(rename = "musculo")]
    pub muscle: f64,
}

impl FromSqliteRow for Progress {
    const COLUMNS: &'static str = "id, aluno_id, data, peso, gordura_corporal, musculo";

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            student_id: row.get("aluno_id")?,
            date: row.get("data")?,
            weight: row.get("peso")?,
            body_fat: row.get("gordura_corporal")?,
            muscle: row.get("musculo")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProgress {
    #[serde(rename = "aluno_id")]
    pub student_id: i64,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "peso", deserialize_with = "float_or_string")]
    pub weight: f64,
    #[serde(rename = "gordura_corporal", deserialize_with = "float_or_string")]
    pub body_fat: f64,
    #[serde(rename = "musculo", deserialize_with = "float_or_string")]
    pub muscle: f64,
}

pub fn parse_progress_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), PROGRESS_DATE_FORMAT).ok()
}
