use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "grupo_muscular")]
    pub muscle_group: String,
}

impl FromSqliteRow for Exercise {
    const COLUMNS: &'static str = "id, nome, descricao, grupo_muscular";

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("nome")?,
            description: row.get("descricao")?,
            muscle_group: row.get("grupo_muscular")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "grupo_muscular")]
    pub muscle_group: String,
}
