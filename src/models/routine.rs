use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// A training routine attached to a class. The `link` column is not part of
/// the API surface and is stored empty.
#[derive(Debug, Clone, Serialize)]
pub struct Routine {
    pub id: i64,
    #[serde(rename = "aula_id")]
    pub class_id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

impl FromSqliteRow for Routine {
    const COLUMNS: &'static str = "id, aula_id, nome, descricao";

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            class_id: row.get("aula_id")?,
            name: row.get("nome")?,
            description: row.get("descricao")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRoutine {
    #[serde(rename = "aula_id")]
    pub class_id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
}
