use chrono::NaiveDate;
use rusqlite::Row;
use serde::{de::IgnoredAny, Deserialize, Serialize};

use super::FromSqliteRow;

/// Birth dates are sent by clients as `DD/MM/YYYY`.
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sobrenome")]
    pub surname: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "data_nascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "ativo")]
    pub active: i64,
}

impl FromSqliteRow for Student {
    const COLUMNS: &'static str = "id, nome, sobrenome, email, telefone, data_nascimento, ativo";

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("nome")?,
            surname: row.get("sobrenome")?,
            email: row.get("email")?,
            phone: row.get("telefone")?,
            birth_date: row.get("data_nascimento")?,
            active: row.get("ativo")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sobrenome")]
    pub surname: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "data_nascimento")]
    pub birth_date: String,
    /// Must be present, but new students always start active.
    #[serde(rename = "ativo")]
    pub active: IgnoredAny,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudent {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "sobrenome")]
    pub surname: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "data_nascimento")]
    pub birth_date: Option<String>,
}

/// Validated form of [`UpdateStudent`].
#[derive(Debug, Default, Clone)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl StudentChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.birth_date.is_none()
    }
}

/// Exact-match filter. Every supplied field must match; absent fields match
/// anything.
#[derive(Debug, Default, Deserialize)]
pub struct StudentFilter {
    pub id: Option<i64>,
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "sobrenome")]
    pub surname: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "data_nascimento")]
    pub birth_date: Option<String>,
    #[serde(rename = "ativo")]
    pub active: Option<i64>,
}

/// Strict `DD/MM/YYYY` parsing used when a student is created.
pub fn parse_birth_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), BIRTH_DATE_FORMAT).ok()
}

/// Accepts `DD/MM/YYYY` or the `YYYY-MM-DD` form the API returns.
pub fn parse_birth_date_lenient(input: &str) -> Option<NaiveDate> {
    parse_birth_date(input).or_else(|| NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(
            parse_birth_date("15/06/1990"),
            NaiveDate::from_ymd_opt(1990, 6, 15)
        );
        assert_eq!(parse_birth_date("1990-06-15"), None);
        assert_eq!(parse_birth_date("31/02/1990"), None);
        assert_eq!(parse_birth_date(""), None);
    }

    #[test]
    fn test_parse_birth_date_lenient() {
        let expected = NaiveDate::from_ymd_opt(1990, 6, 15);
        assert_eq!(parse_birth_date_lenient("15/06/1990"), expected);
        assert_eq!(parse_birth_date_lenient("1990-06-15"), expected);
        assert_eq!(parse_birth_date_lenient("June 15"), None);
    }

    #[test]
    fn test_create_student_requires_active_field() {
        let without_active = r#"{
            "nome": "Ana", "sobrenome": "Silva", "email": "ana@example.com",
            "telefone": "1199999", "data_nascimento": "15/06/1990"
        }"#;
        assert!(serde_json::from_str::<CreateStudent>(without_active).is_err());

        let with_active = r#"{
            "nome": "Ana", "sobrenome": "Silva", "email": "ana@example.com",
            "telefone": "1199999", "data_nascimento": "15/06/1990", "ativo": true
        }"#;
        let parsed: CreateStudent = serde_json::from_str(with_active).unwrap();
        assert_eq!(parsed.name, "Ana");
    }

    #[test]
    fn test_student_serializes_wire_names() {
        let student = Student {
            id: 1,
            name: "Ana".to_string(),
            surname: "Silva".to_string(),
            email: "ana@example.com".to_string(),
            phone: "1199999".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            active: 1,
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["data_nascimento"], "1990-06-15");
        assert_eq!(json["ativo"], 1);
    }
}
