use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::{Deserialize, Serialize, Serializer};

use super::de::int_or_string;
use super::FromSqliteRow;

pub const CLASS_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Length of a class as it travels over the wire.
///
/// The stored value is a total number of seconds; only the part within a
/// single day is reported back, so 25h reads as `{hours: 1, minutes: 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDuration {
    #[serde(deserialize_with = "int_or_string")]
    pub hours: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub minutes: i64,
}

impl ClassDuration {
    /// `None` when the parts do not fit in an `i64` number of seconds.
    pub fn total_seconds(&self) -> Option<i64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)
    }

    pub fn from_total_seconds(total: i64) -> Self {
        let within_day = total.rem_euclid(SECONDS_PER_DAY);
        Self {
            hours: within_day / 3600,
            minutes: (within_day % 3600) / 60,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Class {
    pub id: i64,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data_hora", serialize_with = "serialize_date_time")]
    pub starts_at: NaiveDateTime,
    #[serde(rename = "duracao")]
    pub duration: ClassDuration,
    #[serde(rename = "localizacao")]
    pub location: String,
}

fn serialize_date_time<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(CLASS_DATE_TIME_FORMAT))
}

impl FromSqliteRow for Class {
    const COLUMNS: &'static str = "id, descricao, data_hora, duracao_segundos, localizacao";

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let seconds: i64 = row.get("duracao_segundos")?;
        Ok(Self {
            id: row.get("id")?,
            description: row.get("descricao")?,
            starts_at: row.get("data_hora")?,
            duration: ClassDuration::from_total_seconds(seconds),
            location: row.get("localizacao")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateClass {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data_hora")]
    pub starts_at: String,
    #[serde(rename = "duracao")]
    pub duration: ClassDuration,
    #[serde(rename = "localizacao")]
    pub location: String,
}

pub fn parse_class_date_time(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), CLASS_DATE_TIME_FORMAT).ok()
}
