use rusqlite::Row;

/// A record that can be read back from its table.
pub trait FromSqliteRow: Sized {
    /// Column list selected for this record, in the order `from_row` reads.
    const COLUMNS: &'static str;

    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
