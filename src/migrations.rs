//! Embedded database migrations
//!
//! The SQL files under `migrations/` are compiled into the binary, so the
//! server can create its schema without any files next to it at runtime.

use crate::db::DbPool;

/// Schema steps as `(name, sql)`, applied in this order.
pub const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_create_alunos.sql",
        include_str!("../migrations/001_create_alunos.sql"),
    ),
    (
        "002_create_aulas.sql",
        include_str!("../migrations/002_create_aulas.sql"),
    ),
    (
        "003_create_aluno_aula.sql",
        include_str!("../migrations/003_create_aluno_aula.sql"),
    ),
    (
        "004_create_exercicios.sql",
        include_str!("../migrations/004_create_exercicios.sql"),
    ),
    (
        "005_create_progresso_aluno.sql",
        include_str!("../migrations/005_create_progresso_aluno.sql"),
    ),
    (
        "006_create_rotinas.sql",
        include_str!("../migrations/006_create_rotinas.sql"),
    ),
];

/// Brings the studio schema up to date.
///
/// Each step name lands in `_migrations` once it has run, so restarting the
/// server against an existing database file only applies new steps.
pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    let mut applied = 0;
    for (name, sql) in MIGRATIONS {
        let done: bool = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM _migrations WHERE name = ?)",
            [name],
            |row| row.get(0),
        )?;
        if done {
            tracing::debug!(migration = name, "Already applied");
            continue;
        }

        // A step and its bookkeeping row land together or not at all
        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.execute("INSERT INTO _migrations (name) VALUES (?)", [name])?;
        tx.commit()?;

        tracing::info!(migration = name, "Applied");
        applied += 1;
    }

    tracing::info!(applied, total = MIGRATIONS.len(), "Schema up to date");
    Ok(())
}

/// Creates the studio tables on a fresh in-memory pool. Nothing is recorded
/// in `_migrations`; the database is thrown away with the pool.
pub fn run_migrations_for_tests(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;

    for (_filename, sql) in MIGRATIONS {
        conn.execute_batch(sql)?;
    }

    Ok(())
}
