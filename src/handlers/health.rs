use axum::{extract::State, Json};
use serde::Serialize;

use crate::db::{with_conn, DbPool};
use crate::version::GIT_VERSION;

#[derive(Clone)]
pub struct HealthState {
    pub pool: DbPool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: bool,
    git_version: &'static str,
}

/// Always answers 200; `database` reports whether a trivial query succeeded.
pub async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    let database = with_conn(&state.pool, |conn| {
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    })
    .await
    .inspect_err(|e| tracing::warn!("Health check query failed: {}", e))
    .is_ok();

    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        database,
        git_version: GIT_VERSION,
    })
}
