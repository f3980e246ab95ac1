use axum::{extract::State, http::StatusCode, Json};

use super::{created, CreatedResponse};
use crate::error::{AppError, Result};
use crate::extract::{AppJson, AppPath};
use crate::models::{CreateRoutine, Routine};
use crate::repositories::{ClassRepository, RoutineRepository};

#[derive(Clone)]
pub struct RoutinesState {
    pub routine_repo: RoutineRepository,
    pub class_repo: ClassRepository,
}

pub async fn create(
    State(state): State<RoutinesState>,
    AppJson(body): AppJson<CreateRoutine>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let routine = state
        .routine_repo
        .create(body.class_id, &body.name, &body.description)
        .await?;

    tracing::info!(
        routine_id = routine.id,
        class_id = routine.class_id,
        "Routine created"
    );

    Ok(created(
        format!("Rotina adicionada com sucesso! ID: {}", routine.id),
        routine.id,
    ))
}

pub async fn show(
    State(state): State<RoutinesState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Routine>> {
    let routine = state
        .routine_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Rotina não encontrada"))?;

    Ok(Json(routine))
}

pub async fn list_by_class(
    State(state): State<RoutinesState>,
    AppPath(class_id): AppPath<i64>,
) -> Result<Json<Vec<Routine>>> {
    if !state.class_repo.exists(class_id).await? {
        return Err(AppError::not_found("Aula não encontrada"));
    }

    let routines = state.routine_repo.find_by_class(class_id).await?;
    Ok(Json(routines))
}
