use axum::{extract::State, http::StatusCode, Json};

use super::{created, CreatedResponse};
use crate::error::{AppError, Result};
use crate::extract::{AppJson, AppPath};
use crate::models::{CreateExercise, Exercise};
use crate::repositories::ExerciseRepository;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

pub async fn create(
    State(state): State<ExercisesState>,
    AppJson(body): AppJson<CreateExercise>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    if body.name.trim().is_empty() {
        return Err(AppError::validation("O nome do exercício é obrigatório"));
    }

    let exercise = state
        .exercise_repo
        .create(&body.name, &body.description, &body.muscle_group)
        .await?;

    tracing::info!(exercise_id = exercise.id, "Exercise created");

    Ok(created(
        format!("Exercício adicionado com sucesso! ID: {}", exercise.id),
        exercise.id,
    ))
}

pub async fn show(
    State(state): State<ExercisesState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Exercise>> {
    let exercise = state
        .exercise_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Exercício não encontrado"))?;

    Ok(Json(exercise))
}

pub async fn list(State(state): State<ExercisesState>) -> Result<Json<Vec<Exercise>>> {
    let exercises = state.exercise_repo.find_all().await?;
    Ok(Json(exercises))
}
