use axum::{extract::State, http::StatusCode, Json};

use super::{created, CreatedResponse};
use crate::error::{AppError, Result};
use crate::extract::{AppJson, AppPath};
use crate::models::progress::parse_progress_date;
use crate::models::{CreateProgress, Progress};
use crate::repositories::{ProgressRepository, StudentRepository};

#[derive(Clone)]
pub struct ProgressState {
    pub progress_repo: ProgressRepository,
    pub student_repo: StudentRepository,
}

pub async fn create(
    State(state): State<ProgressState>,
    AppJson(body): AppJson<CreateProgress>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let date = parse_progress_date(&body.date)
        .ok_or_else(|| AppError::validation("Formato de data inválido. Use o formato AAAA-MM-DD"))?;

    let progress = state
        .progress_repo
        .create(body.student_id, date, body.weight, body.body_fat, body.muscle)
        .await?;

    tracing::info!(
        progress_id = progress.id,
        student_id = progress.student_id,
        "Progress entry recorded"
    );

    Ok(created(
        format!(
            "Progresso do aluno adicionado com sucesso! ID: {}",
            progress.id
        ),
        progress.id,
    ))
}

pub async fn show(
    State(state): State<ProgressState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Progress>> {
    let progress = state
        .progress_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Progresso do aluno não encontrado"))?;

    Ok(Json(progress))
}

/// 404 only when the student itself is unknown; a student without entries
/// gets an empty list.
pub async fn list_by_student(
    State(state): State<ProgressState>,
    AppPath(student_id): AppPath<i64>,
) -> Result<Json<Vec<Progress>>> {
    if !state.student_repo.exists(student_id).await? {
        return Err(AppError::not_found("Aluno não encontrado"));
    }

    let entries = state.progress_repo.find_by_student(student_id).await?;
    Ok(Json(entries))
}
