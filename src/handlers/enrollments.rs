use axum::{extract::State, http::StatusCode, Json};

use super::{created, CreatedResponse};
use crate::error::{AppError, Result};
use crate::extract::{AppJson, AppPath};
use crate::models::{CreateEnrollment, Enrollment};
use crate::repositories::EnrollmentRepository;

#[derive(Clone)]
pub struct EnrollmentsState {
    pub enrollment_repo: EnrollmentRepository,
}

pub async fn create(
    State(state): State<EnrollmentsState>,
    AppJson(body): AppJson<CreateEnrollment>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let enrollment = state
        .enrollment_repo
        .create(body.student_id, body.class_id, body.status)
        .await?;

    tracing::info!(
        enrollment_id = enrollment.id,
        student_id = enrollment.student_id,
        class_id = enrollment.class_id,
        "Student enrolled in class"
    );

    Ok(created(
        format!(
            "Registro de aluno_aula adicionado com sucesso! ID: {}",
            enrollment.id
        ),
        enrollment.id,
    ))
}

pub async fn show(
    State(state): State<EnrollmentsState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Enrollment>> {
    let enrollment = state
        .enrollment_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Registro de aluno_aula não encontrado"))?;

    Ok(Json(enrollment))
}
