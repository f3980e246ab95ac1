use axum::{extract::State, http::StatusCode, Json};

use super::{created, CreatedResponse};
use crate::error::{AppError, Result};
use crate::extract::{AppJson, AppPath};
use crate::models::class::parse_class_date_time;
use crate::models::{Class, CreateClass};
use crate::repositories::ClassRepository;

#[derive(Clone)]
pub struct ClassesState {
    pub class_repo: ClassRepository,
}

pub async fn create(
    State(state): State<ClassesState>,
    AppJson(body): AppJson<CreateClass>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let starts_at = parse_class_date_time(&body.starts_at).ok_or_else(|| {
        AppError::validation("Formato de data/hora inválido. Use o formato AAAA-MM-DD HH:MM:SS")
    })?;

    if body.duration.hours < 0 || body.duration.minutes < 0 {
        return Err(AppError::validation(
            "Duração inválida. Horas e minutos não podem ser negativos",
        ));
    }

    let seconds = body
        .duration
        .total_seconds()
        .ok_or_else(|| AppError::validation("Duração inválida. Valor grande demais"))?;

    let class = state
        .class_repo
        .create(&body.description, starts_at, seconds, &body.location)
        .await?;

    tracing::info!(class_id = class.id, "Class created");

    Ok(created(
        format!("Aula adicionada com sucesso! ID: {}", class.id),
        class.id,
    ))
}

pub async fn show(
    State(state): State<ClassesState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Class>> {
    let class = state
        .class_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Aula não encontrada"))?;

    Ok(Json(class))
}

pub async fn list(State(state): State<ClassesState>) -> Result<Json<Vec<Class>>> {
    let classes = state.class_repo.find_all().await?;
    Ok(Json(classes))
}
