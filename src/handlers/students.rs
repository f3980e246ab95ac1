use axum::{extract::State, http::StatusCode, Json};

use super::{created, CreatedResponse, MessageResponse};
use crate::error::{AppError, Result};
use crate::extract::{AppJson, AppPath};
use crate::models::student::{parse_birth_date, parse_birth_date_lenient};
use crate::models::{CreateStudent, Student, StudentChanges, StudentFilter, UpdateStudent};
use crate::repositories::StudentRepository;

const NOT_FOUND: &str = "Aluno não encontrado";
const INVALID_BIRTH_DATE: &str = "Formato de data inválido. Use o formato DD/MM/AAAA";

#[derive(Clone)]
pub struct StudentsState {
    pub student_repo: StudentRepository,
}

pub async fn create(
    State(state): State<StudentsState>,
    AppJson(body): AppJson<CreateStudent>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let birth_date =
        parse_birth_date(&body.birth_date).ok_or_else(|| AppError::validation(INVALID_BIRTH_DATE))?;

    let student = state
        .student_repo
        .create(&body.name, &body.surname, &body.email, &body.phone, birth_date)
        .await?;

    tracing::info!(student_id = student.id, "Student created");

    Ok(created(
        format!("Aluno adicionado com sucesso! ID: {}", student.id),
        student.id,
    ))
}

pub async fn show(
    State(state): State<StudentsState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Student>> {
    let student = state
        .student_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(Json(student))
}

pub async fn filter(
    State(state): State<StudentsState>,
    AppJson(filter): AppJson<StudentFilter>,
) -> Result<Json<Vec<Student>>> {
    let birth_date = filter
        .birth_date
        .as_deref()
        .map(|s| parse_birth_date_lenient(s).ok_or_else(|| AppError::validation(INVALID_BIRTH_DATE)))
        .transpose()?;

    let students = state.student_repo.filter(filter, birth_date).await?;
    Ok(Json(students))
}

pub async fn list(State(state): State<StudentsState>) -> Result<Json<Vec<Student>>> {
    let students = state.student_repo.find_all().await?;
    Ok(Json(students))
}

pub async fn update(
    State(state): State<StudentsState>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<UpdateStudent>,
) -> Result<Json<MessageResponse>> {
    let birth_date = body
        .birth_date
        .as_deref()
        .map(|s| parse_birth_date_lenient(s).ok_or_else(|| AppError::validation(INVALID_BIRTH_DATE)))
        .transpose()?;

    let changes = StudentChanges {
        name: body.name,
        surname: body.surname,
        email: body.email,
        phone: body.phone,
        birth_date,
    };

    if !state.student_repo.update(id, changes).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(MessageResponse::new("Aluno atualizado com sucesso!"))
}

pub async fn deactivate(
    State(state): State<StudentsState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>> {
    if !state.student_repo.set_active(id, false).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    tracing::info!(student_id = id, "Student deactivated");
    Ok(MessageResponse::new("Aluno inativado com sucesso!"))
}

pub async fn activate(
    State(state): State<StudentsState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>> {
    if !state.student_repo.set_active(id, true).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }

    tracing::info!(student_id = id, "Student activated");
    Ok(MessageResponse::new("Aluno ativado com sucesso!"))
}
