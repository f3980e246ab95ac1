use axum::{http::StatusCode, response::IntoResponse};
use fitstudio::error::AppError;
use http_body_util::BodyExt;
use serde_json::Value;

async fn body_json(error: AppError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404() {
    let (status, body) = body_json(AppError::NotFound("Aula não encontrada".to_string())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Aula não encontrada");
}

#[tokio::test]
async fn test_validation_returns_400() {
    let (status, body) = body_json(AppError::Validation("Dados inválidos".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Dados inválidos");
}

#[tokio::test]
async fn test_internal_hides_details() {
    let (status, body) = body_json(AppError::Internal("thread panicked at x.rs".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["message"].as_str().unwrap().contains("x.rs"));
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let (status, body) = body_json(AppError::Database(rusqlite::Error::InvalidQuery)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Erro ao acessar o banco de dados");
}

#[tokio::test]
async fn test_foreign_key_violation_returns_400() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         CREATE TABLE parent (id INTEGER PRIMARY KEY);
         CREATE TABLE child (parent_id INTEGER NOT NULL REFERENCES parent(id));",
    )
    .unwrap();
    let err = conn
        .execute("INSERT INTO child (parent_id) VALUES (1)", [])
        .unwrap_err();

    let (status, _) = body_json(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
