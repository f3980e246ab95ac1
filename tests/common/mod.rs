#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fitstudio::db::{create_memory_pool, DbPool};
use fitstudio::migrations::run_migrations_for_tests;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    fitstudio::routes::app(pool)
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub fn student_body(email: &str) -> Value {
    json!({
        "nome": "Ana",
        "sobrenome": "Silva",
        "email": email,
        "telefone": "11999990000",
        "data_nascimento": "15/06/1990",
        "ativo": 1
    })
}

pub async fn create_test_student(app: &Router, email: &str) -> i64 {
    let (status, body) = post(app, "/api/alunos/add", student_body(email)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

pub async fn create_test_class(app: &Router, description: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/aulas/add",
        json!({
            "descricao": description,
            "data_hora": "2024-05-10 07:00:00",
            "duracao": {"hours": 1, "minutes": 0},
            "localizacao": "Sala 1"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

pub fn count_students_with_email(pool: &DbPool, email: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.query_row("SELECT COUNT(*) FROM alunos WHERE email = ?", [email], |row| {
        row.get(0)
    })
    .unwrap()
}
