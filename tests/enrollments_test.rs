mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, post};

#[tokio::test]
async fn test_create_and_get_enrollment() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);
    let student_id = common::create_test_student(&app, "ana@example.com").await;
    let class_id = common::create_test_class(&app, "Yoga").await;

    let (status, created) = post(
        &app,
        "/api/aluno_aula/add",
        json!({"aluno_id": student_id, "aula_id": class_id, "status": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, &format!("/api/aluno_aula/{}", created["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aluno_id"], student_id);
    assert_eq!(body["aula_id"], class_id);
    assert_eq!(body["status"], 1);
}

#[tokio::test]
async fn test_unknown_student_rejected() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let class_id = common::create_test_class(&app, "Yoga").await;

    let (status, body) = post(
        &app,
        "/api/aluno_aula/add",
        json!({"aluno_id": 999, "aula_id": class_id, "status": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Registro relacionado não encontrado");

    let conn = pool.get().unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM aluno_aula", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_missing_status_rejected() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let (status, _) = post(&app, "/api/aluno_aula/add", json!({"aluno_id": 1, "aula_id": 1})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_enrollment_returns_404() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let (status, _) = get(&app, "/api/aluno_aula/3").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
