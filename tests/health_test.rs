mod common;

use axum::body::Body;
use http::{header, Request, StatusCode};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_database() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], true);
    assert!(body["git_version"].is_string());
}

#[tokio::test]
async fn test_any_origin_allowed() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/alunos")
                .header(header::ORIGIN, "http://frontend.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
