pub mod classes;
pub mod enrollments;
pub mod exercises;
pub mod health;
pub mod progress;
pub mod routines;
pub mod students;

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

/// 201 body shared by every `add` endpoint.
pub fn created(message: impl Into<String>, id: i64) -> (StatusCode, Json<CreatedResponse>) {
    (
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: message.into(),
            id,
        }),
    )
}
