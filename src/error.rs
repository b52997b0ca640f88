use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("No fields provided for update")]
    EmptyUpdate,
}

impl AppError {
    pub fn car_not_found(id: &str) -> Self {
        AppError::NotFound(format!("Car with id {} not found", id))
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::EmptyUpdate => AppError::EmptyUpdate,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidBody(rejection) => {
                tracing::warn!("Invalid request body: {}", rejection.body_text());
                (rejection.status(), rejection.body_text())
            }
            AppError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::EmptyUpdate => {
                tracing::warn!("Empty update rejected");
                (StatusCode::BAD_REQUEST, "No fields provided for update".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
