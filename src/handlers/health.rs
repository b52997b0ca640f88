use axum::{extract::State, response::Json, routing::get, Router};
use chrono::Utc;
use serde_json::json;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "message": state.config.app_name,
        "version": state.config.app_version
    }))
}

/// Liveness probe for monitors and load balancers.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "service": state.config.app_name,
        "version": state.config.app_version
    }))
}
