use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check, sin acceso a caches ni a TMDB
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
