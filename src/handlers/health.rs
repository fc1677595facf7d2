use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "games-api",
        "status": "ok",
    }))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "games": state.store.len().await,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
