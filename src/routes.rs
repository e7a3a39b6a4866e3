use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use serde_json::{Value, json};
use tracing::info;

use crate::{
    error::AppError,
    projects::Project,
    state::AppState,
    stats::{CombinedStats, fetch_combined},
};

pub async fn root_handler() -> &'static str {
    "Backend is running ✅"
}

pub async fn projects_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Project>> {
    Json(state.projects.clone())
}

/// Fire-and-forget contact intake. The body is taken as raw bytes so that a
/// missing, non-JSON, or oddly-typed payload still gets acknowledged.
pub async fn contact_handler(body: Bytes) -> Json<Value> {
    let fields: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    info!(
        name = %fields.get("name").unwrap_or(&serde_json::Value::Null),
        email = %fields.get("email").unwrap_or(&serde_json::Value::Null),
        message = %fields.get("message").unwrap_or(&serde_json::Value::Null),
        "New contact message"
    );

    Json(json!({
        "success": true,
        "message": "Message received successfully",
    }))
}

pub async fn stats_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CombinedStats>, AppError> {
    let combined = fetch_combined(&state).await?;

    Ok(Json(combined))
}
