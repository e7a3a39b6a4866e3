use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream response malformed: {0}")]
    UpstreamData(String),

    #[error("no user record for handle {0}")]
    UnknownHandle(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The cause stays in the server log. Clients get one generic message
        // no matter which upstream failed.
        error!("Stats fetch failed: {self}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch competitive stats" })),
        )
            .into_response()
    }
}
