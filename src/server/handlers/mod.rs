//! HTTP handlers for the server.

pub mod presets;
pub mod wallpaper;

use axum::{Json, http::StatusCode};

/// JSON error body used by every handler: `{"error": "..."}`.
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(serde_json::json!({ "error": message.into() })),
    )
}
