//! Device preset handlers.

use axum::Json;

use crate::presets::{DevicePreset, PRESETS};

/// GET /api/presets - List known device screen sizes.
pub async fn list() -> Json<&'static [DevicePreset]> {
    Json(PRESETS)
}
