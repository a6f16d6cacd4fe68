//! Wallpaper API handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono_tz::Tz;
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    calendar::{self, YearInfo},
    error::AlmanacError,
    layout::{CanvasSpec, MAX_DIMENSION, RenderMode},
    wallpaper::{self, WallpaperRequest},
};

use super::super::state::AppState;
use super::{ApiError, api_error};

pub const DEFAULT_WIDTH: u32 = 1170;
pub const DEFAULT_HEIGHT: u32 = 2532;
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Query parameters for the wallpaper endpoint.
///
/// Dimensions arrive as strings so malformed numbers get the same 400 body as
/// out-of-range ones instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct WallpaperQuery {
    pub width: Option<String>,
    pub height: Option<String>,
    pub timezone: Option<String>,
    pub mode: Option<String>,
}

/// A validated wallpaper query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedQuery {
    pub canvas: CanvasSpec,
    pub timezone: Tz,
    pub mode: RenderMode,
}

/// Treat a blank parameter (`?width=`) as absent so it falls back to the default.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_dimension(value: Option<&str>, default: u32) -> Result<u32, AlmanacError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.parse::<i64>() {
        Ok(n) if n > MAX_DIMENSION as i64 => Err(AlmanacError::InvalidDimensions(format!(
            "Width and height must not exceed {} pixels.",
            MAX_DIMENSION
        ))),
        Ok(n) if n > 0 => Ok(n as u32),
        _ => Err(AlmanacError::InvalidDimensions(
            "Invalid width or height parameters. Must be positive numbers.".to_string(),
        )),
    }
}

impl WallpaperQuery {
    /// Apply defaults and validate every parameter.
    pub fn resolve(&self) -> Result<ResolvedQuery, AlmanacError> {
        let width = parse_dimension(non_empty(&self.width), DEFAULT_WIDTH)?;
        let height = parse_dimension(non_empty(&self.height), DEFAULT_HEIGHT)?;
        let canvas = CanvasSpec::validated(width, height)?;

        let timezone = calendar::parse_timezone(non_empty(&self.timezone).unwrap_or(DEFAULT_TIMEZONE))?;

        let mode = match non_empty(&self.mode) {
            Some(raw) => raw.parse()?,
            None => RenderMode::default(),
        };

        Ok(ResolvedQuery {
            canvas,
            timezone,
            mode,
        })
    }
}

/// GET /api/wallpaper - Render the wallpaper for today as PNG.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WallpaperQuery>,
) -> Result<Response, ApiError> {
    let resolved = query
        .resolve()
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.message()))?;

    let now = state.now();
    let progress = calendar::progress_at(now, resolved.timezone);
    let request = WallpaperRequest::new(resolved.canvas, progress, resolved.mode);

    let render_result = tokio::task::spawn_blocking(move || wallpaper::generate(&request)).await;

    let png_bytes = match render_result {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            log::error!("[wallpaper] Error generating wallpaper: {}", e);
            return Err(generation_failed());
        }
        Err(e) => {
            log::error!("[wallpaper] Render task failed: {}", e);
            return Err(generation_failed());
        }
    };

    log::info!(
        "[wallpaper] {}x{} mode={} tz={} day {}/{} ({} bytes)",
        resolved.canvas.width,
        resolved.canvas.height,
        resolved.mode,
        resolved.timezone.name(),
        progress.current_day,
        progress.total_days,
        png_bytes.len()
    );

    let filename = wallpaper::suggested_filename(now.date_naive());
    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={}", state.config.cache_max_age_secs),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", filename),
            ),
        ],
        png_bytes,
    )
        .into_response())
}

fn generation_failed() -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to generate wallpaper. Please try again.",
    )
}

/// Query parameters for the info endpoint.
#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub timezone: Option<String>,
}

/// GET /api/wallpaper/info - Day-of-year summary for a timezone.
pub async fn info(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InfoQuery>,
) -> Result<Json<YearInfo>, ApiError> {
    let tz = calendar::parse_timezone(non_empty(&query.timezone).unwrap_or(DEFAULT_TIMEZONE))
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.message()))?;
    Ok(Json(calendar::year_info(state.now(), tz)))
}
