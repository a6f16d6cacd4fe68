//! Wallpaper generation: layout, rasterize, encode.

use chrono::NaiveDate;

use crate::error::AlmanacError;
use crate::layout::{self, CanvasSpec, ProgressState, RenderMode};
use crate::render;

/// Everything needed to draw one wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperRequest {
    pub canvas: CanvasSpec,
    pub progress: ProgressState,
    pub mode: RenderMode,
}

impl WallpaperRequest {
    pub fn new(canvas: CanvasSpec, progress: ProgressState, mode: RenderMode) -> Self {
        Self {
            canvas,
            progress,
            mode,
        }
    }
}

/// Render a wallpaper to PNG bytes.
///
/// Either the whole image is produced or an [`AlmanacError::Encode`] is
/// returned; there are no partial results.
pub fn generate(request: &WallpaperRequest) -> Result<Vec<u8>, AlmanacError> {
    let plan = layout::plan(request.canvas, request.progress, request.mode);
    log::debug!(
        "[wallpaper] {}x{} {} day {}/{}: {} primitives",
        request.canvas.width,
        request.canvas.height,
        request.mode,
        request.progress.current_day,
        request.progress.total_days,
        plan.primitives.len()
    );
    render::to_png(&plan)
}

/// File name for a wallpaper generated on `date`.
pub fn suggested_filename(date: NaiveDate) -> String {
    format!("wallpaper-{}.png", date.format("%Y-%m-%d"))
}
