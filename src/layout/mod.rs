//! # Layout Engine
//!
//! Turns four scalars (canvas size, current day, day count) and a display mode
//! into a fully resolved [`RenderPlan`]. No pixels are touched here.
//!
//! ## Modules
//!
//! - [`safe_area`]: lock screen margins and the drawable rectangle
//! - [`dots`]: one circle per day, packed into a centered grid
//! - [`bar`]: bordered horizontal progress bar with a percentage label
//! - [`plan`]: the primitive list handed to the rasterizer
//!
//! ## Usage Example
//!
//! ```
//! use almanac::layout::{self, CanvasSpec, ProgressState, RenderMode};
//!
//! let canvas = CanvasSpec::new(1170, 2532);
//! let progress = ProgressState::new(42, 365);
//! let plan = layout::plan(canvas, progress, RenderMode::Dot);
//!
//! assert_eq!(plan.circles().count(), 365);
//! ```
//!
//! The engine is pure: identical inputs always yield identical plans, and no
//! finite input makes it fail. Degenerate canvases produce zero-sized shapes.

pub mod bar;
pub mod dots;
pub mod plan;
pub mod safe_area;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AlmanacError;

pub use bar::ProgressBarPlan;
pub use dots::DotGridPlan;
pub use plan::{Color, GLYPH_CELL_HEIGHT, GLYPH_CELL_WIDTH, Paint, Primitive, RenderPlan};
pub use safe_area::{DrawableArea, SafeAreaInsets};

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 5000;

/// Output canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
}

impl CanvasSpec {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a canvas, rejecting zero or oversized dimensions.
    ///
    /// The layout engine accepts any size; this check belongs to callers that
    /// take dimensions from untrusted input.
    pub fn validated(width: u32, height: u32) -> Result<Self, AlmanacError> {
        if width == 0 || height == 0 {
            return Err(AlmanacError::InvalidDimensions(
                "Invalid width or height parameters. Must be positive numbers.".to_string(),
            ));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(AlmanacError::InvalidDimensions(format!(
                "Width and height must not exceed {} pixels.",
                MAX_DIMENSION
            )));
        }
        Ok(Self { width, height })
    }
}

/// Where we are in the year.
///
/// `current_day` is 1-based. Callers guarantee `1 <= current_day <= total_days`;
/// the engine does not clamp it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    pub current_day: i64,
    pub total_days: i64,
}

impl ProgressState {
    pub const fn new(current_day: i64, total_days: i64) -> Self {
        Self {
            current_day,
            total_days,
        }
    }

    /// Completed fraction of the year, `current_day / total_days`.
    ///
    /// Zero when `total_days` is not positive.
    pub fn fraction(&self) -> f64 {
        if self.total_days <= 0 {
            return 0.0;
        }
        self.current_day as f64 / self.total_days as f64
    }
}

/// Visualization style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One dot per day
    #[default]
    Dot,
    /// Single progress bar with a percentage label
    Horizontal,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Dot => "dot",
            RenderMode::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "dots" => Ok(RenderMode::Dot),
            "horizontal" | "bar" => Ok(RenderMode::Horizontal),
            other => Err(AlmanacError::InvalidMode(format!(
                "Invalid mode '{}'. Expected 'dot' or 'horizontal'.",
                other
            ))),
        }
    }
}

/// Lay out a wallpaper for `canvas` showing `progress` in the given `mode`.
pub fn plan(canvas: CanvasSpec, progress: ProgressState, mode: RenderMode) -> RenderPlan {
    let insets = SafeAreaInsets::for_canvas(canvas);
    let mut plan = RenderPlan::new(canvas);

    match mode {
        RenderMode::Dot => {
            let grid = DotGridPlan::compute(&insets.drawable(canvas), progress.total_days);
            grid.emit(progress, &mut plan);
        }
        RenderMode::Horizontal => {
            let bar = ProgressBarPlan::compute(&insets.drawable(canvas), progress);
            bar.emit(&mut plan);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_accepts_bounds() {
        assert!(CanvasSpec::validated(1, 1).is_ok());
        assert!(CanvasSpec::validated(5000, 5000).is_ok());
    }

    #[test]
    fn test_validated_rejects_zero_and_oversized() {
        assert!(matches!(
            CanvasSpec::validated(0, 100),
            Err(AlmanacError::InvalidDimensions(_))
        ));
        assert!(matches!(
            CanvasSpec::validated(100, 5001),
            Err(AlmanacError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dot".parse::<RenderMode>().unwrap(), RenderMode::Dot);
        assert_eq!("Horizontal".parse::<RenderMode>().unwrap(), RenderMode::Horizontal);
        assert_eq!("bar".parse::<RenderMode>().unwrap(), RenderMode::Horizontal);
        assert!("spiral".parse::<RenderMode>().is_err());
    }

    #[test]
    fn test_plan_starts_with_background() {
        for mode in [RenderMode::Dot, RenderMode::Horizontal] {
            let plan = plan(CanvasSpec::new(300, 600), ProgressState::new(10, 365), mode);
            match &plan.primitives[0] {
                Primitive::Rect {
                    x,
                    y,
                    width,
                    height,
                    paint: Paint::Fill(color),
                } => {
                    assert_eq!((*x, *y), (0.0, 0.0));
                    assert_eq!((*width, *height), (300.0, 600.0));
                    assert_eq!(*color, Color::BLACK);
                }
                other => panic!("expected background rect, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_fraction_handles_zero_total() {
        assert_eq!(ProgressState::new(5, 0).fraction(), 0.0);
        assert!((ProgressState::new(73, 365).fraction() - 0.2).abs() < 1e-12);
    }
}
