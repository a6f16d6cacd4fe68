//! Lock screen safe areas.
//!
//! The clock and widgets occupy roughly the top quarter of an iOS lock screen,
//! the flashlight and camera shortcuts the bottom eighth. Side margins keep the
//! content off rounded corners.

use super::CanvasSpec;

const TOP_FRACTION: f64 = 0.25;
const BOTTOM_FRACTION: f64 = 0.12;
const SIDE_FRACTION: f64 = 0.06;

/// Margins reserved for system UI, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl SafeAreaInsets {
    pub fn for_canvas(canvas: CanvasSpec) -> Self {
        let width = canvas.width as f64;
        let height = canvas.height as f64;
        Self {
            top: height * TOP_FRACTION,
            bottom: height * BOTTOM_FRACTION,
            left: width * SIDE_FRACTION,
            right: width * SIDE_FRACTION,
        }
    }

    /// The rectangle left over once the insets are removed.
    ///
    /// Extents that collapse below zero are clamped to an empty area.
    pub fn drawable(&self, canvas: CanvasSpec) -> DrawableArea {
        let width = canvas.width as f64 - self.left - self.right;
        let height = canvas.height as f64 - self.top - self.bottom;
        DrawableArea {
            x: self.left,
            y: self.top,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Axis-aligned rectangle available for content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawableArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawableArea {
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
