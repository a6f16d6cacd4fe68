//! Horizontal progress bar layout.
//!
//! The bar spans the full drawable width and sits at its vertical center.
//! Its height is 15% of the drawable height, capped at 80 px so tall canvases
//! don't get a slab.
//!
//! ```text
//! +-----------------------------------------------+  <- 3 px white border
//! |#################### 49.9% ....................|  <- white fill, black body
//! +-----------------------------------------------+
//! ```
//!
//! The label is drawn twice, white outline then black fill, so it reads on
//! both the filled and the empty half.

use super::plan::{Color, GLYPH_CELL_HEIGHT, Paint, Primitive, RenderPlan};
use super::safe_area::DrawableArea;
use super::ProgressState;

const BAR_HEIGHT_FRACTION: f64 = 0.15;
const MAX_BAR_HEIGHT: f64 = 80.0;
pub const BORDER_WIDTH: f64 = 3.0;
const LABEL_HEIGHT_FRACTION: f64 = 0.6;
const LABEL_STROKE_WIDTH: f64 = 4.0;

/// Resolved bar geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarPlan {
    pub bar_x: f64,
    pub bar_y: f64,
    pub bar_width: f64,
    pub bar_height: f64,
    pub border_width: f64,
    /// Width covered by progress, `0 <= fill_width <= bar_width`
    pub fill_width: f64,
    /// e.g. "49.9%"
    pub percent_text: String,
}

impl ProgressBarPlan {
    pub fn compute(area: &DrawableArea, progress: ProgressState) -> Self {
        let bar_height = (area.height * BAR_HEIGHT_FRACTION).min(MAX_BAR_HEIGHT);
        let bar_y = area.y + (area.height - bar_height) / 2.0;

        let fraction = progress.fraction();
        let fill_width = (area.width * fraction).clamp(0.0, area.width);

        Self {
            bar_x: area.x,
            bar_y,
            bar_width: area.width,
            bar_height,
            border_width: BORDER_WIDTH,
            fill_width,
            percent_text: format!("{:.1}%", fraction * 100.0),
        }
    }

    /// Width of the white fill drawn inside the border.
    ///
    /// Clamped at zero when the border would swallow the whole fill.
    pub fn inner_fill_width(&self) -> f64 {
        (self.fill_width - 2.0 * self.border_width).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.bar_height - 2.0 * self.border_width).max(0.0)
    }

    /// Integer glyph scale for the percentage label.
    pub fn label_scale(&self) -> u32 {
        ((self.bar_height * LABEL_HEIGHT_FRACTION) / GLYPH_CELL_HEIGHT as f64)
            .floor()
            .max(1.0) as u32
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.bar_x + self.bar_width / 2.0,
            self.bar_y + self.bar_height / 2.0,
        )
    }

    pub fn emit(&self, plan: &mut RenderPlan) {
        plan.push(Primitive::Rect {
            x: self.bar_x,
            y: self.bar_y,
            width: self.bar_width,
            height: self.bar_height,
            paint: Paint::Fill(Color::BLACK),
        });
        plan.push(Primitive::Rect {
            x: self.bar_x,
            y: self.bar_y,
            width: self.bar_width,
            height: self.bar_height,
            paint: Paint::Stroke {
                color: Color::WHITE,
                width: self.border_width,
            },
        });
        plan.push(Primitive::Rect {
            x: self.bar_x + self.border_width,
            y: self.bar_y + self.border_width,
            width: self.inner_fill_width(),
            height: self.inner_height(),
            paint: Paint::Fill(Color::WHITE),
        });

        let (cx, cy) = self.center();
        let scale = self.label_scale();
        plan.push(Primitive::Text {
            content: self.percent_text.clone(),
            cx,
            cy,
            scale,
            paint: Paint::Stroke {
                color: Color::WHITE,
                width: LABEL_STROKE_WIDTH,
            },
        });
        plan.push(Primitive::Text {
            content: self.percent_text.clone(),
            cx,
            cy,
            scale,
            paint: Paint::Fill(Color::BLACK),
        });
    }
}
