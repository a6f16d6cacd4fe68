//! # Rendering Module
//!
//! Rasterizes a [`RenderPlan`] into an RGB image and encodes it as PNG.
//!
//! ## Modules
//!
//! - [`canvas`]: pixel buffer and pixel-snapped shapes
//! - [`font`]: Spleen bitmap glyph masks for labels
//!
//! ## Usage Example
//!
//! ```
//! use almanac::layout::{self, CanvasSpec, ProgressState, RenderMode};
//! use almanac::render;
//!
//! let plan = layout::plan(
//!     CanvasSpec::new(300, 600),
//!     ProgressState::new(100, 365),
//!     RenderMode::Horizontal,
//! );
//! let png = render::to_png(&plan)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), almanac::error::AlmanacError>(())
//! ```
//!
//! Pixels map 1:1 to plan coordinates; there is no scaling or resampling.

pub mod canvas;
pub mod font;

use image::{ImageFormat, RgbImage};
use std::io::Cursor;

use crate::error::AlmanacError;
use crate::layout::RenderPlan;
use canvas::{Canvas, Shape};

/// Paint every primitive of `plan` onto a fresh canvas.
pub fn rasterize(plan: &RenderPlan) -> Result<RgbImage, AlmanacError> {
    let width = plan.canvas.width as usize;
    let height = plan.canvas.height as usize;

    let mut shapes = Vec::with_capacity(plan.primitives.len());
    for primitive in &plan.primitives {
        shapes.extend(Shape::lower(primitive, width, height)?);
    }

    let mut canvas = Canvas::new(width, height);
    canvas.paint(&shapes);

    RgbImage::from_raw(plan.canvas.width, plan.canvas.height, canvas.buf)
        .ok_or_else(|| AlmanacError::Encode("Pixel buffer does not match canvas size".to_string()))
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, AlmanacError> {
    let mut png_bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| AlmanacError::Encode(format!("PNG encoding failed: {}", e)))?;
    Ok(png_bytes)
}

/// Rasterize and encode in one step.
pub fn to_png(plan: &RenderPlan) -> Result<Vec<u8>, AlmanacError> {
    encode_png(&rasterize(plan)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{self, CanvasSpec, Color, ProgressState, RenderMode};

    #[test]
    fn test_rasterize_dimensions() {
        let plan = layout::plan(
            CanvasSpec::new(123, 456),
            ProgressState::new(1, 365),
            RenderMode::Dot,
        );
        let image = rasterize(&plan).unwrap();
        assert_eq!(image.dimensions(), (123, 456));
    }

    #[test]
    fn test_today_dot_is_red() {
        let plan = layout::plan(
            CanvasSpec::new(1170, 2532),
            ProgressState::new(200, 365),
            RenderMode::Dot,
        );
        let image = rasterize(&plan).unwrap();

        for (cx, cy, _, color) in plan.circles() {
            let pixel = image.get_pixel(cx as u32, cy as u32);
            assert_eq!(pixel.0, color.to_array());
        }
        assert_eq!(plan.count_circles(Color::TODAY), 1);
    }

    #[test]
    fn test_safe_area_stays_black() {
        let plan = layout::plan(
            CanvasSpec::new(1170, 2532),
            ProgressState::new(365, 365),
            RenderMode::Dot,
        );
        let image = rasterize(&plan).unwrap();

        // Top quarter holds the clock
        for y in (0..633).step_by(7) {
            for x in (0..1170).step_by(13) {
                assert_eq!(image.get_pixel(x, y).0, [0, 0, 0]);
            }
        }
    }

    #[test]
    fn test_bar_fill_and_border() {
        let canvas = CanvasSpec::new(1290, 2796);
        let plan = layout::plan(canvas, ProgressState::new(182, 365), RenderMode::Horizontal);
        let image = rasterize(&plan).unwrap();
        let bar = layout::ProgressBarPlan::compute(
            &layout::SafeAreaInsets::for_canvas(canvas).drawable(canvas),
            ProgressState::new(182, 365),
        );

        let mid_y = (bar.bar_y + bar.bar_height / 2.0) as u32;
        // Border at the left edge
        assert_eq!(image.get_pixel(bar.bar_x.ceil() as u32, mid_y).0, [255, 255, 255]);
        // Filled region left of the label
        assert_eq!(image.get_pixel((bar.bar_x + 20.0) as u32, mid_y).0, [255, 255, 255]);
        // Empty region near the right end, inside the border
        let right = (bar.bar_x + bar.bar_width - 20.0) as u32;
        assert_eq!(image.get_pixel(right, mid_y).0, [0, 0, 0]);
    }

    #[test]
    fn test_png_signature() {
        let plan = layout::plan(
            CanvasSpec::new(64, 64),
            ProgressState::new(1, 365),
            RenderMode::Dot,
        );
        let png = to_png(&plan).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
