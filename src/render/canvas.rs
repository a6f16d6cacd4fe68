//! RGB canvas and the pixel-level shapes painted onto it.
//!
//! Plan primitives are first lowered into [`Shape`]s (pixel-snapped rects,
//! circles, text masks). Shapes paint one row at a time, so rows can be
//! painted in parallel while still honouring the plan's painter's order.

use rayon::prelude::*;

use super::font::{self, GlyphMask};
use crate::error::AlmanacError;
use crate::layout::{Color, Paint, Primitive};

/// A primitive resolved to pixel space.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Pixels `x0..x1` by `y0..y1`
    Rect {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        color: Color,
    },
    /// Anti-aliased disc
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
    },
    /// Mask placed with its top-left corner at `(x, y)`
    Mask {
        x: i64,
        y: i64,
        mask: GlyphMask,
        color: Color,
    },
}

/// Row range `[start, end)` of pixels whose centers fall inside `[pos, pos + len)`.
fn pixel_span(pos: f64, len: f64, limit: usize) -> (usize, usize) {
    let clamp = |v: f64| (v.max(0.0) as usize).min(limit);
    let start = clamp((pos - 0.5).ceil());
    let end = clamp((pos + len.max(0.0) - 0.5).ceil());
    (start, end.max(start))
}

fn rect_shape(x: f64, y: f64, w: f64, h: f64, color: Color, width: usize, height: usize) -> Shape {
    let (x0, x1) = pixel_span(x, w, width);
    let (y0, y1) = pixel_span(y, h, height);
    Shape::Rect {
        x0,
        y0,
        x1,
        y1,
        color,
    }
}

impl Shape {
    /// Lower one primitive. A primitive may become several shapes.
    pub fn lower(
        primitive: &Primitive,
        width: usize,
        height: usize,
    ) -> Result<Vec<Shape>, AlmanacError> {
        let shapes = match primitive {
            Primitive::Rect {
                x,
                y,
                width: w,
                height: h,
                paint: Paint::Fill(color),
            } => vec![rect_shape(*x, *y, *w, *h, *color, width, height)],

            Primitive::Rect {
                x,
                y,
                width: w,
                height: h,
                paint: Paint::Stroke { color, width: t },
            } => {
                let t = t.min(*w).min(*h).max(0.0);
                vec![
                    rect_shape(*x, *y, *w, t, *color, width, height),
                    rect_shape(*x, y + h - t, *w, t, *color, width, height),
                    rect_shape(*x, *y, t, *h, *color, width, height),
                    rect_shape(x + w - t, *y, t, *h, *color, width, height),
                ]
            }

            Primitive::Circle {
                cx,
                cy,
                radius,
                color,
            } => {
                if *radius <= 0.0 {
                    Vec::new()
                } else {
                    vec![Shape::Circle {
                        cx: *cx,
                        cy: *cy,
                        radius: *radius,
                        color: *color,
                    }]
                }
            }

            Primitive::Text {
                content,
                cx,
                cy,
                scale,
                paint,
            } => {
                let glyphs = font::text_mask(content, *scale)?;
                let mask = match paint {
                    Paint::Fill(_) => glyphs,
                    Paint::Stroke { width: t, .. } => glyphs.dilate((t / 2.0).ceil() as usize),
                };
                let x = (cx - mask.width as f64 / 2.0).round() as i64;
                let y = (cy - mask.height as f64 / 2.0).round() as i64;
                vec![Shape::Mask {
                    x,
                    y,
                    mask,
                    color: paint.color(),
                }]
            }
        };
        Ok(shapes)
    }

    /// Paint the part of this shape that intersects row `y`.
    fn paint_row(&self, y: usize, row: &mut [u8]) {
        let width = row.len() / 3;
        match self {
            Shape::Rect {
                x0,
                y0,
                x1,
                y1,
                color,
            } => {
                if y < *y0 || y >= *y1 {
                    return;
                }
                for x in *x0..*x1 {
                    put(row, x, *color);
                }
            }

            Shape::Circle {
                cx,
                cy,
                radius,
                color,
            } => {
                let dy = y as f64 + 0.5 - cy;
                if dy.abs() > radius + 1.0 {
                    return;
                }
                let min_x = (cx - radius - 1.0).floor().max(0.0) as usize;
                let max_x = ((cx + radius + 1.0).ceil().max(0.0) as usize).min(width);
                for x in min_x..max_x {
                    let dx = x as f64 + 0.5 - cx;
                    let dist = (dx * dx + dy * dy).sqrt();
                    let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
                    if coverage >= 1.0 {
                        put(row, x, *color);
                    } else if coverage > 0.0 {
                        blend(row, x, *color, coverage);
                    }
                }
            }

            Shape::Mask { x, y: top, mask, color } => {
                let my = y as i64 - top;
                if my < 0 || my >= mask.height as i64 {
                    return;
                }
                let my = my as usize;
                for mx in 0..mask.width {
                    let px = x + mx as i64;
                    if px < 0 || px >= width as i64 {
                        continue;
                    }
                    if mask.data[my * mask.width + mx] {
                        put(row, px as usize, *color);
                    }
                }
            }
        }
    }
}

#[inline]
fn put(row: &mut [u8], x: usize, color: Color) {
    let idx = x * 3;
    row[idx..idx + 3].copy_from_slice(&color.to_array());
}

#[inline]
fn blend(row: &mut [u8], x: usize, color: Color, alpha: f64) {
    let idx = x * 3;
    for (channel, target) in row[idx..idx + 3].iter_mut().zip(color.to_array()) {
        let mixed = *channel as f64 * (1.0 - alpha) + target as f64 * alpha;
        *channel = mixed.round().clamp(0.0, 255.0) as u8;
    }
}

/// Packed RGB pixel buffer.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub buf: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buf: vec![0; width * height * 3],
        }
    }

    /// Paint shapes in order. Rows are independent, so they are painted in
    /// parallel; the result matches a sequential pass exactly.
    pub fn paint(&mut self, shapes: &[Shape]) {
        let stride = self.width * 3;
        if stride == 0 {
            return;
        }
        self.buf
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| {
                for shape in shapes {
                    shape.paint_row(y, row);
                }
            });
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * 3;
        [self.buf[idx], self.buf[idx + 1], self.buf[idx + 2]]
    }
}
