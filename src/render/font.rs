//! Label glyphs from the Spleen 12x24 bitmap font.
//!
//! Text is turned into a boolean coverage mask, scaled up by nearest neighbour
//! integer multiplication. Outlines are produced by dilating the mask.

use spleen_font::{FONT_12X24, PSF2Font};

use crate::error::AlmanacError;
use crate::layout::{GLYPH_CELL_HEIGHT, GLYPH_CELL_WIDTH};

const CELL_W: usize = GLYPH_CELL_WIDTH as usize;
const CELL_H: usize = GLYPH_CELL_HEIGHT as usize;

/// Boolean pixel mask, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<bool>,
}

impl GlyphMask {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![false; width * height],
        }
    }

    #[cfg(test)]
    fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.data[y * self.width + x]
    }

    #[cfg(test)]
    fn count(&self) -> usize {
        self.data.iter().filter(|&&on| on).count()
    }

    /// Grow every set pixel by a disc of `radius` pixels.
    ///
    /// The result is `2 * radius` larger on each axis; the original mask sits
    /// at offset `(radius, radius)`.
    pub fn dilate(&self, radius: usize) -> GlyphMask {
        if radius == 0 {
            return self.clone();
        }

        let r = radius as i64;
        let offsets: Vec<(i64, i64)> = (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx * dx + dy * dy <= r * r)
            .collect();

        let mut out = GlyphMask::new(self.width + 2 * radius, self.height + 2 * radius);
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.data[y * self.width + x] {
                    continue;
                }
                let ox = (x + radius) as i64;
                let oy = (y + radius) as i64;
                for &(dx, dy) in &offsets {
                    let idx = (oy + dy) as usize * out.width + (ox + dx) as usize;
                    out.data[idx] = true;
                }
            }
        }
        out
    }
}

/// Render `text` at `scale` times the 12x24 base cell.
///
/// Characters missing from the font are drawn as an outlined box. Fails only
/// when the embedded font table cannot be parsed.
pub fn text_mask(text: &str, scale: u32) -> Result<GlyphMask, AlmanacError> {
    let scale = scale.max(1) as usize;
    let mut font = PSF2Font::new(FONT_12X24)
        .map_err(|_| AlmanacError::Encode("Failed to load label font".to_string()))?;

    let chars = text.chars().count();
    let mut mask = GlyphMask::new(chars * CELL_W * scale, CELL_H * scale);

    for (i, ch) in text.chars().enumerate() {
        let cell = glyph_cell(&mut font, ch);
        let origin_x = i * CELL_W * scale;

        for cy in 0..CELL_H {
            for cx in 0..CELL_W {
                if !cell[cy * CELL_W + cx] {
                    continue;
                }
                for sy in 0..scale {
                    let row = (cy * scale + sy) * mask.width;
                    for sx in 0..scale {
                        mask.data[row + origin_x + cx * scale + sx] = true;
                    }
                }
            }
        }
    }

    Ok(mask)
}

/// One 12x24 glyph cell as booleans.
fn glyph_cell(font: &mut PSF2Font, ch: char) -> Vec<bool> {
    let mut cell = vec![false; CELL_W * CELL_H];
    let utf8 = ch.to_string();

    match font.glyph_for_utf8(utf8.as_bytes()) {
        Some(glyph) => {
            for (row_y, row) in glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if row_y < CELL_H && col_x < CELL_W {
                        cell[row_y * CELL_W + col_x] = on;
                    }
                }
            }
        }
        None => draw_box(&mut cell),
    }

    cell
}

/// Fallback for unknown characters.
fn draw_box(cell: &mut [bool]) {
    for x in 0..CELL_W {
        cell[x] = true;
        cell[(CELL_H - 1) * CELL_W + x] = true;
    }
    for y in 0..CELL_H {
        cell[y * CELL_W] = true;
        cell[y * CELL_W + CELL_W - 1] = true;
    }
}
