//! Render plan: the resolved primitive list passed from layout to rasterizer.

use super::CanvasSpec;

/// Base glyph cell of the label font, before scaling.
pub const GLYPH_CELL_WIDTH: u32 = 12;
pub const GLYPH_CELL_HEIGHT: u32 = 24;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);

    /// Canvas background.
    pub const BACKGROUND: Color = Color::BLACK;
    /// Days before today.
    pub const COMPLETED: Color = Color::WHITE;
    /// Today.
    pub const TODAY: Color = Color::RED;
    /// Days after today.
    pub const UPCOMING: Color = Color::GRAY;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// How a shape is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Solid interior
    Fill(Color),
    /// Outline `width` pixels thick, laid inside rectangle bounds or around
    /// glyph edges
    Stroke { color: Color, width: f64 },
}

impl Paint {
    pub fn color(&self) -> Color {
        match self {
            Paint::Fill(color) | Paint::Stroke { color, .. } => *color,
        }
    }
}

/// A single drawable shape in absolute pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
    },
    /// Bitmap-font label centered on `(cx, cy)`. `scale` multiplies the
    /// 12x24 base glyph cell.
    Text {
        content: String,
        cx: f64,
        cy: f64,
        scale: u32,
        paint: Paint,
    },
}

/// Ordered primitives for one wallpaper, background first.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub canvas: CanvasSpec,
    pub primitives: Vec<Primitive>,
}

impl RenderPlan {
    /// Start a plan holding only the full-canvas background.
    pub fn new(canvas: CanvasSpec) -> Self {
        Self {
            canvas,
            primitives: vec![Primitive::Rect {
                x: 0.0,
                y: 0.0,
                width: canvas.width as f64,
                height: canvas.height as f64,
                paint: Paint::Fill(Color::BACKGROUND),
            }],
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Iterate circle primitives as `(cx, cy, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64, Color)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle {
                cx,
                cy,
                radius,
                color,
            } => Some((*cx, *cy, *radius, *color)),
            _ => None,
        })
    }

    /// Iterate text labels, in paint order.
    ///
    /// Together with [`circles`](Self::circles) and
    /// [`count_circles`](Self::count_circles) this lets callers inspect a plan
    /// without rasterizing it.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    /// Count circles painted with `color`.
    pub fn count_circles(&self, color: Color) -> usize {
        self.circles().filter(|&(_, _, _, c)| c == color).count()
    }
}
