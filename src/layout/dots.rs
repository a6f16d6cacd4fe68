//! Dot grid layout: one circle per day.
//!
//! ## Algorithm
//!
//! ```text
//! aspect       = available_width / available_height
//! dots_per_row = ceil(sqrt(total_days * aspect))
//! total_rows   = ceil(total_days / dots_per_row)
//!
//! max_dot_width  = available_width  / (dots_per_row * 1.5)
//! max_dot_height = available_height / (total_rows  * 1.5)
//! radius         = floor(min(max_dot_width, max_dot_height) / 2)
//! spacing        = radius * 1.5 * 2
//! ```
//!
//! Choosing the row length from the square root keeps the grid's aspect ratio
//! close to the drawable rectangle's. Taking the smaller of the two diameter
//! bounds means neither axis overflows. The radius is floored, which can leave
//! a sub-pixel gap against the safe area; this keeps dot edges on whole pixels.
//!
//! The grid box is measured from the outer edge of the first dot to the outer
//! edge of the last, `(n - 1) * spacing + 2 * radius`, and centered in the
//! drawable rectangle.

use super::plan::{Color, Primitive, RenderPlan};
use super::safe_area::DrawableArea;
use super::ProgressState;

/// Cell pitch as a multiple of the dot diameter.
pub const SPACING_FACTOR: f64 = 1.5;

/// Resolved grid placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotGridPlan {
    pub dots_per_row: usize,
    pub total_rows: usize,
    pub dot_radius: f64,
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    /// Center of the first dot
    pub start_x: f64,
    pub start_y: f64,
}

impl DotGridPlan {
    /// Fit `total_days` dots into `area`.
    ///
    /// An empty area or a non-positive day count yields a zero radius.
    pub fn compute(area: &DrawableArea, total_days: i64) -> Self {
        let days = total_days.max(0) as usize;

        let aspect_ratio = if area.is_empty() {
            1.0
        } else {
            area.width / area.height
        };
        let dots_per_row = ((days as f64 * aspect_ratio).sqrt().ceil() as usize).max(1);
        let total_rows = days.div_ceil(dots_per_row);

        let dot_radius = if area.is_empty() || total_rows == 0 {
            0.0
        } else {
            let max_dot_width = area.width / (dots_per_row as f64 * SPACING_FACTOR);
            let max_dot_height = area.height / (total_rows as f64 * SPACING_FACTOR);
            (max_dot_width.min(max_dot_height) / 2.0).floor()
        };

        let spacing = dot_radius * SPACING_FACTOR * 2.0;

        let mut grid = Self {
            dots_per_row,
            total_rows,
            dot_radius,
            horizontal_spacing: spacing,
            vertical_spacing: spacing,
            start_x: 0.0,
            start_y: 0.0,
        };

        let (grid_width, grid_height) = grid.grid_size();
        grid.start_x = area.x + (area.width - grid_width) / 2.0 + dot_radius;
        grid.start_y = area.y + (area.height - grid_height) / 2.0 + dot_radius;
        grid
    }

    /// Grid extent from the outer edge of the first dot to the outer edge of the last.
    pub fn grid_size(&self) -> (f64, f64) {
        let diameter = 2.0 * self.dot_radius;
        let width = self.dots_per_row.saturating_sub(1) as f64 * self.horizontal_spacing + diameter;
        let height = self.total_rows.saturating_sub(1) as f64 * self.vertical_spacing + diameter;
        (width, height)
    }

    /// Bounding box of all dots as `(left, top, right, bottom)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let (width, height) = self.grid_size();
        let left = self.start_x - self.dot_radius;
        let top = self.start_y - self.dot_radius;
        (left, top, left + width, top + height)
    }

    pub fn capacity(&self) -> usize {
        self.dots_per_row * self.total_rows
    }

    /// Zero-based `(row, col)` of a 1-based day.
    pub fn cell(&self, day: i64) -> (usize, usize) {
        let index = (day - 1).max(0) as usize;
        (index / self.dots_per_row, index % self.dots_per_row)
    }

    /// Center of the dot for a 1-based day.
    pub fn center(&self, day: i64) -> (f64, f64) {
        let (row, col) = self.cell(day);
        (
            self.start_x + col as f64 * self.horizontal_spacing,
            self.start_y + row as f64 * self.vertical_spacing,
        )
    }

    /// Append one circle per day, in day order.
    pub fn emit(&self, progress: ProgressState, plan: &mut RenderPlan) {
        for day in 1..=progress.total_days {
            let (cx, cy) = self.center(day);
            plan.push(Primitive::Circle {
                cx,
                cy,
                radius: self.dot_radius,
                color: day_color(day, progress.current_day),
            });
        }
    }
}

/// Color of `day` when today is `current_day`.
pub fn day_color(day: i64, current_day: i64) -> Color {
    use std::cmp::Ordering;

    match day.cmp(&current_day) {
        Ordering::Less => Color::COMPLETED,
        Ordering::Equal => Color::TODAY,
        Ordering::Greater => Color::UPCOMING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CanvasSpec, SafeAreaInsets};
    use std::collections::HashSet;

    fn area_for(width: u32, height: u32) -> DrawableArea {
        let canvas = CanvasSpec::new(width, height);
        SafeAreaInsets::for_canvas(canvas).drawable(canvas)
    }

    #[test]
    fn test_iphone_14_grid() {
        // 1170x2532: available 1029.6 x 1595.16
        let grid = DotGridPlan::compute(&area_for(1170, 2532), 365);
        assert_eq!(grid.dots_per_row, 16);
        assert_eq!(grid.total_rows, 23);
        assert_eq!(grid.dot_radius, 21.0);
        assert_eq!(grid.horizontal_spacing, 63.0);
        assert_eq!(grid.vertical_spacing, 63.0);
        assert_eq!(grid.grid_size(), (987.0, 1428.0));
    }

    #[test]
    fn test_grid_stays_inside_drawable_area() {
        for width in (100..=5000).step_by(245) {
            for height in (100..=5000).step_by(311) {
                let area = area_for(width, height);
                for days in [365, 366] {
                    let grid = DotGridPlan::compute(&area, days);
                    let (left, top, right, bottom) = grid.bounds();
                    assert!(left >= area.x - 1e-9, "{}x{} left {}", width, height, left);
                    assert!(top >= area.y - 1e-9, "{}x{} top {}", width, height, top);
                    assert!(right <= area.right() + 1e-9, "{}x{} right {}", width, height, right);
                    assert!(bottom <= area.bottom() + 1e-9, "{}x{} bottom {}", width, height, bottom);
                }
            }
        }
    }

    #[test]
    fn test_cells_cover_every_day_once() {
        for days in [365, 366] {
            let grid = DotGridPlan::compute(&area_for(1290, 2796), days);
            assert!(grid.capacity() >= days as usize);

            let cells: HashSet<(usize, usize)> = (1..=days).map(|d| grid.cell(d)).collect();
            assert_eq!(cells.len(), days as usize);
            assert!(cells.iter().all(|&(row, col)| row < grid.total_rows && col < grid.dots_per_row));
        }
    }

    #[test]
    fn test_row_major_order() {
        let grid = DotGridPlan::compute(&area_for(1170, 2532), 365);
        assert_eq!(grid.cell(1), (0, 0));
        assert_eq!(grid.cell(16), (0, 15));
        assert_eq!(grid.cell(17), (1, 0));
        let (x1, y1) = grid.center(1);
        let (x2, y2) = grid.center(2);
        assert!((x2 - x1 - grid.horizontal_spacing).abs() < 1e-9);
        assert_eq!(y1, y2);
    }

    #[test]
    fn test_day_color_partition() {
        assert_eq!(day_color(1, 5), Color::COMPLETED);
        assert_eq!(day_color(5, 5), Color::TODAY);
        assert_eq!(day_color(6, 5), Color::UPCOMING);
    }

    #[test]
    fn test_empty_area_gives_zero_radius() {
        let area = DrawableArea {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
        let grid = DotGridPlan::compute(&area, 366);
        assert_eq!(grid.dot_radius, 0.0);
        assert!(grid.capacity() >= 366);
    }

    #[test]
    fn test_no_days_is_harmless() {
        let grid = DotGridPlan::compute(&area_for(500, 500), 0);
        assert_eq!(grid.total_rows, 0);
        assert_eq!(grid.dot_radius, 0.0);

        let mut plan = RenderPlan::new(CanvasSpec::new(500, 500));
        grid.emit(ProgressState::new(1, 0), &mut plan);
        assert_eq!(plan.circles().count(), 0);
    }

    #[test]
    fn test_tiny_canvas() {
        // 100x100: available 88 x 63
        let grid = DotGridPlan::compute(&area_for(100, 100), 366);
        assert_eq!(grid.dots_per_row, 23);
        assert_eq!(grid.total_rows, 16);
        assert_eq!(grid.dot_radius, 1.0);
    }
}
