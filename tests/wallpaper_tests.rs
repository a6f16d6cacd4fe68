//! # Wallpaper Tests
//!
//! End-to-end checks of the layout engine and rasterizer through the public
//! API: device scenarios, color partitioning, bar geometry and byte-level
//! determinism of the encoded PNG.

use almanac::layout::{
    self, CanvasSpec, Color, DotGridPlan, ProgressBarPlan, ProgressState, RenderMode,
    SafeAreaInsets,
};
use almanac::wallpaper::{self, WallpaperRequest};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Count circles by color as `(white, red, gray)`.
fn color_counts(plan: &layout::RenderPlan) -> (usize, usize, usize) {
    (
        plan.count_circles(Color::COMPLETED),
        plan.count_circles(Color::TODAY),
        plan.count_circles(Color::UPCOMING),
    )
}

/// Render through the full pipeline and decode the PNG again.
fn render_and_decode(request: &WallpaperRequest) -> image::RgbImage {
    let png = wallpaper::generate(request).expect("render failed");
    image::load_from_memory(&png)
        .expect("output is not a valid image")
        .to_rgb8()
}

fn drawable(width: u32, height: u32) -> layout::DrawableArea {
    let canvas = CanvasSpec::new(width, height);
    SafeAreaInsets::for_canvas(canvas).drawable(canvas)
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_first_day_of_year() {
    let canvas = CanvasSpec::new(1170, 2532);
    let progress = ProgressState::new(1, 365);
    let plan = layout::plan(canvas, progress, RenderMode::Dot);
    assert_eq!(color_counts(&plan), (0, 1, 364));

    let image = render_and_decode(&WallpaperRequest::new(canvas, progress, RenderMode::Dot));
    assert_eq!(image.dimensions(), (1170, 2532));

    let (cx, cy, _, _) = plan.circles().next().unwrap();
    assert_eq!(image.get_pixel(cx as u32, cy as u32).0, [255, 0, 0]);
}

#[test]
fn test_last_day_of_year() {
    let canvas = CanvasSpec::new(1170, 2532);
    let progress = ProgressState::new(365, 365);
    let plan = layout::plan(canvas, progress, RenderMode::Dot);
    assert_eq!(color_counts(&plan), (364, 1, 0));

    let image = render_and_decode(&WallpaperRequest::new(canvas, progress, RenderMode::Dot));
    let pixels: Vec<[u8; 3]> = plan
        .circles()
        .map(|(cx, cy, _, _)| image.get_pixel(cx as u32, cy as u32).0)
        .collect();
    assert_eq!(pixels.iter().filter(|p| **p == [255, 255, 255]).count(), 364);
    assert_eq!(pixels.last(), Some(&[255, 0, 0]));
}

#[test]
fn test_mid_year_progress_bar() {
    let canvas = CanvasSpec::new(1290, 2796);
    let progress = ProgressState::new(182, 365);

    let bar = ProgressBarPlan::compute(&drawable(1290, 2796), progress);
    let ratio = bar.fill_width / bar.bar_width;
    assert!((ratio - 0.4986).abs() < 1e-4, "ratio {}", ratio);
    assert_eq!(bar.percent_text, "49.9%");

    let plan = layout::plan(canvas, progress, RenderMode::Horizontal);
    assert!(plan.texts().all(|t| t == "49.9%"));
    assert_eq!(plan.circles().count(), 0);

    let image = render_and_decode(&WallpaperRequest::new(canvas, progress, RenderMode::Horizontal));
    assert_eq!(image.dimensions(), (1290, 2796));
}

#[test]
fn test_tiny_canvas_does_not_fail() {
    let canvas = CanvasSpec::new(100, 100);
    let progress = ProgressState::new(1, 366);
    let plan = layout::plan(canvas, progress, RenderMode::Dot);
    assert_eq!(plan.circles().count(), 366);

    let image = render_and_decode(&WallpaperRequest::new(canvas, progress, RenderMode::Dot));
    assert_eq!(image.dimensions(), (100, 100));
}

#[test]
fn test_tiny_canvas_bar_does_not_fail() {
    let request = WallpaperRequest::new(
        CanvasSpec::new(100, 100),
        ProgressState::new(366, 366),
        RenderMode::Horizontal,
    );
    assert_eq!(render_and_decode(&request).dimensions(), (100, 100));
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_color_partition_for_every_day() {
    let canvas = CanvasSpec::new(1179, 2556);
    for total in [365, 366] {
        for day in 1..=total {
            let plan = layout::plan(canvas, ProgressState::new(day, total), RenderMode::Dot);
            let (white, red, gray) = color_counts(&plan);
            assert_eq!(red, 1);
            assert_eq!(white, (day - 1) as usize);
            assert_eq!(gray, (total - day) as usize);
            assert_eq!(white + red + gray, total as usize);
        }
    }
}

#[test]
fn test_every_day_gets_a_distinct_dot() {
    for total in [365, 366] {
        let plan = layout::plan(
            CanvasSpec::new(1320, 2868),
            ProgressState::new(50, total),
            RenderMode::Dot,
        );
        let centers: HashSet<(i64, i64)> = plan
            .circles()
            .map(|(cx, cy, _, _)| ((cx * 1000.0) as i64, (cy * 1000.0) as i64))
            .collect();
        assert_eq!(centers.len(), total as usize);
    }
}

#[test]
fn test_dots_stay_inside_safe_area() {
    for (width, height) in [(100, 100), (1080, 2340), (1320, 2868), (5000, 100), (100, 5000)] {
        let area = drawable(width, height);
        let plan = layout::plan(
            CanvasSpec::new(width, height),
            ProgressState::new(1, 366),
            RenderMode::Dot,
        );
        for (cx, cy, r, _) in plan.circles() {
            assert!(cx - r >= area.x - 1e-9 && cx + r <= area.right() + 1e-9);
            assert!(cy - r >= area.y - 1e-9 && cy + r <= area.bottom() + 1e-9);
        }

        let grid = DotGridPlan::compute(&area, 366);
        assert!(grid.capacity() >= 366);
    }
}

#[test]
fn test_bar_fills_completely_at_year_end() {
    let area = drawable(1170, 2532);
    let bar = ProgressBarPlan::compute(&area, ProgressState::new(365, 365));
    assert!((bar.fill_width - area.width).abs() < 1e-9);
    assert_eq!(bar.percent_text, "100.0%");
}

#[test]
fn test_output_is_byte_identical() {
    for mode in [RenderMode::Dot, RenderMode::Horizontal] {
        let request = WallpaperRequest::new(
            CanvasSpec::new(1170, 2532),
            ProgressState::new(123, 365),
            mode,
        );
        let first = wallpaper::generate(&request).unwrap();
        let second = wallpaper::generate(&request).unwrap();
        assert!(first == second, "{} output differs between runs", mode);
    }
}
