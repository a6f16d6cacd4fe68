//! # Almanac - Year Progress Wallpapers
//!
//! Almanac renders the progress of the current year as a phone lock screen
//! wallpaper. It provides:
//!
//! - **Layout engine**: safe-area aware dot grids and progress bars
//! - **Rasterizer**: flat-color RGB rendering and PNG encoding
//! - **Calendar**: day-of-year resolution in any IANA timezone
//! - **Server**: an HTTP endpoint serving fresh wallpapers
//!
//! ## Quick Start
//!
//! ```
//! use almanac::{
//!     layout::{CanvasSpec, ProgressState, RenderMode},
//!     wallpaper::{self, WallpaperRequest},
//! };
//!
//! // Day 100 of a common year on an iPhone 14
//! let request = WallpaperRequest::new(
//!     CanvasSpec::new(1170, 2532),
//!     ProgressState::new(100, 365),
//!     RenderMode::Dot,
//! );
//!
//! let png = wallpaper::generate(&request)?;
//! assert!(!png.is_empty());
//! # Ok::<(), almanac::error::AlmanacError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`layout`] | Safe areas, dot grid and progress bar geometry |
//! | [`render`] | Rasterization and PNG encoding |
//! | [`wallpaper`] | Layout + render in one call |
//! | [`calendar`] | Timezone-aware day-of-year |
//! | [`presets`] | Device screen sizes |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |
//!
//! The layout and render modules never read the clock: the current day is
//! always an input, which keeps output reproducible for a given date.

pub mod calendar;
pub mod error;
pub mod layout;
pub mod presets;
pub mod render;
pub mod server;
pub mod wallpaper;

// Re-exports for convenience
pub use error::AlmanacError;
pub use layout::{CanvasSpec, ProgressState, RenderMode};
pub use wallpaper::WallpaperRequest;
