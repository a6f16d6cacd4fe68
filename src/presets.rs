//! # Device Presets
//!
//! Native lock screen resolutions of recent iPhones.
//!
//! ## Usage
//!
//! ```
//! use almanac::presets;
//!
//! let preset = presets::by_name("iphone-16-pro").unwrap();
//! assert_eq!((preset.width, preset.height), (1206, 2622));
//! ```

use serde::Serialize;

use crate::layout::CanvasSpec;

/// A named screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DevicePreset {
    /// Marketing name, e.g. "iPhone 16 Pro"
    pub name: &'static str,
    /// Portrait width in pixels
    pub width: u32,
    /// Portrait height in pixels
    pub height: u32,
}

impl DevicePreset {
    pub const fn canvas(&self) -> CanvasSpec {
        CanvasSpec::new(self.width, self.height)
    }

    /// Lowercase, hyphenated name: "iPhone 13 mini" → "iphone-13-mini".
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

const fn preset(name: &'static str, width: u32, height: u32) -> DevicePreset {
    DevicePreset {
        name,
        width,
        height,
    }
}

/// The default canvas (iPhone 13/14, 1170x2532).
pub const DEFAULT: DevicePreset = preset("iPhone 14", 1170, 2532);

/// All presets, newest first.
pub const PRESETS: &[DevicePreset] = &[
    // iPhone 16 series (2024)
    preset("iPhone 16 Pro Max", 1320, 2868),
    preset("iPhone 16 Pro", 1206, 2622),
    preset("iPhone 16 Plus", 1290, 2796),
    preset("iPhone 16", 1179, 2556),
    // iPhone 15 series (2023)
    preset("iPhone 15 Pro Max", 1290, 2796),
    preset("iPhone 15 Pro", 1179, 2556),
    preset("iPhone 15 Plus", 1290, 2796),
    preset("iPhone 15", 1179, 2556),
    // iPhone 14 series (2022)
    preset("iPhone 14 Pro Max", 1290, 2796),
    preset("iPhone 14 Pro", 1179, 2556),
    preset("iPhone 14 Plus", 1284, 2778),
    preset("iPhone 14", 1170, 2532),
    // iPhone 13 series (2021)
    preset("iPhone 13 Pro Max", 1284, 2778),
    preset("iPhone 13 Pro", 1170, 2532),
    preset("iPhone 13", 1170, 2532),
    preset("iPhone 13 mini", 1080, 2340),
];

/// Find a preset by display name or slug, ignoring case.
pub fn by_name(name: &str) -> Option<&'static DevicePreset> {
    let wanted = name.trim().to_lowercase();
    PRESETS
        .iter()
        .find(|p| p.name.to_lowercase() == wanted || p.slug() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_and_slug() {
        assert_eq!(by_name("iPhone 13 mini").unwrap().width, 1080);
        assert_eq!(by_name("IPHONE-13-MINI").unwrap().height, 2340);
        assert!(by_name("Pixel 9").is_none());
    }

    #[test]
    fn test_presets_are_valid_canvases() {
        for p in PRESETS {
            assert!(CanvasSpec::validated(p.width, p.height).is_ok(), "{}", p.name);
        }
    }

    #[test]
    fn test_default_is_listed() {
        assert!(PRESETS.contains(&DEFAULT));
        assert_eq!(DEFAULT.canvas(), CanvasSpec::new(1170, 2532));
    }
}
