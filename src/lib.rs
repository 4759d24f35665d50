//! # Color Engine
//!
//! A Rust crate for converting, measuring and combining sRGB colors.
//!
//! This library provides pure, stateless color computations:
//! - Conversions between hex, RGB, HSL and CMYK encodings
//! - WCAG relative luminance, contrast ratio and accessibility rating
//! - Perceived brightness, RGB saturation and warmth
//! - Harmony sets (complementary, analogous, triadic, tetradic, monochromatic)
//! - Preset and random palettes
//!
//! The "current color" and any history of picked colors belong to the
//! caller; nothing here holds state between calls.
//!
//! ## Example
//!
//! ```rust
//! use color_engine::{analyze, AccessibilityRating};
//!
//! let report = analyze("#2d8cf0")?;
//! println!("{} / {} / {}", report.hex, report.rgb, report.hsl);
//! assert_eq!(report.harmonies.complementary.to_string(), "#d2730f");
//!
//! // 3.43:1 against white is enough for large text only
//! let contrast = report.contrast_with("#ffffff".parse::<color_engine::HexColor>()?);
//! assert_eq!(contrast.rating, AccessibilityRating::A);
//! # Ok::<(), color_engine::ColorError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod harmony;
pub mod palettes;

pub use error::{ColorError, Result};
pub use config::{DisplayFormat, DisplaySettings, EngineConfig, RandomPaletteConfig};
pub use color::{
    analyze_color, brightness, check_contrast, contrast_ratio, hex_to_cmyk, hex_to_hsl,
    hex_to_rgb, hsl_to_hex, hsl_to_rgb, is_light, luminance, rgb_to_cmyk, rgb_to_hex,
    rgb_to_hsl, saturation_percent, temperature, AccessibilityRating, CmykColor, ColorAnalysis,
    ContentKind, ContrastResult, HexColor, HslColor, RgbColor,
};
pub use harmony::{harmonies, HarmonyKind, HarmonySet};
pub use palettes::{random_color, random_palette, PresetPalette};

/// Every representation and metric of one color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// Lowercase `#rrggbb`
    pub hex: HexColor,
    pub rgb: RgbColor,
    pub hsl: HslColor,
    pub cmyk: CmykColor,
    /// WCAG relative luminance (0.0-1.0)
    pub luminance: f64,
    /// Brightness, saturation and warmth
    pub analysis: ColorAnalysis,
    pub harmonies: HarmonySet,
}

impl ColorReport {
    /// Build the report for an already parsed color
    pub fn new(color: impl Into<RgbColor>) -> Self {
        let rgb: RgbColor = color.into();
        Self {
            hex: HexColor::from(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb.r, rgb.g, rgb.b),
            cmyk: rgb_to_cmyk(rgb),
            luminance: luminance(rgb),
            analysis: analyze_color(rgb),
            harmonies: harmonies(rgb),
        }
    }

    /// Contrast of this color against another
    pub fn contrast_with(&self, other: impl Into<RgbColor>) -> ContrastResult {
        check_contrast(self.rgb, other)
    }
}

/// Analyze a hex color string
///
/// This is the one-shot entry point: it parses the color and computes every
/// representation, metric and harmony in a single [`ColorReport`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is not `#` followed by
/// exactly six hex digits.
pub fn analyze(hex: &str) -> Result<ColorReport> {
    hex_to_rgb(hex).map(ColorReport::new)
}
