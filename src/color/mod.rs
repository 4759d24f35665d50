//! Color representations, conversions and metrics
//!
//! This module handles the four color encodings, conversions between them,
//! and the perceptual metrics computed from a color or a pair of colors.

pub mod model;
pub mod conversion;
pub mod analysis;

pub use model::{CmykColor, HexColor, HslColor, RgbColor};
pub use conversion::{
    hex_to_cmyk, hex_to_hsl, hex_to_rgb, hsl_color_to_rgb, hsl_to_hex, hsl_to_rgb,
    rgb_from_components, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl,
};
pub use analysis::{
    analyze_color, brightness, check_contrast, contrast_ratio, is_light, luminance,
    saturation_percent, temperature, AccessibilityRating, ColorAnalysis, ContentKind,
    ContrastResult,
};
