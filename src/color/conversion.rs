//! Color encoding conversions
//!
//! Provides conversions between the encodings used by the engine:
//! - Hex string to and from RGB
//! - RGB to and from HSL (standard six-sector transform)
//! - RGB to CMYK (subtractive approximation, not ICC based)
//!
//! Every function is pure. Fallible variants only fail on malformed or
//! out-of-range input.

use crate::color::model::{CmykColor, HexColor, HslColor, RgbColor};
use crate::{ColorError, Result};

/// Parse a `#rrggbb` string into RGB channels
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] unless the input is exactly `#`
/// followed by six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor> {
    hex.parse::<HexColor>()
        .map(HexColor::rgb)
        .inspect_err(|e| tracing::debug!(input = hex, error = %e, "rejected hex color"))
}

/// Render RGB channels as a lowercase `#rrggbb` color
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::new(RgbColor::new(r, g, b))
}

/// Convert RGB (0-255) to HSL
///
/// Achromatic colors (all channels equal) get hue and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> HslColor {
    let [r, g, b] = RgbColor::new(r, g, b).normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return HslColor::from_parts(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    HslColor::from_parts(sector * 60.0, s, l)
}

/// Convert HSL to RGB (0-255)
///
/// Hue may be any finite angle and is wrapped into [0, 360).
///
/// # Errors
///
/// Returns [`ColorError::OutOfRange`] if saturation or lightness lie outside
/// [0, 1], or if hue is not finite.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<RgbColor> {
    HslColor::new(h, s, l).map(hsl_color_to_rgb)
}

/// Convert an [`HslColor`] to RGB
///
/// Infallible: an `HslColor` can only be built or deserialized in range.
pub fn hsl_color_to_rgb(hsl: HslColor) -> RgbColor {
    let (h, s, l) = (hsl.h(), hsl.s(), hsl.l());
    // hue as a fraction of the full turn; sectors are sixths of it
    let h = h.rem_euclid(360.0) / 360.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 1.0 / 6.0 => (c, x, 0.0),
        h if h < 2.0 / 6.0 => (x, c, 0.0),
        h if h < 3.0 / 6.0 => (0.0, c, x),
        h if h < 4.0 / 6.0 => (0.0, x, c),
        h if h < 5.0 / 6.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    RgbColor::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parse a hex string straight to HSL
pub fn hex_to_hsl(hex: &str) -> Result<HslColor> {
    let rgb = hex_to_rgb(hex)?;
    Ok(rgb_to_hsl(rgb.r, rgb.g, rgb.b))
}

/// Convert HSL straight to a hex color
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Result<HexColor> {
    hsl_to_rgb(h, s, l).map(HexColor::from)
}

/// Convert RGB to CMYK
///
/// Pure black (`k == 1`) yields `c = m = y = 0` instead of dividing by zero.
pub fn rgb_to_cmyk(rgb: RgbColor) -> CmykColor {
    let [r, g, b] = rgb.normalized();
    let k = 1.0 - r.max(g).max(b);

    if k >= 1.0 {
        return CmykColor { c: 0.0, m: 0.0, y: 0.0, k: 1.0 };
    }

    let ink = |channel: f64| (1.0 - channel - k) / (1.0 - k);
    CmykColor {
        c: ink(r),
        m: ink(g),
        y: ink(b),
        k,
    }
}

/// Parse a hex string straight to CMYK
pub fn hex_to_cmyk(hex: &str) -> Result<CmykColor> {
    hex_to_rgb(hex).map(rgb_to_cmyk)
}

/// Validate an RGB triple given as floats, as produced by form inputs
///
/// # Errors
///
/// Returns [`ColorError::OutOfRange`] for channels outside [0, 255] and
/// [`ColorError::InvalidFormat`] for fractional or non-finite values.
pub fn rgb_from_components(r: f64, g: f64, b: f64) -> Result<RgbColor> {
    let channel = |name: &str, value: f64| -> Result<i64> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ColorError::invalid_format(
                value.to_string(),
                format!("{} channel must be an integer", name),
            ));
        }
        Ok(value as i64)
    };
    RgbColor::try_from((channel("red", r)?, channel("green", g)?, channel("blue", b)?))
}
