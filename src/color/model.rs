//! Color value types and their display formats
//!
//! The canonical representation is [`RgbColor`]; the other encodings are
//! derived from it by the functions in [`crate::color::conversion`].

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{ColorError, Result};

/// Three 8-bit sRGB channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value; bits above 24 are ignored
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Pack into `0xRRGGBB`
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Channels normalized to [0, 1]
    pub fn normalized(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    pub fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    pub fn min_channel(self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// Channel-wise inversion (255 - channel)
    pub const fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

/// Checked construction from wider integers, rejecting channels outside [0, 255]
impl TryFrom<(i64, i64, i64)> for RgbColor {
    type Error = ColorError;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self> {
        let channel = |name: &str, value: i64| {
            u8::try_from(value).map_err(|_| ColorError::out_of_range(name, value as f64, 0.0, 255.0))
        };
        Ok(Self::new(channel("red", r)?, channel("green", g)?, channel("blue", b)?))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<RgbColor> for Srgb<u8> {
    fn from(color: RgbColor) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<Srgb<u8>> for RgbColor {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

/// `#rrggbb` color
///
/// Parsing accepts upper or lower case digits but requires the leading `#`
/// and exactly six digits; 3-digit shorthand is rejected. Output is always
/// lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(RgbColor);

impl HexColor {
    pub const fn new(rgb: RgbColor) -> Self {
        Self(rgb)
    }

    pub const fn rgb(self) -> RgbColor {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(input: &str) -> Result<Self> {
        let Some(digits) = input.strip_prefix('#') else {
            return Err(ColorError::invalid_format(input, "missing leading '#'"));
        };
        if digits.len() != 6 {
            return Err(ColorError::invalid_format(
                input,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }
        // from_str_radix alone would accept a sign character
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_format(input, "contains non-hex characters"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ColorError::invalid_format(input, e.to_string()))
        };
        Ok(Self(RgbColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for RgbColor {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

/// Hue in degrees [0, 360), saturation and lightness in [0, 1]
///
/// Fields are private so every value, including deserialized ones, has
/// passed [`HslColor::new`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "HslParts")]
pub struct HslColor {
    h: f64,
    s: f64,
    l: f64,
}

#[derive(Deserialize)]
struct HslParts {
    h: f64,
    s: f64,
    l: f64,
}

impl TryFrom<HslParts> for HslColor {
    type Error = ColorError;

    fn try_from(parts: HslParts) -> Result<Self> {
        Self::new(parts.h, parts.s, parts.l)
    }
}

impl HslColor {
    pub fn h(self) -> f64 {
        self.h
    }

    pub fn s(self) -> f64 {
        self.s
    }

    pub fn l(self) -> f64 {
        self.l
    }

    /// Validated constructor; hue is wrapped into [0, 360)
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self> {
        if !h.is_finite() {
            return Err(ColorError::out_of_range("hue", h, 0.0, 360.0));
        }
        if !(0.0..=1.0).contains(&s) {
            return Err(ColorError::out_of_range("saturation", s, 0.0, 1.0));
        }
        if !(0.0..=1.0).contains(&l) {
            return Err(ColorError::out_of_range("lightness", l, 0.0, 1.0));
        }
        Ok(Self::from_parts(h, s, l))
    }

    /// Construction for values computed in range
    pub(crate) fn from_parts(h: f64, s: f64, l: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&l));
        // rem_euclid can round a tiny negative angle up to exactly 360
        let h = match h.rem_euclid(360.0) {
            h if h >= 360.0 => 0.0,
            h => h,
        };
        Self { h, s, l }
    }

    /// Same saturation and lightness, hue rotated by `degrees`
    pub(crate) fn rotate(self, degrees: f64) -> Self {
        Self::from_parts(self.h + degrees, self.s, self.l)
    }

    /// Same hue and saturation, lightness shifted by `offset` and clamped to [0, 1]
    pub(crate) fn shift_lightness(self, offset: f64) -> Self {
        Self::from_parts(self.h, self.s, (self.l + offset).clamp(0.0, 1.0))
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round(),
            (self.s * 100.0).round(),
            (self.l * 100.0).round()
        )
    }
}

/// Subtractive approximation, every component in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CmykColor {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl fmt::Display for CmykColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            (self.c * 100.0).round(),
            (self.m * 100.0).round(),
            (self.y * 100.0).round(),
            (self.k * 100.0).round()
        )
    }
}
