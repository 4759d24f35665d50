//! Preset palettes and random color generation
//!
//! Randomness always comes from a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces the same colors.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::conversion::hsl_color_to_rgb;
use crate::color::model::{HexColor, HslColor, RgbColor};
use crate::config::RandomPaletteConfig;
use crate::constants::defaults;
use crate::Result;

const MATERIAL: [u32; 16] = [
    0xf44336, 0xe91e63, 0x9c27b0, 0x673ab7, 0x3f51b5, 0x2196f3, 0x03a9f4, 0x00bcd4,
    0x009688, 0x4caf50, 0x8bc34a, 0xcddc39, 0xffeb3b, 0xffc107, 0xff9800, 0xff5722,
];

const FLAT: [u32; 16] = [
    0xe74c3c, 0xc0392b, 0xe67e22, 0xd35400, 0xf39c12, 0xf1c40f, 0x2ecc71, 0x27ae60,
    0x1abc9c, 0x16a085, 0x3498db, 0x2980b9, 0x9b59b6, 0x8e44ad, 0x34495e, 0x2c3e50,
];

const PASTEL: [u32; 16] = [
    0xffb3ba, 0xbaffc9, 0xbae1ff, 0xffffba, 0xffb3f7, 0xf7b3ff, 0xb3f7ff, 0xf7ffb3,
    0xffd4b3, 0xd4ffb3, 0xb3ffd4, 0xb3d4ff, 0xffb3d4, 0xd4b3ff, 0xb3d4ff, 0xf7d4b3,
];

const MONOCHROME: [u32; 12] = [
    0x000000, 0x1a1a1a, 0x333333, 0x4d4d4d, 0x666666, 0x808080, 0x999999, 0xb3b3b3,
    0xcccccc, 0xe6e6e6, 0xf0f0f0, 0xffffff,
];

/// Built-in palettes offered alongside generated ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetPalette {
    Material,
    Flat,
    Pastel,
    Monochrome,
}

impl PresetPalette {
    pub const ALL: [PresetPalette; 4] = [
        PresetPalette::Material,
        PresetPalette::Flat,
        PresetPalette::Pastel,
        PresetPalette::Monochrome,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            PresetPalette::Material => "Material Design",
            PresetPalette::Flat => "Flat UI",
            PresetPalette::Pastel => "Pastel",
            PresetPalette::Monochrome => "Monochrome",
        }
    }

    pub fn colors(self) -> Vec<HexColor> {
        let packed: &[u32] = match self {
            PresetPalette::Material => &MATERIAL,
            PresetPalette::Flat => &FLAT,
            PresetPalette::Pastel => &PASTEL,
            PresetPalette::Monochrome => &MONOCHROME,
        };
        packed
            .iter()
            .map(|&rgb| HexColor::new(RgbColor::from_u32(rgb)))
            .collect()
    }
}

impl fmt::Display for PresetPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Uniformly random color in `#000000..#fffffe`
pub fn random_color<R: Rng>(rng: &mut R) -> HexColor {
    HexColor::new(RgbColor::from_u32(rng.gen_range(0..defaults::RANDOM_COLOR_SPAN)))
}

/// Evenly spaced hues from a random starting point, with random saturation
/// and lightness drawn from the configured ranges
///
/// # Errors
///
/// Returns [`ColorError::ConfigError`](crate::ColorError::ConfigError) if
/// `config` fails [`RandomPaletteConfig::validate`]; nothing is drawn from
/// `rng` in that case.
pub fn random_palette<R: Rng>(rng: &mut R, config: &RandomPaletteConfig) -> Result<Vec<HexColor>> {
    config.validate()?;

    let base_hue = rng.gen_range(0.0..360.0);
    tracing::trace!(base_hue, size = config.size, "generating random palette");

    let palette = (0..config.size)
        .map(|i| {
            let hue = base_hue + i as f64 * config.hue_step;
            let s = sample(rng, config.saturation_min, config.saturation_max);
            let l = sample(rng, config.lightness_min, config.lightness_max);
            HexColor::from(hsl_color_to_rgb(HslColor::from_parts(hue, s, l)))
        })
        .collect();
    Ok(palette)
}

/// `min + U[0,1) * (max - min)`, which tolerates an empty range
fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    (min + rng.gen::<f64>() * (max - min)).min(max)
}
