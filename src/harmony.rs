//! Color harmony generation
//!
//! Derives palette suggestions from a single base color:
//! - Complementary: channel-wise RGB inversion
//! - Analogous: hue ±30°
//! - Triadic: hue +120°, +240°
//! - Tetradic: hue +90°, +180°, +270°
//! - Monochromatic: lightness -0.3, -0.15, +0.15, +0.3, clamped to [0, 1]
//!
//! Complementary is deliberately not a 180° hue rotation; it inverts the
//! RGB channels and so differs from the tetradic +180° entry for most colors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::conversion::{hsl_color_to_rgb, rgb_to_hsl};
use crate::color::model::{HexColor, HslColor, RgbColor};
use crate::constants::harmony as offsets;

/// Closed set of harmony kinds, each with a fixed number of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    Monochromatic,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 5] = [
        HarmonyKind::Complementary,
        HarmonyKind::Analogous,
        HarmonyKind::Triadic,
        HarmonyKind::Tetradic,
        HarmonyKind::Monochromatic,
    ];

    /// Number of colors this kind derives
    pub const fn arity(self) -> usize {
        match self {
            HarmonyKind::Complementary => 1,
            HarmonyKind::Analogous => 2,
            HarmonyKind::Triadic => 2,
            HarmonyKind::Tetradic => 3,
            HarmonyKind::Monochromatic => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Tetradic => "tetradic",
            HarmonyKind::Monochromatic => "monochromatic",
        }
    }

    /// HSL-space variants of `base` before quantization to 8-bit channels
    ///
    /// Returns `None` for [`HarmonyKind::Complementary`], which is defined
    /// on RGB channels rather than in HSL space.
    pub fn derive_hsl(self, base: HslColor) -> Option<Vec<HslColor>> {
        let variants = match self {
            HarmonyKind::Complementary => return None,
            HarmonyKind::Analogous => vec![
                base.rotate(offsets::ANALOGOUS_STEP),
                base.rotate(-offsets::ANALOGOUS_STEP),
            ],
            HarmonyKind::Triadic => offsets::TRIADIC_ROTATIONS
                .iter()
                .map(|&deg| base.rotate(deg))
                .collect(),
            HarmonyKind::Tetradic => offsets::TETRADIC_ROTATIONS
                .iter()
                .map(|&deg| base.rotate(deg))
                .collect(),
            HarmonyKind::Monochromatic => offsets::MONOCHROMATIC_OFFSETS
                .iter()
                .map(|&offset| base.shift_lightness(offset))
                .collect(),
        };
        Some(variants)
    }

    /// Derive this kind's colors from `base`
    pub fn derive(self, base: RgbColor) -> Vec<HexColor> {
        let hsl = rgb_to_hsl(base.r, base.g, base.b);
        match self.derive_hsl(hsl) {
            Some(variants) => variants.into_iter().map(to_hex).collect(),
            None => vec![complementary(base)],
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every harmony of one base color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonySet {
    pub complementary: HexColor,
    pub analogous: [HexColor; 2],
    pub triadic: [HexColor; 2],
    pub tetradic: [HexColor; 3],
    pub monochromatic: [HexColor; 4],
}

impl HarmonySet {
    /// Colors derived for `kind`
    pub fn get(&self, kind: HarmonyKind) -> &[HexColor] {
        match kind {
            HarmonyKind::Complementary => std::slice::from_ref(&self.complementary),
            HarmonyKind::Analogous => &self.analogous,
            HarmonyKind::Triadic => &self.triadic,
            HarmonyKind::Tetradic => &self.tetradic,
            HarmonyKind::Monochromatic => &self.monochromatic,
        }
    }

    /// Kinds paired with their colors, in [`HarmonyKind::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (HarmonyKind, &[HexColor])> + '_ {
        HarmonyKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

fn to_hex(hsl: HslColor) -> HexColor {
    HexColor::from(hsl_color_to_rgb(hsl))
}

/// Channel-wise inversion `(255 - r, 255 - g, 255 - b)`
pub fn complementary(base: RgbColor) -> HexColor {
    HexColor::from(base.inverted())
}

/// Hue +30° and -30°
pub fn analogous(base: RgbColor) -> [HexColor; 2] {
    let hsl = rgb_to_hsl(base.r, base.g, base.b);
    [
        to_hex(hsl.rotate(offsets::ANALOGOUS_STEP)),
        to_hex(hsl.rotate(-offsets::ANALOGOUS_STEP)),
    ]
}

/// Hue +120° and +240°
pub fn triadic(base: RgbColor) -> [HexColor; 2] {
    let hsl = rgb_to_hsl(base.r, base.g, base.b);
    offsets::TRIADIC_ROTATIONS.map(|deg| to_hex(hsl.rotate(deg)))
}

/// Hue +90°, +180° and +270°
pub fn tetradic(base: RgbColor) -> [HexColor; 3] {
    let hsl = rgb_to_hsl(base.r, base.g, base.b);
    offsets::TETRADIC_ROTATIONS.map(|deg| to_hex(hsl.rotate(deg)))
}

/// Four lightness variants, darkest first
pub fn monochromatic(base: RgbColor) -> [HexColor; 4] {
    let hsl = rgb_to_hsl(base.r, base.g, base.b);
    offsets::MONOCHROMATIC_OFFSETS.map(|offset| to_hex(hsl.shift_lightness(offset)))
}

/// All harmony kinds for `base`
pub fn harmonies(base: impl Into<RgbColor>) -> HarmonySet {
    let base: RgbColor = base.into();
    tracing::trace!(base = %HexColor::from(base), "generating harmony set");

    HarmonySet {
        complementary: complementary(base),
        analogous: analogous(base),
        triadic: triadic(base),
        tetradic: tetradic(base),
        monochromatic: monochromatic(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(s: &str) -> RgbColor {
        s.parse::<HexColor>().unwrap().rgb()
    }

    fn strings(colors: &[HexColor]) -> Vec<String> {
        colors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_complementary_black_white() {
        assert_eq!(complementary(rgb("#000000")).to_string(), "#ffffff");
        assert_eq!(complementary(rgb("#ffffff")).to_string(), "#000000");
    }

    #[test]
    fn test_complementary_is_not_hue_rotation() {
        let base = rgb("#2d8cf0");
        let set = harmonies(base);
        assert_eq!(set.complementary.to_string(), "#d2730f");
        // tetradic +180° is the hue-rotated opposite, and differs
        assert_eq!(set.tetradic[1].to_string(), "#f0912d");
        assert_ne!(set.complementary, set.tetradic[1]);
    }

    #[test]
    fn test_default_color_harmonies() {
        let set = harmonies(rgb("#2d8cf0"));
        assert_eq!(strings(&set.analogous), ["#302df0", "#2deef0"]);
        assert_eq!(strings(&set.triadic), ["#f02d8c", "#8cf02d"]);
        assert_eq!(strings(&set.tetradic), ["#f02dee", "#f0912d", "#2df030"]);
        assert_eq!(
            strings(&set.monochromatic),
            ["#09417b", "#0e66c3", "#74b3f5", "#bcdafa"]
        );
    }

    #[test]
    fn test_analogous_wraps_negative_hue() {
        // pure red: hue 0 - 30 must wrap to 330
        let [plus, minus] = analogous(rgb("#ff0000"));
        let plus = rgb_to_hsl(plus.rgb().r, plus.rgb().g, plus.rgb().b);
        let minus = rgb_to_hsl(minus.rgb().r, minus.rgb().g, minus.rgb().b);
        assert!((plus.h() - 30.0).abs() < 0.5, "got {}", plus.h());
        assert!((minus.h() - 330.0).abs() < 0.5, "got {}", minus.h());
    }

    #[test]
    fn test_monochromatic_offsets_exact_in_hsl() {
        let base = HslColor::new(200.0, 0.5, 0.5).unwrap();
        let variants = HarmonyKind::Monochromatic.derive_hsl(base).unwrap();

        assert_eq!(variants.len(), 4);
        let expected = [0.2, 0.35, 0.65, 0.8];
        for (variant, want) in variants.iter().zip(expected) {
            assert!((variant.l() - want).abs() < 1e-12, "{} vs {}", variant.l(), want);
            assert_eq!(variant.h(), 200.0);
            assert_eq!(variant.s(), 0.5);
        }
    }

    #[test]
    fn test_monochromatic_clamps_not_wraps() {
        let light = HslColor::new(0.0, 0.0, 0.9).unwrap();
        let variants = HarmonyKind::Monochromatic.derive_hsl(light).unwrap();
        assert!((variants[0].l() - 0.6).abs() < 1e-12);
        assert_eq!(variants[2].l(), 1.0);
        assert_eq!(variants[3].l(), 1.0);

        let dark = HslColor::new(0.0, 0.0, 0.1).unwrap();
        let variants = HarmonyKind::Monochromatic.derive_hsl(dark).unwrap();
        assert_eq!(variants[0].l(), 0.0);
        assert_eq!(variants[1].l(), 0.0);

        assert_eq!(
            strings(&monochromatic(RgbColor::WHITE)),
            ["#b3b3b3", "#d9d9d9", "#ffffff", "#ffffff"]
        );
    }

    #[test]
    fn test_monochromatic_red() {
        assert_eq!(
            strings(&monochromatic(rgb("#ff0000"))),
            ["#660000", "#b30000", "#ff4d4d", "#ff9999"]
        );
    }

    #[test]
    fn test_triadic_primaries() {
        assert_eq!(strings(&triadic(rgb("#ff0000"))), ["#00ff00", "#0000ff"]);
    }

    #[test]
    fn test_achromatic_rotations_stay_gray() {
        let gray = rgb("#808080");
        for color in tetradic(gray).iter().chain(triadic(gray).iter()) {
            assert_eq!(color.to_string(), "#808080");
        }
    }

    #[test]
    fn test_arity_matches_set() {
        let set = harmonies(rgb("#123456"));
        for (kind, colors) in set.iter() {
            assert_eq!(colors.len(), kind.arity(), "{}", kind);
            assert_eq!(kind.derive(rgb("#123456")), colors, "{}", kind);
        }
        assert_eq!(set.iter().count(), HarmonyKind::ALL.len());
    }

    #[test]
    fn test_derive_hsl_complementary_is_none() {
        let base = HslColor::new(10.0, 0.4, 0.4).unwrap();
        assert!(HarmonyKind::Complementary.derive_hsl(base).is_none());
    }

    #[test]
    fn test_harmony_set_serializes_by_kind() {
        let set = harmonies(rgb("#000000"));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["complementary"], "#ffffff");
        assert_eq!(json["monochromatic"].as_array().unwrap().len(), 4);
        assert_eq!(serde_json::to_string(&HarmonyKind::Tetradic).unwrap(), "\"tetradic\"");
    }
}
