//! Perceptual color metrics
//!
//! Computes the metrics used to judge a color or a pair of colors:
//! - WCAG 2.x relative luminance and contrast ratio with accessibility rating
//! - Perceived brightness (W3C formula, no gamma correction)
//! - RGB saturation and warmth
//!
//! Luminance and brightness answer different questions and are not
//! interchangeable: contrast checks use luminance, light/dark classification
//! uses brightness.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::model::RgbColor;
use crate::constants::{perception, wcag};

/// WCAG conformance level reached by a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessibilityRating {
    /// Below 3.0: fails every level
    Fail,
    /// 3.0 and above: large text only
    A,
    /// 4.5 and above: large text and graphics
    AA,
    /// 7.0 and above: all text and graphics
    AAA,
}

/// Content a contrast rating is sufficient for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    LargeText,
    SmallText,
    Graphics,
}

impl AccessibilityRating {
    /// Rate a contrast ratio; each tier's lower bound is inclusive
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= wcag::AAA_THRESHOLD {
            Self::AAA
        } else if ratio >= wcag::AA_THRESHOLD {
            Self::AA
        } else if ratio >= wcag::A_THRESHOLD {
            Self::A
        } else {
            Self::Fail
        }
    }

    /// Kinds of content that remain readable at this rating
    pub fn suitable_for(self) -> &'static [ContentKind] {
        match self {
            Self::AAA => &[ContentKind::LargeText, ContentKind::SmallText, ContentKind::Graphics],
            Self::AA => &[ContentKind::LargeText, ContentKind::Graphics],
            Self::A => &[ContentKind::LargeText],
            Self::Fail => &[],
        }
    }

    pub fn passes(self) -> bool {
        self != Self::Fail
    }
}

impl fmt::Display for AccessibilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AAA => "AAA",
            Self::AA => "AA",
            Self::A => "A",
            Self::Fail => "Fail",
        };
        f.write_str(label)
    }
}

/// Contrast between two colors with its rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Ratio in [1, 21]
    pub ratio: f64,
    pub rating: AccessibilityRating,
}

impl fmt::Display for ContrastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1 ({})", self.ratio, self.rating)
    }
}

/// Summary of a single color's perceptual properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    /// Perceived brightness, rounded, 0-255
    pub brightness: u8,
    /// RGB saturation percentage, rounded, 0-100
    pub saturation: u8,
    /// Warmth in [0, 0.5]; 0.5 is neutral
    pub temperature: f64,
    pub is_light: bool,
    pub is_warm: bool,
}

fn linearize(channel: f64) -> f64 {
    if channel <= wcag::LINEAR_THRESHOLD {
        channel / wcag::LINEAR_DIVISOR
    } else {
        ((channel + wcag::GAMMA_OFFSET) / wcag::GAMMA_SCALE).powf(wcag::GAMMA_EXPONENT)
    }
}

/// WCAG relative luminance in [0, 1]
pub fn luminance(color: impl Into<RgbColor>) -> f64 {
    let rgb: RgbColor = color.into();
    let [r, g, b] = rgb.normalized().map(linearize);
    wcag::RED_WEIGHT * r + wcag::GREEN_WEIGHT * g + wcag::BLUE_WEIGHT * b
}

/// WCAG contrast ratio; symmetric, 1.0 for identical colors, 21.0 for black on white
pub fn contrast_ratio(a: impl Into<RgbColor>, b: impl Into<RgbColor>) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + wcag::CONTRAST_FLARE) / (darker + wcag::CONTRAST_FLARE)
}

/// Contrast ratio of a foreground/background pair together with its rating
pub fn check_contrast(a: impl Into<RgbColor>, b: impl Into<RgbColor>) -> ContrastResult {
    let ratio = contrast_ratio(a, b);
    ContrastResult {
        ratio,
        rating: AccessibilityRating::from_ratio(ratio),
    }
}

fn perceived_brightness(rgb: RgbColor) -> f64 {
    let weighted = rgb.r as u32 * perception::RED_WEIGHT
        + rgb.g as u32 * perception::GREEN_WEIGHT
        + rgb.b as u32 * perception::BLUE_WEIGHT;
    weighted as f64 / perception::WEIGHT_SCALE
}

/// Perceived brightness (R·299 + G·587 + B·114) / 1000, rounded
pub fn brightness(color: impl Into<RgbColor>) -> u8 {
    perceived_brightness(color.into()).round() as u8
}

/// Light/dark classification on the unrounded brightness
pub fn is_light(color: impl Into<RgbColor>) -> bool {
    perceived_brightness(color.into()) > perception::LIGHT_THRESHOLD
}

/// RGB saturation `(max - min) / max` as a percentage
///
/// Not the HSL saturation: black reports 0 rather than dividing by zero.
pub fn saturation_percent(r: u8, g: u8, b: u8) -> f64 {
    let rgb = RgbColor::new(r, g, b);
    let max = rgb.max_channel();
    if max == 0 {
        return 0.0;
    }
    (max - rgb.min_channel()) as f64 / max as f64 * 100.0
}

/// Warmth `(r + g) / (2 (r + g + b))`; black is neutral (0.5)
///
/// The value never exceeds 0.5: colors without blue sit at the neutral
/// point and any blue pulls it toward 0.
pub fn temperature(r: u8, g: u8, b: u8) -> f64 {
    let total = r as u32 + g as u32 + b as u32;
    if total == 0 {
        return perception::NEUTRAL_TEMPERATURE;
    }
    (r as u32 + g as u32) as f64 / (2 * total) as f64
}

/// Brightness, saturation and warmth of one color
pub fn analyze_color(color: impl Into<RgbColor>) -> ColorAnalysis {
    let rgb: RgbColor = color.into();
    let brightness = perceived_brightness(rgb);
    let temperature = temperature(rgb.r, rgb.g, rgb.b);

    ColorAnalysis {
        brightness: brightness.round() as u8,
        saturation: saturation_percent(rgb.r, rgb.g, rgb.b).round() as u8,
        temperature,
        is_light: brightness > perception::LIGHT_THRESHOLD,
        is_warm: temperature > perception::WARM_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::model::HexColor;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(RgbColor::BLACK), 0.0);
        assert!((luminance(RgbColor::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_mid_gray_fixture() {
        // #767676 is the lightest gray reaching 4.5:1 on white
        let l = luminance(hex("#767676"));
        assert!((l - 0.1812).abs() < 0.001, "luminance was {}", l);
    }

    #[test]
    fn test_luminance_linear_segment() {
        // 10/255 = 0.0392 sits below the 0.03928 threshold
        let l = luminance(RgbColor::new(10, 10, 10));
        assert!((l - (10.0 / 255.0) / 12.92).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = contrast_ratio(hex("#000000"), hex("#ffffff"));
        assert!((ratio - wcag::MAX_CONTRAST).abs() < 1e-6);
    }

    #[test]
    fn test_contrast_identical_is_one() {
        for s in ["#000000", "#ffffff", "#2d8cf0", "#767676"] {
            assert_eq!(contrast_ratio(hex(s), hex(s)), wcag::MIN_CONTRAST);
        }
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = hex("#2d8cf0");
        let b = hex("#fafafa");
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_rating_thresholds_are_inclusive() {
        assert_eq!(AccessibilityRating::from_ratio(21.0), AccessibilityRating::AAA);
        assert_eq!(AccessibilityRating::from_ratio(7.0), AccessibilityRating::AAA);
        assert_eq!(AccessibilityRating::from_ratio(6.99), AccessibilityRating::AA);
        assert_eq!(AccessibilityRating::from_ratio(4.5), AccessibilityRating::AA);
        assert_eq!(AccessibilityRating::from_ratio(4.49), AccessibilityRating::A);
        assert_eq!(AccessibilityRating::from_ratio(3.0), AccessibilityRating::A);
        assert_eq!(AccessibilityRating::from_ratio(2.99), AccessibilityRating::Fail);
        assert_eq!(AccessibilityRating::from_ratio(1.0), AccessibilityRating::Fail);
    }

    #[test]
    fn test_rating_content_kinds() {
        assert_eq!(AccessibilityRating::AAA.suitable_for().len(), 3);
        assert_eq!(
            AccessibilityRating::AA.suitable_for(),
            &[ContentKind::LargeText, ContentKind::Graphics]
        );
        assert_eq!(AccessibilityRating::A.suitable_for(), &[ContentKind::LargeText]);
        assert!(AccessibilityRating::Fail.suitable_for().is_empty());
        assert!(!AccessibilityRating::Fail.passes());
    }

    #[test]
    fn test_check_contrast_gray_on_white() {
        let result = check_contrast(hex("#767676"), hex("#ffffff"));
        assert!((result.ratio - 4.54).abs() < 0.01);
        assert_eq!(result.rating, AccessibilityRating::AA);
        assert_eq!(result.to_string(), "4.54:1 (AA)");
    }

    #[test]
    fn test_brightness() {
        assert_eq!(brightness(RgbColor::BLACK), 0);
        assert_eq!(brightness(RgbColor::WHITE), 255);
        // 122.995 rounds up
        assert_eq!(brightness(hex("#2d8cf0")), 123);
        assert!(!is_light(hex("#2d8cf0")));
        assert!(is_light(RgbColor::new(129, 129, 129)));
        assert!(!is_light(RgbColor::new(128, 128, 128)));
    }

    #[test]
    fn test_brightness_differs_from_luminance() {
        // Pure green is bright by both measures but not by the same amount
        let green = RgbColor::new(0, 255, 0);
        assert_eq!(brightness(green), 150);
        assert!((luminance(green) - 0.7152).abs() < 1e-12);
    }

    #[test]
    fn test_saturation_percent() {
        assert_eq!(saturation_percent(0, 0, 0), 0.0);
        assert_eq!(saturation_percent(200, 200, 200), 0.0);
        assert_eq!(saturation_percent(255, 0, 0), 100.0);
        assert_eq!(saturation_percent(200, 100, 100), 50.0);
    }

    #[test]
    fn test_saturation_percent_is_not_hsl_saturation() {
        // A pale tint is fully saturated in HSL but weakly saturated in RGB
        let pale = (255, 200, 200);
        let hsl = crate::color::conversion::rgb_to_hsl(pale.0, pale.1, pale.2);
        let rgb_sat = saturation_percent(pale.0, pale.1, pale.2);
        assert!((hsl.s() * 100.0 - rgb_sat).abs() > 50.0);
    }

    #[test]
    fn test_temperature() {
        assert_eq!(temperature(0, 0, 0), 0.5);
        assert_eq!(temperature(255, 0, 0), 0.5);
        assert_eq!(temperature(255, 255, 0), 0.5);
        assert_eq!(temperature(0, 0, 255), 0.0);
        assert!((temperature(100, 100, 100) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_color() {
        let analysis = analyze_color(hex("#2d8cf0"));
        assert_eq!(analysis.brightness, 123);
        assert_eq!(analysis.saturation, 81);
        assert!(!analysis.is_light);
        assert!(!analysis.is_warm);

        let orange = analyze_color(hex("#ff9800"));
        assert!(orange.is_light);
        assert_eq!(orange.temperature, 0.5);
        // warm requires strictly above the neutral point
        assert!(!orange.is_warm);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = RgbColor> {
            any::<(u8, u8, u8)>().prop_map(|(r, g, b)| RgbColor::new(r, g, b))
        }

        proptest! {
            #[test]
            fn luminance_in_unit_range(c in any_rgb()) {
                let l = luminance(c);
                prop_assert!((0.0..=1.0 + 1e-12).contains(&l), "luminance {}", l);
            }

            #[test]
            fn contrast_symmetric_and_bounded(a in any_rgb(), b in any_rgb()) {
                let ab = contrast_ratio(a, b);
                prop_assert_eq!(ab, contrast_ratio(b, a));
                prop_assert_eq!(contrast_ratio(a, a), wcag::MIN_CONTRAST);
                prop_assert!(ab >= wcag::MIN_CONTRAST);
                prop_assert!(ab <= wcag::MAX_CONTRAST + 1e-9, "ratio {}", ab);
            }

            #[test]
            fn saturation_and_temperature_bounded(c in any_rgb()) {
                let s = saturation_percent(c.r, c.g, c.b);
                prop_assert!((0.0..=100.0).contains(&s));
                let t = temperature(c.r, c.g, c.b);
                prop_assert!((0.0..=0.5).contains(&t), "temperature {}", t);
            }
        }
    }
}
