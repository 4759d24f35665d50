//! Reference values for color metrics and harmony generation
//!
//! This module contains compile-time constants for luminance, contrast,
//! brightness and harmony derivation, based on WCAG 2.x and the
//! W3C perceived-brightness formula.

/// WCAG 2.x relative luminance and contrast reference values
pub mod wcag {
    /// Normalized channel value at or below which the linear segment applies
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Divisor of the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset and scale of the gamma segment: ((c + 0.055) / 1.055)^2.4
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_SCALE: f64 = 1.055;
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Channel weights for relative luminance (Rec. 709 primaries)
    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;

    /// Flare term added to both luminances in the contrast ratio
    pub const CONTRAST_FLARE: f64 = 0.05;

    /// Contrast ratio bounds
    pub const MIN_CONTRAST: f64 = 1.0;
    pub const MAX_CONTRAST: f64 = 21.0;

    /// Inclusive lower bounds of each accessibility tier
    pub const AAA_THRESHOLD: f64 = 7.0;
    pub const AA_THRESHOLD: f64 = 4.5;
    pub const A_THRESHOLD: f64 = 3.0;
}

/// Perceived (non gamma-corrected) brightness
pub mod perception {
    /// Channel weights of (R·299 + G·587 + B·114) / 1000
    pub const RED_WEIGHT: u32 = 299;
    pub const GREEN_WEIGHT: u32 = 587;
    pub const BLUE_WEIGHT: u32 = 114;
    pub const WEIGHT_SCALE: f64 = 1000.0;

    /// Brightness above which a color is classified as light
    pub const LIGHT_THRESHOLD: f64 = 128.0;

    /// Temperature above which a color is classified as warm
    pub const WARM_THRESHOLD: f64 = 0.5;

    /// Temperature reported for pure black
    pub const NEUTRAL_TEMPERATURE: f64 = 0.5;
}

/// Hue rotations and lightness offsets for harmony sets
pub mod harmony {
    /// Analogous colors sit this many degrees either side of the base hue
    pub const ANALOGOUS_STEP: f64 = 30.0;

    pub const TRIADIC_ROTATIONS: [f64; 2] = [120.0, 240.0];

    pub const TETRADIC_ROTATIONS: [f64; 3] = [90.0, 180.0, 270.0];

    /// Lightness offsets of the monochromatic variants, darkest first
    pub const MONOCHROMATIC_OFFSETS: [f64; 4] = [-0.3, -0.15, 0.15, 0.3];
}

/// Defaults shared by configuration and palette generation
pub mod defaults {
    /// Color selected when nothing else has been chosen
    pub const DEFAULT_COLOR: u32 = 0x2d8cf0;

    pub const RANDOM_PALETTE_SIZE: usize = 8;
    pub const RANDOM_PALETTE_HUE_STEP: f64 = 45.0;
    pub const RANDOM_SATURATION_MIN: f64 = 0.3;
    pub const RANDOM_SATURATION_MAX: f64 = 1.0;
    pub const RANDOM_LIGHTNESS_MIN: f64 = 0.2;
    pub const RANDOM_LIGHTNESS_MAX: f64 = 0.8;

    /// Upper bound (exclusive) of `random_color`
    pub const RANDOM_COLOR_SPAN: u32 = 0xff_ffff;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights_sum_to_one() {
        let sum = wcag::RED_WEIGHT + wcag::GREEN_WEIGHT + wcag::BLUE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_brightness_weights_sum_to_scale() {
        let sum = perception::RED_WEIGHT + perception::GREEN_WEIGHT + perception::BLUE_WEIGHT;
        assert_eq!(sum as f64, perception::WEIGHT_SCALE);
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(wcag::A_THRESHOLD < wcag::AA_THRESHOLD);
        assert!(wcag::AA_THRESHOLD < wcag::AAA_THRESHOLD);
        assert!(wcag::AAA_THRESHOLD < wcag::MAX_CONTRAST);
        assert!(defaults::RANDOM_SATURATION_MIN < defaults::RANDOM_SATURATION_MAX);
        assert!(defaults::RANDOM_LIGHTNESS_MIN < defaults::RANDOM_LIGHTNESS_MAX);
    }
}
