//! Configuration structures for the color engine.
//!
//! This module defines the settings a host application keeps for the
//! engine: the initial color, how colors are shown, and how random palettes
//! are generated.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically.
//! Fields missing from a file fall back to their defaults:
//!
//! ```no_run
//! use color_engine::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("settings.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), color_engine::ColorError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`DisplaySettings`]: preferred output format and which panels to show
//! - [`RandomPaletteConfig`]: size, hue step and ranges for random palettes

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::conversion::{rgb_to_cmyk, rgb_to_hsl};
use crate::color::model::{HexColor, RgbColor};
use crate::constants::defaults;
use crate::{ColorError, Result};

/// Complete engine configuration.
///
/// Can be serialized to/from JSON so a host application can persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Color selected before the user picks one
    pub default_color: HexColor,

    /// Display preferences
    pub display: DisplaySettings,

    /// Random palette generation
    pub random_palette: RandomPaletteConfig,
}

/// Which encoding a color is shown in by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
    Cmyk,
}

impl DisplayFormat {
    /// Render `color` in this format, e.g. `rgb(45, 140, 240)`
    pub fn render(self, color: impl Into<RgbColor>) -> String {
        let rgb: RgbColor = color.into();
        match self {
            DisplayFormat::Hex => HexColor::from(rgb).to_string(),
            DisplayFormat::Rgb => rgb.to_string(),
            DisplayFormat::Hsl => rgb_to_hsl(rgb.r, rgb.g, rgb.b).to_string(),
            DisplayFormat::Cmyk => rgb_to_cmyk(rgb).to_string(),
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Format used when a single representation is shown or copied
    pub default_format: DisplayFormat,

    /// Show brightness, saturation and warmth next to the color
    pub show_color_analysis: bool,

    /// Show the harmony set of the current color
    pub show_harmonies: bool,
}

/// Random palette parameters.
///
/// Entry `i` of a palette has hue `base + i * hue_step`; saturation and
/// lightness are drawn uniformly from `[min, max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomPaletteConfig {
    /// Number of colors per palette
    pub size: usize,

    /// Hue distance between consecutive colors, in degrees
    pub hue_step: f64,

    /// Saturation range (0.0-1.0)
    pub saturation_min: f64,
    pub saturation_max: f64,

    /// Lightness range (0.0-1.0)
    pub lightness_min: f64,
    pub lightness_max: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_color: HexColor::new(RgbColor::from_u32(defaults::DEFAULT_COLOR)),
            display: DisplaySettings::default(),
            random_palette: RandomPaletteConfig::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_format: DisplayFormat::Hex,
            show_color_analysis: true,
            show_harmonies: true,
        }
    }
}

impl Default for RandomPaletteConfig {
    fn default() -> Self {
        Self {
            size: defaults::RANDOM_PALETTE_SIZE,
            hue_step: defaults::RANDOM_PALETTE_HUE_STEP,
            saturation_min: defaults::RANDOM_SATURATION_MIN,
            saturation_max: defaults::RANDOM_SATURATION_MAX,
            lightness_min: defaults::RANDOM_LIGHTNESS_MIN,
            lightness_max: defaults::RANDOM_LIGHTNESS_MAX,
        }
    }
}

impl RandomPaletteConfig {
    /// Check sizes and ranges
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ConfigError`] for a zero size, a non-finite hue
    /// step, or a range that is inverted or leaves [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ColorError::invalid_config("random_palette.size must be at least 1"));
        }
        if !self.hue_step.is_finite() {
            return Err(ColorError::invalid_config(format!(
                "random_palette.hue_step must be finite, got {}",
                self.hue_step
            )));
        }
        check_unit_range("saturation", self.saturation_min, self.saturation_max)?;
        check_unit_range("lightness", self.lightness_min, self.lightness_max)
    }
}

fn check_unit_range(name: &str, min: f64, max: f64) -> Result<()> {
    let unit = 0.0..=1.0;
    if !unit.contains(&min) || !unit.contains(&max) || min > max {
        return Err(ColorError::invalid_config(format!(
            "random_palette.{name} range [{min}, {max}] must satisfy 0 <= min <= max <= 1"
        )));
    }
    Ok(())
}

impl EngineConfig {
    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.random_palette.validate()
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ColorError::config(format!("Failed to read {}", path.display()), e))?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded engine configuration");
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ColorError::config("Failed to parse configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    ///
    /// Invalid configurations are rejected before anything is written, so a
    /// saved file always loads back.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| ColorError::config(format!("Failed to write {}", path.display()), e))?;
        tracing::debug!(path = %path.display(), "saved engine configuration");
        Ok(())
    }

    /// The default color shown in the configured format
    pub fn render_default_color(&self) -> String {
        self.display.default_format.render(self.default_color)
    }
}
