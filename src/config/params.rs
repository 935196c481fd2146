//! Declared parameters
//!
//! The parameters file is the designer-facing surface: it declares the
//! defaults that the settings screen starts from before any saved record is
//! applied. Every key is optional. Out-of-range numbers are clamped and
//! unparseable colors fall back to their default, both with a warning, so a
//! bad parameters file never stops the game from starting.

use super::color::Rgb;
use super::DisplayConfig;
use serde::Deserialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_FONT_FACE: &str = "GameFont";
pub const DEFAULT_FONT_SIZE: u32 = 34;
pub const DEFAULT_DAMAGE_COLOR: Rgb = Rgb::new(255, 0, 0);
pub const DEFAULT_HEALING_COLOR: Rgb = Rgb::new(0, 255, 0);
pub const DEFAULT_DURATION_FRAMES: u32 = 60;

pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 12..=72;
pub const DURATION_RANGE: RangeInclusive<u32> = 10..=120;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("could not read parameters file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse parameters file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A font declared in the parameters file, expected under the fonts directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomFontParam {
    pub name: String,
    pub file: String,
}

/// Raw parameters as written in `params.toml`
///
/// Numbers are read as signed so that a negative value can be clamped
/// instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginParams {
    pub font_face: Option<String>,
    pub font_size: Option<i64>,
    pub damage_color: Option<String>,
    pub healing_color: Option<String>,
    pub animation_duration_frames: Option<i64>,
    #[serde(default)]
    pub custom_fonts: Vec<CustomFontParam>,
}

impl PluginParams {
    /// Parse parameters from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ParamsError> {
        Ok(toml::from_str(text)?)
    }

    /// Read parameters from a file
    ///
    /// A file that does not exist yields all-default parameters.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no parameters file, using defaults");
            return Ok(PluginParams::default());
        }

        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Build the declared default configuration
    pub fn to_config(&self) -> DisplayConfig {
        let font_face = match self.font_face.as_deref().map(str::trim) {
            Some(face) if !face.is_empty() => face.to_string(),
            _ => DEFAULT_FONT_FACE.to_string(),
        };

        DisplayConfig {
            font_face,
            font_size: clamp_param("fontSize", self.font_size, DEFAULT_FONT_SIZE, FONT_SIZE_RANGE),
            damage_color: color_param("damageColor", self.damage_color.as_deref(), DEFAULT_DAMAGE_COLOR),
            healing_color: color_param("healingColor", self.healing_color.as_deref(), DEFAULT_HEALING_COLOR),
            animation_duration_frames: clamp_param(
                "animationDurationFrames",
                self.animation_duration_frames,
                DEFAULT_DURATION_FRAMES,
                DURATION_RANGE,
            ),
        }
    }
}

fn clamp_param(name: &str, value: Option<i64>, default: u32, range: RangeInclusive<u32>) -> u32 {
    let Some(raw) = value else {
        return default;
    };

    let clamped = raw.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32;
    if i64::from(clamped) != raw {
        warn!(param = name, value = raw, clamped, "parameter out of range");
    }
    clamped
}

fn color_param(name: &str, value: Option<&str>, default: Rgb) -> Rgb {
    match value.map(str::parse::<Rgb>) {
        None => default,
        Some(Ok(color)) => color,
        Some(Err(e)) => {
            warn!(param = name, error = %e, "invalid color parameter, using {}", default);
            default
        }
    }
}
