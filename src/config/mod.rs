//! Display configuration
//!
//! This module holds the single record that controls how battle text looks:
//! - `color`: hex color parsing and formatting
//! - `params`: declared defaults read from the parameters file
//! - `store`: load/save of the record through a key-value store
//!
//! The record is an owned value. Whoever needs it gets it passed in; the
//! settings menu is the only code that mutates it after startup.

pub mod color;
pub mod params;
pub mod store;

pub use color::{ColorParseError, Rgb};
pub use params::{CustomFontParam, ParamsError, PluginParams};
pub use store::{ConfigStore, LoadOutcome, CONFIG_STORAGE_KEY};

use serde::{Deserialize, Serialize};

/// Fonts, colors and popup lifetime for the battle display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    pub font_face: String,
    pub font_size: u32,
    pub damage_color: Rgb,
    pub healing_color: Rgb,
    pub animation_duration_frames: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        PluginParams::default().to_config()
    }
}
