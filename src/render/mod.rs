//! SDL2 drawing for the battle display
//!
//! These renderers take the live config and the state to draw on every call.
//! The popup renderer also keeps prerendered text textures between frames.
//!
//! - [`PopupRenderer`] - floating damage/heal numbers
//! - [`MenuRenderer`] - the settings screen overlay
//! - [`render_battle_log`] - the battle log panel
//! - [`text`] - 5x7 bitmap font shared by all of the above

pub mod log_view;
pub mod menu_view;
pub mod popup_view;
pub mod text;

pub use log_view::render_battle_log;
pub use menu_view::{MenuRenderer, MenuStyle};
pub use popup_view::{PopupRenderer, PopupStyle};

use crate::config::Rgb;
use sdl2::pixels::Color;

pub fn to_sdl_color(color: Rgb) -> Color {
    Color::RGB(color.r, color.g, color.b)
}
