//! In-game settings screen logic
//!
//! - `cycle`: ordered value lists with wrap-around stepping
//! - `menu`: the six-command settings state machine

pub mod cycle;
pub mod menu;

pub use cycle::Cycle;
pub use menu::{MenuRow, MenuState, SettingsCommand, SettingsMenu, COLOR_PALETTE};
