//! Battle display: configurable floating damage numbers, battle log and
//! settings screen.
//!
//! The game loop drives everything through two hooks on
//! [`battle::BattleDisplay`]: `on_display_damage` when an action resolves and
//! `on_tick` once per frame. The [`config::DisplayConfig`] is owned by the
//! caller and passed in wherever it is read or changed.

pub mod battle;
pub mod combat;
pub mod config;
pub mod fonts;
pub mod popup;
pub mod scene;
pub mod settings;
pub mod storage;

#[cfg(feature = "render")]
pub mod input;
#[cfg(feature = "render")]
pub mod render;
