//! Settings menu state machine
//!
//! Six commands: Font, Size, Damage Color, Healing Color, Save, Cancel.
//! Field commands rotate their value and leave the menu open. Save persists
//! and closes. Cancel closes without persisting.
//!
//! Field commands write into the live config immediately, so Cancel only
//! skips the save: whatever was changed stays in effect for the rest of the
//! session and is lost on the next start.

use super::cycle::Cycle;
use crate::config::{ConfigStore, DisplayConfig, Rgb};
use crate::fonts::FontCatalog;
use tracing::{debug, warn};

pub const MIN_CYCLE_FONT_SIZE: u32 = 1;
pub const MAX_CYCLE_FONT_SIZE: u32 = 72;

/// Colors both color commands rotate through
pub const COLOR_PALETTE: [Rgb; 6] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 255, 255),
];

/// The menu's commands, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCommand {
    Font,
    Size,
    DamageColor,
    HealingColor,
    Save,
    Cancel,
}

impl SettingsCommand {
    pub fn all() -> [Self; 6] {
        [
            Self::Font,
            Self::Size,
            Self::DamageColor,
            Self::HealingColor,
            Self::Save,
            Self::Cancel,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Font => "Font",
            Self::Size => "Size",
            Self::DamageColor => "Damage Color",
            Self::HealingColor => "Healing Color",
            Self::Save => "Save",
            Self::Cancel => "Cancel",
        }
    }
}

/// Where the menu is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Viewing,
    /// Closed by Save; `persisted` is false if the store refused the write
    Saved { persisted: bool },
    Cancelled,
}

impl MenuState {
    pub fn is_closed(&self) -> bool {
        !matches!(self, MenuState::Viewing)
    }
}

/// One rendered row: the command and its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub command: SettingsCommand,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct SettingsMenu {
    selected_index: usize,
    state: MenuState,
    fonts: Cycle<String>,
    sizes: Cycle<u32>,
    damage_colors: Cycle<Rgb>,
    healing_colors: Cycle<Rgb>,
}

impl SettingsMenu {
    /// Open the menu positioned on the config's current values
    pub fn open(config: &DisplayConfig, catalog: &FontCatalog) -> Self {
        SettingsMenu {
            selected_index: 0,
            state: MenuState::Viewing,
            fonts: Cycle::new(catalog.names(), &config.font_face),
            sizes: Cycle::new(
                (MIN_CYCLE_FONT_SIZE..=MAX_CYCLE_FONT_SIZE).collect(),
                &config.font_size,
            ),
            damage_colors: Cycle::new(COLOR_PALETTE.to_vec(), &config.damage_color),
            healing_colors: Cycle::new(COLOR_PALETTE.to_vec(), &config.healing_color),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        let count = SettingsCommand::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % SettingsCommand::all().len();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_command(&self) -> SettingsCommand {
        SettingsCommand::all()[self.selected_index]
    }

    pub fn activate_selected(&mut self, config: &mut DisplayConfig, store: &mut ConfigStore) -> MenuState {
        self.activate(self.selected_command(), config, store)
    }

    /// Run a command against the live config
    ///
    /// A closed menu ignores further commands.
    pub fn activate(
        &mut self,
        command: SettingsCommand,
        config: &mut DisplayConfig,
        store: &mut ConfigStore,
    ) -> MenuState {
        if self.state.is_closed() {
            return self.state;
        }

        match command {
            SettingsCommand::Font => {
                if let Some(face) = self.fonts.advance() {
                    config.font_face = face.clone();
                }
            }
            SettingsCommand::Size => {
                if let Some(size) = self.sizes.advance() {
                    config.font_size = *size;
                }
            }
            SettingsCommand::DamageColor => {
                if let Some(color) = self.damage_colors.advance() {
                    config.damage_color = *color;
                }
            }
            SettingsCommand::HealingColor => {
                if let Some(color) = self.healing_colors.advance() {
                    config.healing_color = *color;
                }
            }
            SettingsCommand::Save => {
                let persisted = match store.save(config) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(error = %e, "could not save display config");
                        false
                    }
                };
                self.state = MenuState::Saved { persisted };
            }
            SettingsCommand::Cancel => {
                self.state = MenuState::Cancelled;
            }
        }

        debug!(command = command.name(), state = ?self.state, "settings command");
        self.state
    }

    /// Rows to draw, with current values filled in
    pub fn rows(&self, config: &DisplayConfig) -> Vec<MenuRow> {
        SettingsCommand::all()
            .into_iter()
            .map(|command| {
                let text = match command {
                    SettingsCommand::Font => format!("{}: {}", command.name(), config.font_face),
                    SettingsCommand::Size => format!("{}: {}", command.name(), config.font_size),
                    SettingsCommand::DamageColor => format!("{}: {}", command.name(), config.damage_color),
                    SettingsCommand::HealingColor => format!("{}: {}", command.name(), config.healing_color),
                    SettingsCommand::Save | SettingsCommand::Cancel => command.name().to_string(),
                };
                MenuRow { command, text }
            })
            .collect()
    }
}
