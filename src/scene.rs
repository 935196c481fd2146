//! Screen stack
//!
//! The battle screen sits at the bottom; the settings screen is pushed on top
//! of it by the single external command, "open configuration screen", and
//! popped once the menu closes.

use crate::config::DisplayConfig;
use crate::fonts::FontCatalog;
use crate::settings::SettingsMenu;
use tracing::debug;

#[derive(Debug)]
pub enum Screen {
    Battle,
    Settings(SettingsMenu),
}

#[derive(Debug)]
pub struct ScreenStack {
    screens: Vec<Screen>,
}

impl ScreenStack {
    pub fn new() -> Self {
        ScreenStack {
            screens: vec![Screen::Battle],
        }
    }

    pub fn push(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    /// Pop the top screen; the base battle screen is never popped
    pub fn pop(&mut self) -> Option<Screen> {
        if self.screens.len() > 1 {
            self.screens.pop()
        } else {
            None
        }
    }

    pub fn top(&self) -> &Screen {
        // `new` seeds the base screen and `pop` never removes it
        &self.screens[self.screens.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut Screen {
        let last = self.screens.len() - 1;
        &mut self.screens[last]
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn settings_menu_mut(&mut self) -> Option<&mut SettingsMenu> {
        match self.top_mut() {
            Screen::Settings(menu) => Some(menu),
            Screen::Battle => None,
        }
    }

    /// Pop the settings screen if its menu has closed
    ///
    /// Returns true when a screen was popped.
    pub fn pop_closed_menu(&mut self) -> bool {
        let closed = matches!(self.top(), Screen::Settings(menu) if menu.state().is_closed());
        if closed {
            self.pop();
        }
        closed
    }
}

impl Default for ScreenStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Push the settings screen, built from the live config
///
/// Opening it while it is already on top does nothing.
pub fn open_configuration_screen(stack: &mut ScreenStack, config: &DisplayConfig, catalog: &FontCatalog) {
    if matches!(stack.top(), Screen::Settings(_)) {
        return;
    }
    debug!("opening configuration screen");
    stack.push(Screen::Settings(SettingsMenu::open(config, catalog)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::settings::SettingsCommand;
    use crate::storage::MemoryStore;

    #[test]
    fn test_base_screen_cannot_be_popped() {
        let mut stack = ScreenStack::new();
        assert!(stack.pop().is_none());
        assert!(matches!(stack.top(), Screen::Battle));
    }

    #[test]
    fn test_open_configuration_screen() {
        let config = DisplayConfig::default();
        let catalog = FontCatalog::fallback();
        let mut stack = ScreenStack::new();

        open_configuration_screen(&mut stack, &config, &catalog);
        assert_eq!(stack.depth(), 2);
        assert!(stack.settings_menu_mut().is_some());

        // Second open while already showing is ignored
        open_configuration_screen(&mut stack, &config, &catalog);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_closed_menu_is_popped() {
        let mut config = DisplayConfig::default();
        let catalog = FontCatalog::fallback();
        let mut store = ConfigStore::new(MemoryStore::new());
        let mut stack = ScreenStack::new();

        open_configuration_screen(&mut stack, &config, &catalog);
        assert!(!stack.pop_closed_menu());

        if let Some(menu) = stack.settings_menu_mut() {
            menu.activate(SettingsCommand::Save, &mut config, &mut store);
        }
        assert!(stack.pop_closed_menu());
        assert!(matches!(stack.top(), Screen::Battle));
    }
}
