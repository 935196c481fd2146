use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Actions the host loop can perform
///
/// Raw SDL2 input is translated into these so the loop never looks at
/// keycodes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    // === Battle ===
    SimulateAttack,
    SimulateCritical,
    SimulateHeal,
    SimulateMiss,
    SimulateEvade,
    OpenSettings,

    // === Menu Navigation ===
    MenuUp,
    MenuDown,
    MenuConfirm,
    MenuCancel,

    // === System ===
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Battle screen is on top
    Battle,
    /// Settings screen is on top
    Settings,
}

/// Translates SDL2 events into [`HostAction`]s for the current context
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Battle,
        }
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Poll all pending events
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<HostAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(HostAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = self.map_key(key) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }

    /// Map a key press to an action in the current context
    pub fn map_key(&self, key: Keycode) -> Option<HostAction> {
        match self.context {
            InputContext::Battle => match key {
                Keycode::Space => Some(HostAction::SimulateAttack),
                Keycode::C => Some(HostAction::SimulateCritical),
                Keycode::H => Some(HostAction::SimulateHeal),
                Keycode::M => Some(HostAction::SimulateMiss),
                Keycode::E => Some(HostAction::SimulateEvade),
                Keycode::O => Some(HostAction::OpenSettings),
                Keycode::Escape => Some(HostAction::Quit),
                _ => None,
            },
            InputContext::Settings => match key {
                Keycode::Up | Keycode::W => Some(HostAction::MenuUp),
                Keycode::Down | Keycode::S => Some(HostAction::MenuDown),
                Keycode::Return | Keycode::Space => Some(HostAction::MenuConfirm),
                Keycode::Escape => Some(HostAction::MenuCancel),
                _ => None,
            },
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Battle);
    }

    #[test]
    fn test_keys_depend_on_context() {
        let mut input = InputSystem::new();
        assert_eq!(input.map_key(Keycode::Space), Some(HostAction::SimulateAttack));
        assert_eq!(input.map_key(Keycode::Escape), Some(HostAction::Quit));
        assert_eq!(input.map_key(Keycode::Up), None);

        input.set_context(InputContext::Settings);
        assert_eq!(input.map_key(Keycode::Space), Some(HostAction::MenuConfirm));
        assert_eq!(input.map_key(Keycode::Escape), Some(HostAction::MenuCancel));
        assert_eq!(input.map_key(Keycode::O), None);
    }
}
