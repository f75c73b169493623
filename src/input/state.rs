//! Input state management
//!
//! Translates macroquad key transitions into actions and remembers which
//! bound keys are still held, so a release can fall back to another
//! direction that is still down.

use std::collections::HashSet;
use macroquad::prelude::{get_keys_pressed, get_keys_released, KeyCode};
use super::{Action, InputEvent};

/// Default key bindings (duplicates intended)
pub const DEFAULT_BINDINGS: [(KeyCode, Action); 8] = [
    (KeyCode::W, Action::Jump),
    (KeyCode::Up, Action::Jump),
    (KeyCode::A, Action::MoveLeft),
    (KeyCode::Left, Action::MoveLeft),
    (KeyCode::D, Action::MoveRight),
    (KeyCode::Right, Action::MoveRight),
    (KeyCode::R, Action::ResetLevel),
    (KeyCode::Escape, Action::Quit),
];

/// Keyboard state in terms of actions
pub struct InputState {
    bindings: Vec<(KeyCode, Action)>,
    /// Bound keys currently held down
    held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::with_bindings(DEFAULT_BINDINGS.to_vec())
    }

    pub fn with_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    /// Action bound to a key, if any. Unbound keys are ignored everywhere.
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, action)| action)
    }

    /// Record a key press
    pub fn press(&mut self, key: KeyCode) -> Option<InputEvent> {
        let action = self.action_for(key)?;
        self.held.insert(key);
        Some(InputEvent::Pressed(action))
    }

    /// Record a key release
    pub fn release(&mut self, key: KeyCode) -> Option<InputEvent> {
        let action = self.action_for(key)?;
        self.held.remove(&key);
        Some(InputEvent::Released(action))
    }

    /// Check if any key bound to the action is held
    pub fn action_down(&self, action: Action) -> bool {
        self.bindings
            .iter()
            .any(|(key, a)| *a == action && self.held.contains(key))
    }

    /// Forget all held keys (e.g. when leaving the play screen)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Call once per frame; returns this frame's transitions.
    /// Releases come first so a same-frame release and press of the two
    /// directions ends with the newly pressed one.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let released = get_keys_released();
        let pressed = get_keys_pressed();
        let mut events = Vec::new();
        for key in released {
            events.extend(self.release(key));
        }
        for key in pressed {
            events.extend(self.press(key));
        }
        events
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_bindings() {
        let input = InputState::new();
        assert_eq!(input.action_for(KeyCode::W), Some(Action::Jump));
        assert_eq!(input.action_for(KeyCode::Up), Some(Action::Jump));
        assert_eq!(input.action_for(KeyCode::Left), Some(Action::MoveLeft));
        assert_eq!(input.action_for(KeyCode::Z), None);
    }

    #[test]
    fn test_held_tracking() {
        let mut input = InputState::new();
        assert_eq!(input.press(KeyCode::A), Some(InputEvent::Pressed(Action::MoveLeft)));
        input.press(KeyCode::Left);
        input.release(KeyCode::A);
        // Still held through the arrow binding
        assert!(input.action_down(Action::MoveLeft));
        input.release(KeyCode::Left);
        assert!(!input.action_down(Action::MoveLeft));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut input = InputState::new();
        assert_eq!(input.press(KeyCode::Q), None);
        assert_eq!(input.release(KeyCode::Q), None);
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        input.press(KeyCode::D);
        input.clear();
        assert!(!input.action_down(Action::MoveRight));
    }
}
