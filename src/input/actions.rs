//! Game action definitions

/// Logical actions the hero and the play screen respond to.
///
/// Several keys may map to the same action (arrow keys and WASD both move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Hero
    Jump,
    MoveLeft,
    MoveRight,

    // Session
    ResetLevel,
    Quit,
}

impl Action {
    /// Horizontal movement actions, the ones a release can re-derive from
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Action::MoveLeft | Action::MoveRight)
    }
}

/// A discrete key transition, already translated to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Action),
    Released(Action),
}
