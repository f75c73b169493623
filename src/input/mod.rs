//! Keyboard input mapped to game actions

mod actions;
mod state;

pub use actions::*;
pub use state::*;
