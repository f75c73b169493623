//! Kinematic body (the hero)
//!
//! `position` is the authoritative sub-pixel location; `rect` is its
//! integer truncation and is what collides and what gets drawn.

use crate::input::{Action, InputState};
use crate::world::Rect;
use super::animation::AnimationStrip;

/// Frames in the hero's run cycle
pub const RUN_CYCLE_FRAMES: usize = 3;

/// Speeds applied by input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Vertical velocity set by a jump (negative = up)
    pub jump_speed: f32,
    /// Horizontal speed while a direction is held
    pub run_speed: f32,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub position: (f32, f32),
    pub rect: Rect,
    /// Units per second. x > 0 is rightward, y < 0 is upward.
    pub velocity: (f32, f32),
    pub grounded: bool,
    /// A horizontal direction key is held
    pub walking: bool,
    pub animation: AnimationStrip,
    motion: Motion,
}

impl Body {
    /// New body of the given size at a spawn point
    pub fn new(x: f32, y: f32, width: i32, height: i32, motion: Motion) -> Self {
        Self {
            position: (x, y),
            rect: Rect::new(x.trunc() as i32, y.trunc() as i32, width, height),
            velocity: (0.0, 0.0),
            grounded: true,
            walking: false,
            animation: AnimationStrip::looping(RUN_CYCLE_FRAMES),
            motion,
        }
    }

    /// Start the motion an action asks for. Non-hero actions are ignored.
    pub fn apply_input(&mut self, action: Action) {
        match action {
            Action::Jump => self.velocity.1 = self.motion.jump_speed,
            Action::MoveLeft => {
                self.velocity.0 = -self.motion.run_speed;
                self.walking = true;
            }
            Action::MoveRight => {
                self.velocity.0 = self.motion.run_speed;
                self.walking = true;
            }
            _ => {}
        }
    }

    /// Stop horizontal motion on release, then resume whichever direction
    /// is still held (left wins if both are).
    pub fn clear_input(&mut self, action: Action, held: &InputState) {
        if !action.is_horizontal() {
            return;
        }
        self.velocity.0 = 0.0;
        self.walking = false;

        if held.action_down(Action::MoveLeft) {
            self.apply_input(Action::MoveLeft);
        } else if held.action_down(Action::MoveRight) {
            self.apply_input(Action::MoveRight);
        }
    }

    /// Re-derive `rect.x` from `position.x`
    pub fn sync_rect_x(&mut self) {
        self.rect.x = self.position.0.trunc() as i32;
    }

    /// Re-derive `rect.y` from `position.y`
    pub fn sync_rect_y(&mut self) {
        self.rect.y = self.position.1.trunc() as i32;
    }
}
