//! Frame Stepper
//!
//! Advances a body by one fixed simulation tick. Vertical motion is applied
//! and resolved before horizontal motion, so a body landing diagonally on a
//! ledge is snapped onto it rather than pushed sideways off it.

use crate::settings::GameSettings;
use crate::world::Rect;
use super::body::Body;
use super::collision::{resolve_collisions, supported};

/// Per-tick physics parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    /// Tick length in seconds
    pub dt: f32,
    /// Downward acceleration, units per second squared
    pub gravity: f32,
    pub debug_log: bool,
}

impl StepParams {
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            dt: settings.tick_seconds(),
            gravity: settings.gravity,
            debug_log: settings.debug_log,
        }
    }
}

/// Advance `body` by one tick against static `platforms`
pub fn step_body(body: &mut Body, platforms: &[Rect], params: &StepParams) {
    body.grounded = false;

    // Vertical
    body.position.1 += body.velocity.1 * params.dt;
    body.sync_rect_y();
    let before = body.rect;
    let vy = body.velocity.1;
    resolve_collisions(body, 0.0, vy, platforms, params.debug_log);
    if body.rect.y != before.y {
        body.position.1 = body.rect.y as f32;
    }
    if body.velocity.1 >= 0.0 && supported(&body.rect, platforms) {
        body.grounded = true;
        body.velocity.1 = 0.0;
    }

    // Horizontal
    body.position.0 += body.velocity.0 * params.dt;
    body.sync_rect_x();
    let before = body.rect;
    let vx = body.velocity.0;
    resolve_collisions(body, vx, 0.0, platforms, params.debug_log);
    if body.rect.x != before.x {
        body.position.0 = body.rect.x as f32;
    }

    if body.walking {
        body.animation.advance();
    }

    if !body.grounded {
        body.velocity.1 += params.gravity * params.dt;
    }

    if params.debug_log {
        log::trace!(
            "STEP|pos:({:.2},{:.2})|rect:({},{})|vel:({:.2},{:.2})|g:{}",
            body.position.0, body.position.1,
            body.rect.x, body.rect.y,
            body.velocity.0, body.velocity.1,
            if body.grounded { "Y" } else { "N" },
        );
    }
}
