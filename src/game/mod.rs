//! Game core
//!
//! The platformer simulation and the play screen built on it:
//! - Body: the hero's position, box, velocity and animation
//! - Collision: axis-separated push-out against static platforms
//! - Stepper: one fixed tick of motion, collision and gravity
//! - Camera: clamped follow offset
//! - Runtime: the session that owns all of the above
//!
//! Simulation code never touches macroquad's drawing or timing; only the
//! renderer does.

pub mod animation;
pub mod body;
pub mod camera;
pub mod collision;
pub mod renderer;
pub mod runtime;
pub mod stepper;

pub use animation::AnimationStrip;
pub use renderer::draw_session;
pub use runtime::{GameSession, SessionAction};
