//! Play session
//!
//! Owns everything the play screen simulates: settings, the loaded level,
//! the hero and the camera. One `tick` is one fixed simulation step.

use crate::input::{Action, InputEvent, InputState};
use crate::settings::GameSettings;
use crate::world::Level;
use super::body::{Body, Motion};
use super::camera::Camera;
use super::stepper::{step_body, StepParams};

/// What the main loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Continue,
    Quit,
}

pub struct GameSession {
    pub settings: GameSettings,
    pub level: Level,
    pub hero: Body,
    pub camera: Camera,
    /// Hero box size, kept for resets
    hero_size: (i32, i32),
    params: StepParams,
    /// Ticks simulated since the last reset
    pub ticks: u64,
}

impl GameSession {
    pub fn new(settings: GameSettings, level: Level, hero_size: (i32, i32)) -> Self {
        let hero = spawn_hero(&settings, hero_size);
        let mut camera = Camera::new(
            level.pixel_width(),
            level.pixel_height(),
            settings.screen_width,
            settings.screen_height,
            settings.camera_divisor,
        );
        camera.update(&hero.rect);
        let params = StepParams::from_settings(&settings);

        log::info!(
            "Session started: {} platforms, level {}x{} px, hero {}x{}",
            level.platforms.len(),
            level.pixel_width(),
            level.pixel_height(),
            hero_size.0,
            hero_size.1
        );

        Self {
            settings,
            level,
            hero,
            camera,
            hero_size,
            params,
            ticks: 0,
        }
    }

    /// Replace the hero with a fresh one at the spawn point
    pub fn reset(&mut self) {
        self.hero = spawn_hero(&self.settings, self.hero_size);
        self.camera.update(&self.hero.rect);
        self.ticks = 0;
        log::info!("Level reset");
    }

    /// Route one input event. `held` must already reflect the event.
    pub fn handle_event(&mut self, event: InputEvent, held: &InputState) -> SessionAction {
        match event {
            InputEvent::Pressed(Action::Quit) => return SessionAction::Quit,
            InputEvent::Pressed(Action::ResetLevel) => {
                self.reset();
                // Directions held through a reset keep driving the new hero
                for action in [Action::MoveLeft, Action::MoveRight] {
                    if held.action_down(action) {
                        self.hero.apply_input(action);
                    }
                }
            }
            InputEvent::Pressed(action) => self.hero.apply_input(action),
            InputEvent::Released(action) => self.hero.clear_input(action, held),
        }
        SessionAction::Continue
    }

    /// Advance the simulation by one tick and re-aim the camera
    pub fn tick(&mut self) {
        step_body(&mut self.hero, &self.level.platforms, &self.params);
        self.camera.update(&self.hero.rect);
        self.ticks += 1;
    }
}

fn spawn_hero(settings: &GameSettings, size: (i32, i32)) -> Body {
    Body::new(
        settings.spawn_x,
        settings.spawn_y,
        size.0,
        size.1,
        Motion {
            jump_speed: settings.jump_speed,
            run_speed: settings.run_speed,
        },
    )
}
