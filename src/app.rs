//! Application state
//!
//! Two screens: the title menu and the play session. Both stay alive for
//! the whole run; the app only switches which one receives input.

use macroquad::prelude::{get_keys_pressed, KeyCode};
use crate::asset::GameAssets;
use crate::game::{draw_session, GameSession, SessionAction};
use crate::input::{InputEvent, InputState};
use crate::title::{draw_title, TitleOutcome, TitleScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
}

pub struct AppState {
    pub screen: Screen,
    pub title: TitleScreen,
    pub session: GameSession,
    pub input: InputState,
    pub assets: GameAssets,
}

impl AppState {
    pub fn new(session: GameSession, assets: GameAssets) -> Self {
        Self {
            screen: Screen::Title,
            title: TitleScreen::new(assets.menu.frame_count),
            session,
            input: InputState::new(),
            assets,
        }
    }

    /// Poll input and advance the active screen by one tick
    pub fn update(&mut self) -> SessionAction {
        match self.screen {
            Screen::Title => {
                let keys: Vec<KeyCode> = get_keys_pressed().into_iter().collect();
                self.update_title(&keys)
            }
            Screen::Playing => {
                let events = self.input.poll();
                self.update_play(&events)
            }
        }
    }

    /// Title screen tick with this frame's key presses
    pub fn update_title(&mut self, keys: &[KeyCode]) -> SessionAction {
        for &key in keys {
            let Some(action) = self.title.handle_key(key) else {
                continue;
            };
            match self.title.activate(action) {
                TitleOutcome::Stay => {}
                TitleOutcome::Play => {
                    log::info!("Starting game");
                    self.input.clear();
                    self.screen = Screen::Playing;
                    return SessionAction::Continue;
                }
                TitleOutcome::Quit => return SessionAction::Quit,
            }
        }
        self.title.tick();
        SessionAction::Continue
    }

    /// Play screen tick with events already recorded in `self.input`
    pub fn update_play(&mut self, events: &[InputEvent]) -> SessionAction {
        for &event in events {
            if self.session.handle_event(event, &self.input) == SessionAction::Quit {
                return SessionAction::Quit;
            }
        }
        self.session.tick();
        SessionAction::Continue
    }

    pub fn draw(&self) {
        match self.screen {
            Screen::Title => draw_title(&self.title, &self.assets),
            Screen::Playing => draw_session(&self.session, &self.assets),
        }
    }
}
