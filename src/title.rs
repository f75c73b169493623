//! Title screen
//!
//! Plays the background sheet once (one frame every few ticks, then holds
//! the last frame) and offers three menu entries chosen with the keyboard.

use macroquad::prelude::*;
use crate::asset::GameAssets;
use crate::game::AnimationStrip;

/// Ticks each background frame stays on screen
pub const TICKS_PER_FRAME: u32 = 3;

/// Lines shown by the About entry
pub const CREDITS: [&str; 5] = [
    "Portal 2D",
    "Authors:",
    "Damir Sagitov",
    "Mikhail Leontyev",
    "Sergey Golyshev",
];

const CREDITS_POS: (f32, f32) = (400.0, 200.0);
const CREDITS_LINE_HEIGHT: f32 = 20.0;
const CREDITS_FONT_SIZE: f32 = 30.0;
const HIGHLIGHT_COLOR: Color = Color::new(1.0, 0.85, 0.2, 1.0);
const LABEL_COLOR: Color = Color::new(0.95, 0.95, 0.95, 1.0);

/// Menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    About,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::Start, MenuAction::About, MenuAction::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Start => "Start",
            MenuAction::About => "About",
            MenuAction::Exit => "Exit",
        }
    }

    /// Where the entry's button sits on the background art (x, y, w, h)
    pub fn button_rect(&self) -> (f32, f32, f32, f32) {
        match self {
            MenuAction::Start => (72.0, 97.0, 203.0, 61.0),
            MenuAction::About => (74.0, 195.0, 193.0, 60.0),
            MenuAction::Exit => (70.0, 285.0, 201.0, 61.0),
        }
    }
}

/// What the app should do after the title screen handled a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleOutcome {
    Stay,
    Play,
    Quit,
}

pub struct TitleScreen {
    pub background: AnimationStrip,
    selected: usize,
    pub show_about: bool,
}

impl TitleScreen {
    pub fn new(frame_count: usize) -> Self {
        Self {
            background: AnimationStrip::once(frame_count, TICKS_PER_FRAME),
            selected: 0,
            show_about: false,
        }
    }

    pub fn selected(&self) -> MenuAction {
        MenuAction::ALL[self.selected]
    }

    pub fn tick(&mut self) {
        self.background.advance();
    }

    /// Move the selection or pick an entry
    pub fn handle_key(&mut self, key: KeyCode) -> Option<MenuAction> {
        let count = MenuAction::ALL.len();
        match key {
            KeyCode::Up | KeyCode::W => {
                self.selected = (self.selected + count - 1) % count;
                None
            }
            KeyCode::Down | KeyCode::S => {
                self.selected = (self.selected + 1) % count;
                None
            }
            KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space => Some(self.selected()),
            KeyCode::Escape => Some(MenuAction::Exit),
            _ => None,
        }
    }

    pub fn activate(&mut self, action: MenuAction) -> TitleOutcome {
        match action {
            MenuAction::Start => TitleOutcome::Play,
            MenuAction::About => {
                self.show_about = true;
                TitleOutcome::Stay
            }
            MenuAction::Exit => TitleOutcome::Quit,
        }
    }
}

/// Draw the title screen
pub fn draw_title(title: &TitleScreen, assets: &GameAssets) {
    clear_background(BLACK);
    assets.menu.draw_frame(title.background.current(), 0.0, 0.0);

    // Labels only when the art (which carries its own) is missing
    let labelled = assets.menu.texture.is_none();

    for action in MenuAction::ALL {
        let (x, y, w, h) = action.button_rect();
        if labelled {
            draw_text(action.label(), x + 16.0, y + h * 0.65, 32.0, LABEL_COLOR);
        }
        if action == title.selected() {
            draw_rectangle_lines(x - 4.0, y - 4.0, w + 8.0, h + 8.0, 4.0, HIGHLIGHT_COLOR);
        }
    }

    if title.show_about {
        let (x, y) = CREDITS_POS;
        for (i, line) in CREDITS.iter().enumerate() {
            let baseline = y + i as f32 * CREDITS_LINE_HEIGHT + CREDITS_LINE_HEIGHT;
            draw_text(line, x, baseline, CREDITS_FONT_SIZE, BLACK);
        }
    }
}
