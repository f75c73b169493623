//! Play screen rendering
//!
//! Everything is drawn in screen space: world boxes go through the camera
//! first. Off-screen platforms are skipped.

use macroquad::prelude::*;
use crate::asset::GameAssets;
use crate::world::Rect;
use super::runtime::GameSession;

/// Sky behind the level
pub const SKY_COLOR: Color = Color::new(75.0 / 255.0, 155.0 / 255.0, 200.0 / 255.0, 1.0);

fn on_screen(rect: &Rect, screen_width: i32, screen_height: i32) -> bool {
    rect.right() > 0 && rect.bottom() > 0 && rect.left() < screen_width && rect.top() < screen_height
}

/// Draw one frame of the play screen
pub fn draw_session(session: &GameSession, assets: &GameAssets) {
    clear_background(SKY_COLOR);

    let (sw, sh) = (session.settings.screen_width, session.settings.screen_height);

    for platform in &session.level.platforms {
        let rect = session.camera.apply(platform);
        if on_screen(&rect, sw, sh) {
            assets.block.draw_frame(0, rect.x as f32, rect.y as f32);
        }
    }

    let hero = session.camera.apply(&session.hero.rect);
    assets
        .hero
        .draw_frame(session.hero.animation.current(), hero.x as f32, hero.y as f32);

    if session.settings.debug_log {
        draw_debug_overlay(session);
    }
}

/// Hero state readout in the top-left corner
fn draw_debug_overlay(session: &GameSession) {
    let hero = &session.hero;
    let lines = [
        format!("pos {:.2}, {:.2}", hero.position.0, hero.position.1),
        format!("vel {:.2}, {:.2}", hero.velocity.0, hero.velocity.1),
        format!("grounded {}  frame {}", hero.grounded, hero.animation.current()),
        format!("camera {:?}", session.camera.offset()),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 8.0, 18.0 + i as f32 * 16.0, 16.0, BLACK);
    }
}
