//! Portal 2D: a small side-scrolling platformer
//!
//! A robot runs and jumps across a tile level, colliding with static
//! blocks, while a clamped camera follows it. The simulation runs at a
//! fixed tick rate; rendering happens once per tick.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod asset;
mod game;
mod input;
mod settings;
mod title;
mod world;

use macroquad::prelude::*;
use app::AppState;
use asset::{GameAssets, DATA_DIR};
use game::{GameSession, SessionAction};
use settings::{load_settings_or_default, GameSettings, SETTINGS_PATH};
use world::{Level, LevelError};

fn window_conf() -> Conf {
    // Runs before the logger exists, so failures here are silent;
    // main() loads the file again and reports problems.
    let settings = load_settings_or_default(SETTINGS_PATH);
    Conf {
        window_title: format!("Portal 2D v{}", VERSION),
        window_width: settings.screen_width,
        window_height: settings.screen_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_game_level(settings: &GameSettings) -> Result<Level, LevelError> {
    let path = std::path::Path::new(DATA_DIR).join(&settings.level_file);
    world::load_level(path, settings.tile_size)
}

#[cfg(target_arch = "wasm32")]
async fn load_game_level(settings: &GameSettings) -> Result<Level, LevelError> {
    let path = format!("{}/{}", DATA_DIR, settings.level_file);
    let bytes = load_file(&path).await.map_err(|e| {
        LevelError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))
    })?;
    world::parse_level_data(&bytes, settings.tile_size)
}

/// Wait out the rest of a fixed-length frame
fn limit_frame(frame_start: f64, target_frame_time: f64) {
    let remaining = target_frame_time - (get_time() - frame_start);
    if remaining <= 0.0 {
        return;
    }

    // Native: sleep for the bulk, then spin for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: no thread::sleep, spin only
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {}
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== Portal 2D v{} ===", VERSION);

    #[cfg(not(target_arch = "wasm32"))]
    {
        if !std::path::Path::new(SETTINGS_PATH).exists() {
            match settings::save_settings(&GameSettings::default(), SETTINGS_PATH) {
                Ok(()) => log::info!("Wrote default settings to {}", SETTINGS_PATH),
                Err(e) => log::warn!("Could not write default settings: {}", e),
            }
        }
    }
    let settings = load_settings_or_default(SETTINGS_PATH);

    let level = match load_game_level(&settings).await {
        Ok(level) => level,
        Err(e) => {
            log::error!("Failed to load level {}: {}", settings.level_file, e);
            return;
        }
    };

    let assets = GameAssets::load(
        DATA_DIR,
        settings.tile_size,
        (settings.screen_width, settings.screen_height),
    )
    .await;

    let tick_time = settings.tick_seconds() as f64;
    let session = GameSession::new(settings, level, assets.hero_size);
    let mut app = AppState::new(session, assets);

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        if app.update() == SessionAction::Quit {
            break;
        }
        app.draw();

        limit_frame(frame_start, tick_time);
        next_frame().await;
    }

    log::info!("Exiting");
}
