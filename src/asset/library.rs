//! The game's image assets
//!
//! Three images live in the data directory: the hero's run cycle, the
//! platform block and the animated title background. Any of them may be
//! missing; the game then draws colored boxes in their place.

use macroquad::prelude::Color;
use super::sprites::{load_rgba, SpriteSheet};

/// Directory holding levels, settings and images
pub const DATA_DIR: &str = "data";

pub const HERO_SHEET: &str = "robot_steps.png";
pub const BLOCK_TEXTURE: &str = "black_block.jpg";
pub const MENU_SHEET: &str = "menu_sheet.png";

/// Run-cycle frames laid out in one row
pub const HERO_COLUMNS: u32 = 3;
/// The hero sheet is drawn at a third of its size
pub const HERO_SHRINK: u32 = 3;
/// Title background grid (columns, rows)
pub const MENU_GRID: (u32, u32) = (3, 3);

/// Hero box size used when the sheet is missing
pub const FALLBACK_HERO_SIZE: (i32, i32) = (40, 60);

const HERO_PLACEHOLDER: Color = Color::new(0.85, 0.85, 0.9, 1.0);
const BLOCK_PLACEHOLDER: Color = Color::new(0.08, 0.08, 0.1, 1.0);
const MENU_PLACEHOLDER: Color = Color::new(0.16, 0.16, 0.2, 1.0);

/// On-screen hero frame size for a sheet of the given pixel size
pub fn hero_frame_size(sheet_width: u32, sheet_height: u32) -> (i32, i32) {
    let shrunk_width = sheet_width / HERO_SHRINK;
    let shrunk_height = sheet_height / HERO_SHRINK;
    ((shrunk_width / HERO_COLUMNS) as i32, shrunk_height as i32)
}

pub struct GameAssets {
    pub hero: SpriteSheet,
    pub block: SpriteSheet,
    pub menu: SpriteSheet,
    /// Hero box size, taken from the sheet so collisions match the sprite
    pub hero_size: (i32, i32),
}

impl GameAssets {
    /// Assets with no images at all
    pub fn placeholders(tile_size: i32, screen: (i32, i32)) -> Self {
        let hero_size = FALLBACK_HERO_SIZE;
        Self {
            hero: SpriteSheet::placeholder(
                HERO_COLUMNS as usize,
                (hero_size.0 as f32, hero_size.1 as f32),
                HERO_PLACEHOLDER,
            ),
            block: SpriteSheet::placeholder(1, (tile_size as f32, tile_size as f32), BLOCK_PLACEHOLDER),
            menu: SpriteSheet::placeholder(
                (MENU_GRID.0 * MENU_GRID.1) as usize,
                (screen.0 as f32, screen.1 as f32),
                MENU_PLACEHOLDER,
            ),
            hero_size,
        }
    }

    /// Load every image from `data_dir`, keeping placeholders for failures
    pub async fn load(data_dir: &str, tile_size: i32, screen: (i32, i32)) -> Self {
        let mut assets = Self::placeholders(tile_size, screen);

        match load_rgba(&format!("{}/{}", data_dir, HERO_SHEET)).await {
            Ok(img) => {
                let size = hero_frame_size(img.width(), img.height());
                let display = (size.0 as f32, size.1 as f32);
                match SpriteSheet::from_image(&img, HERO_COLUMNS, 1, display) {
                    Ok(sheet) => {
                        assets.hero = sheet;
                        assets.hero_size = size;
                        log::info!("Loaded hero sheet ({}x{} per frame)", size.0, size.1);
                    }
                    Err(e) => log::warn!("Unusable hero sheet: {}", e),
                }
            }
            Err(e) => log::warn!("Failed to load hero sheet: {}, using placeholder", e),
        }

        match load_rgba(&format!("{}/{}", data_dir, BLOCK_TEXTURE)).await {
            Ok(img) => {
                let display = (tile_size as f32, tile_size as f32);
                match SpriteSheet::from_image(&img, 1, 1, display) {
                    Ok(sheet) => assets.block = sheet,
                    Err(e) => log::warn!("Unusable block texture: {}", e),
                }
            }
            Err(e) => log::warn!("Failed to load block texture: {}, using placeholder", e),
        }

        match load_rgba(&format!("{}/{}", data_dir, MENU_SHEET)).await {
            Ok(img) => {
                let display = (screen.0 as f32, screen.1 as f32);
                match SpriteSheet::from_image(&img, MENU_GRID.0, MENU_GRID.1, display) {
                    Ok(sheet) => assets.menu = sheet,
                    Err(e) => log::warn!("Unusable title sheet: {}", e),
                }
            }
            Err(e) => log::warn!("Failed to load title sheet: {}, using placeholder", e),
        }

        assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_frame_size() {
        // 3 frames of 120x180 shrunk to a third
        assert_eq!(hero_frame_size(360, 180), (40, 60));
        // Integer division at both steps
        assert_eq!(hero_frame_size(400, 200), (44, 66));
    }
}
