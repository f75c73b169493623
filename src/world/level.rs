//! Level loading
//!
//! Levels are plain text: one row per line, `-` is a solid tile and any
//! other character is empty space. Rows shorter than the longest row are
//! right-padded with the filler character, never rejected.

use std::fs;
use std::path::Path;
use super::Rect;

/// Character marking a solid platform tile
pub const PLATFORM_TILE: char = '-';
/// Character used to pad short rows
pub const FILLER_TILE: char = '.';

/// Limits to keep a hostile level file from exhausting memory
pub mod limits {
    /// Maximum number of rows in a level
    pub const MAX_ROWS: usize = 1024;
    /// Maximum number of columns in a level
    pub const MAX_COLS: usize = 4096;
    /// Largest tile edge for which a maximum-size level fits in `i32` pixels
    pub const MAX_TILE_SIZE: i32 = 1 << 16;
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    /// The file contained no rows
    Empty,
    /// The grid exceeds `limits`
    TooLarge { rows: usize, cols: usize },
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::Empty => write!(f, "level has no rows"),
            LevelError::TooLarge { rows, cols } => write!(
                f,
                "level too large ({}x{}, max {}x{})",
                cols, rows, limits::MAX_COLS, limits::MAX_ROWS
            ),
        }
    }
}

impl std::error::Error for LevelError {}

/// Rectangular grid of tile characters, every row the same width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: Vec<Vec<char>>,
}

impl TileGrid {
    /// Parse a grid from level text, padding short rows
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        if lines.is_empty() {
            return Err(LevelError::Empty);
        }

        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if lines.len() > limits::MAX_ROWS || width > limits::MAX_COLS {
            return Err(LevelError::TooLarge { rows: lines.len(), cols: width });
        }

        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Vec<char> = line.chars().collect();
                row.resize(width, FILLER_TILE);
                row
            })
            .collect();

        Ok(Self { rows })
    }

    /// Number of columns (all rows share it)
    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied()
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Grid coordinates of every platform tile, row-major
    pub fn platform_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, &c)| c == PLATFORM_TILE)
                .map(move |(col, _)| (col, row))
        })
    }
}

/// A loaded level: the grid plus the world-space data derived from it
#[derive(Debug, Clone)]
pub struct Level {
    pub grid: TileGrid,
    /// Edge length of one tile in pixels
    pub tile_size: i32,
    /// Static platforms, one per solid tile, in row-major grid order
    pub platforms: Vec<Rect>,
}

impl Level {
    pub fn new(grid: TileGrid, tile_size: i32) -> Self {
        let platforms = grid
            .platform_cells()
            .map(|(col, row)| {
                Rect::new(
                    (col as i32).saturating_mul(tile_size),
                    (row as i32).saturating_mul(tile_size),
                    tile_size,
                    tile_size,
                )
            })
            .collect();
        Self { grid, tile_size, platforms }
    }

    /// Total level width in pixels
    pub fn pixel_width(&self) -> i32 {
        (self.grid.width() as i32).saturating_mul(self.tile_size)
    }

    /// Total level height in pixels
    pub fn pixel_height(&self) -> i32 {
        (self.grid.height() as i32).saturating_mul(self.tile_size)
    }
}

/// Load a level from a text file
pub fn load_level<P: AsRef<Path>>(path: P, tile_size: i32) -> Result<Level, LevelError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let grid = TileGrid::parse(&contents)?;
    log::info!(
        "Loaded level {} ({}x{} tiles)",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(Level::new(grid, tile_size))
}

/// Parse level data from bytes (for async loading)
pub fn parse_level_data(bytes: &[u8], tile_size: i32) -> Result<Level, LevelError> {
    let contents = String::from_utf8(bytes.to_vec()).map_err(|e| {
        LevelError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid UTF-8: {}", e),
        ))
    })?;
    let grid = TileGrid::parse(&contents)?;
    Ok(Level::new(grid, tile_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_pads_short_rows() {
        let grid = TileGrid::parse("--\n-\n---\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(1, 1), Some(FILLER_TILE));
        assert_eq!(grid.get(2, 0), Some(FILLER_TILE));
        assert_eq!(grid.get(2, 2), Some('-'));
        assert!(grid.rows().iter().all(|r| r.len() == 3));
    }

    #[test]
    fn test_parse_strips_whitespace_and_keeps_blank_rows() {
        let grid = TileGrid::parse("  -.-  \n\n-").unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows()[0], vec!['-', '.', '-']);
        assert_eq!(grid.rows()[1], vec!['.', '.', '.']);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(matches!(TileGrid::parse(""), Err(LevelError::Empty)));
    }

    #[test]
    fn test_other_characters_are_empty_space() {
        let level = Level::new(TileGrid::parse("x#-@").unwrap(), 50);
        assert_eq!(level.platforms, vec![Rect::new(100, 0, 50, 50)]);
    }

    #[test]
    fn test_platforms_and_extents() {
        let level = Level::new(TileGrid::parse("....\n-..-\n----").unwrap(), 50);
        assert_eq!(level.pixel_width(), 200);
        assert_eq!(level.pixel_height(), 150);
        assert_eq!(level.platforms.len(), 6);
        assert_eq!(level.platforms[0], Rect::new(0, 50, 50, 50));
        assert_eq!(level.platforms[1], Rect::new(150, 50, 50, 50));
        assert_eq!(level.platforms[5], Rect::new(150, 100, 50, 50));
    }

    #[test]
    fn test_huge_tiles_do_not_overflow() {
        let level = Level::new(TileGrid::parse(&"-".repeat(3000)).unwrap(), 1_000_000);
        assert_eq!(level.platforms.len(), 3000);
        assert_eq!(level.platforms[2999].x, i32::MAX);
        assert_eq!(level.pixel_width(), i32::MAX);
        assert_eq!(level.pixel_height(), 1_000_000);
    }

    #[test]
    fn test_max_level_fits_at_max_tile_size() {
        let cols = limits::MAX_COLS as i64 * limits::MAX_TILE_SIZE as i64;
        let rows = limits::MAX_ROWS as i64 * limits::MAX_TILE_SIZE as i64;
        assert!(cols <= i32::MAX as i64);
        assert!(rows <= i32::MAX as i64);
    }

    #[test]
    fn test_load_level_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "...").unwrap();
        writeln!(file, "--").unwrap();
        let level = load_level(file.path(), 50).unwrap();
        assert_eq!(level.grid.width(), 3);
        assert_eq!(level.platforms, vec![Rect::new(0, 50, 50, 50), Rect::new(50, 50, 50, 50)]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_level(dir.path().join("nope.map"), 50);
        assert!(matches!(result, Err(LevelError::IoError(_))));
    }

    #[test]
    fn test_parse_level_data_rejects_bad_utf8() {
        assert!(parse_level_data(&[0xff, 0xfe], 50).is_err());
        assert_eq!(parse_level_data(b"-", 50).unwrap().platforms.len(), 1);
    }
}
