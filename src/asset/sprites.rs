//! Sprite sheets
//!
//! A sheet is one image cut into a grid of equally sized frames, read
//! row-major. Sheets are decoded with the `image` crate (macroquad's own
//! loader has no JPEG support) and uploaded as a single texture; frames are
//! drawn as source rectangles of it.

use macroquad::prelude::{
    draw_rectangle, draw_texture_ex, load_file, vec2, Color, DrawTextureParams, FilterMode, Rect,
    Texture2D, WHITE,
};

/// Error type for sprite loading
#[derive(Debug)]
pub enum AssetError {
    /// File could not be read
    Io(String),
    /// File was read but is not a supported image
    Decode(String),
    /// Image is too small to cut into the requested grid
    ValidationError(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Io(msg) => write!(f, "I/O error: {}", msg),
            AssetError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AssetError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::Decode(e.to_string())
    }
}

/// Grid geometry of a sheet, in source pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub columns: u32,
    pub rows: u32,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl SheetLayout {
    /// Cut a `width`x`height` image into `columns`x`rows` frames. Leftover
    /// pixels on the right and bottom edges are ignored.
    pub fn new(width: u32, height: u32, columns: u32, rows: u32) -> Result<Self, AssetError> {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let frame_width = width / columns;
        let frame_height = height / rows;
        if frame_width == 0 || frame_height == 0 {
            return Err(AssetError::ValidationError(format!(
                "{}x{} image cannot hold {}x{} frames",
                width, height, columns, rows
            )));
        }
        Ok(Self { columns, rows, frame_width, frame_height })
    }

    pub fn frame_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Source rectangle of a frame; out-of-range indices wrap
    pub fn source(&self, index: usize) -> (u32, u32, u32, u32) {
        let index = (index % self.frame_count()) as u32;
        let col = index % self.columns;
        let row = index / self.columns;
        (col * self.frame_width, row * self.frame_height, self.frame_width, self.frame_height)
    }
}

/// Decode PNG/JPEG bytes into an RGBA image
pub fn decode_rgba(bytes: &[u8]) -> Result<image::RgbaImage, AssetError> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}

/// A sheet ready for drawing. `texture` is `None` when the image could not
/// be loaded, in which case frames are drawn as solid `placeholder` boxes.
pub struct SpriteSheet {
    pub texture: Option<Texture2D>,
    pub layout: Option<SheetLayout>,
    pub frame_count: usize,
    /// On-screen size of one frame
    pub display_size: (f32, f32),
    pub placeholder: Color,
}

impl SpriteSheet {
    /// Sheet drawn as colored boxes
    pub fn placeholder(frame_count: usize, display_size: (f32, f32), color: Color) -> Self {
        Self {
            texture: None,
            layout: None,
            frame_count: frame_count.max(1),
            display_size,
            placeholder: color,
        }
    }

    /// Upload a decoded image
    pub fn from_image(
        img: &image::RgbaImage,
        columns: u32,
        rows: u32,
        display_size: (f32, f32),
    ) -> Result<Self, AssetError> {
        let (width, height) = img.dimensions();
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(AssetError::ValidationError(format!("{}x{} image is too large", width, height)));
        }
        let layout = SheetLayout::new(width, height, columns, rows)?;
        let texture = Texture2D::from_rgba8(width as u16, height as u16, img.as_raw());
        texture.set_filter(FilterMode::Nearest);
        Ok(Self {
            texture: Some(texture),
            layout: Some(layout),
            frame_count: layout.frame_count(),
            display_size,
            placeholder: WHITE,
        })
    }

    /// Draw a frame with its top-left corner at `(x, y)`
    pub fn draw_frame(&self, index: usize, x: f32, y: f32) {
        let (w, h) = self.display_size;
        match (&self.texture, &self.layout) {
            (Some(texture), Some(layout)) => {
                let (sx, sy, sw, sh) = layout.source(index);
                draw_texture_ex(
                    texture,
                    x,
                    y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(w, h)),
                        source: Some(Rect::new(sx as f32, sy as f32, sw as f32, sh as f32)),
                        ..Default::default()
                    },
                );
            }
            _ => draw_rectangle(x, y, w, h, self.placeholder),
        }
    }
}

/// Read and decode an image file through macroquad's loader (works on WASM)
pub async fn load_rgba(path: &str) -> Result<image::RgbaImage, AssetError> {
    let bytes = load_file(path)
        .await
        .map_err(|e| AssetError::Io(format!("{}: {}", path, e)))?;
    decode_rgba(&bytes)
}
