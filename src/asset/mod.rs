//! Image assets
//!
//! Sprite sheets are decoded from the data directory at startup and cut
//! into frames on the fly when drawn.

mod library;
pub mod sprites;

pub use library::*;
