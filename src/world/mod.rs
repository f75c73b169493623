//! World module - tile grid levels and the static geometry derived from them
//!
//! A level is a flat grid of characters. Each solid tile becomes one
//! static platform rectangle; the grid size gives the scrollable extent.

mod level;
mod rect;

pub use level::*;
pub use rect::Rect;
