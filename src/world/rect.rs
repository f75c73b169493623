//! Integer rectangle used for collision boxes, platforms and the camera
//!
//! Far edges are exclusive: a rect at x=0 with w=50 covers columns 0..50,
//! so `right()` is 50 and a neighbour starting at x=50 does not overlap it.
//! Edge arithmetic saturates at the `i32` bounds.

/// Axis-aligned rectangle in world pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Move so the left edge sits at `x`
    pub fn set_left(&mut self, x: i32) {
        self.x = x;
    }

    /// Move so the right edge sits at `x`
    pub fn set_right(&mut self, x: i32) {
        self.x = x.saturating_sub(self.w);
    }

    /// Move so the top edge sits at `y`
    pub fn set_top(&mut self, y: i32) {
        self.y = y;
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: i32) {
        self.y = y.saturating_sub(self.h);
    }

    /// Standard AABB overlap test. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True if the horizontal spans share at least one column
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }

    /// Copy translated by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.w, self.h)
    }
}
