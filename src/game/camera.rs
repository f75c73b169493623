//! Follow camera
//!
//! The camera state is a rect whose size is the whole level and whose
//! origin is the (non-positive) offset added to world coordinates before
//! drawing. It follows a target box and never scrolls past the level edges.

use crate::world::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// x/y: viewport offset, w/h: level extent in pixels
    pub state: Rect,
    pub screen_width: i32,
    pub screen_height: i32,
    /// Screen size is divided by this to place the target
    pub divisor: f32,
}

impl Camera {
    pub fn new(level_width: i32, level_height: i32, screen_width: i32, screen_height: i32, divisor: f32) -> Self {
        Self {
            state: Rect::new(0, 0, level_width, level_height),
            screen_width,
            screen_height,
            divisor,
        }
    }

    /// Current viewport offset
    pub fn offset(&self) -> (i32, i32) {
        (self.state.x, self.state.y)
    }

    /// Recompute the offset so the target sits at screen/divisor
    pub fn update(&mut self, target: &Rect) {
        let desired_x = -(target.x as f32) + self.screen_width as f32 / self.divisor;
        let desired_y = -(target.y as f32) + self.screen_height as f32 / self.divisor;

        self.state.x = clamp_axis(desired_x, self.state.w, self.screen_width);
        self.state.y = clamp_axis(desired_y, self.state.h, self.screen_height);
    }

    /// Box translated into screen space
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translated(self.state.x, self.state.y)
    }
}

/// Clamp one axis to [-(extent - screen), 0]. A level no larger than the
/// screen has an empty range, so it is pinned at 0 instead.
fn clamp_axis(desired: f32, extent: i32, screen: i32) -> i32 {
    if extent <= screen {
        return 0;
    }
    let lower = -(extent - screen) as f32;
    desired.min(0.0).max(lower).trunc() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        // 40x20 tiles of 50px on a 750x500 screen
        Camera::new(2000, 1000, 750, 500, 2.24)
    }

    #[test]
    fn test_off_center_framing() {
        let mut cam = camera();
        cam.update(&Rect::new(1000, 500, 40, 60));
        // -1000 + 750/2.24 = -665.17..., -500 + 500/2.24 = -276.78...
        assert_eq!(cam.offset(), (-665, -276));
    }

    #[test]
    fn test_clamped_at_level_origin() {
        let mut cam = camera();
        cam.update(&Rect::new(50, 100, 40, 60));
        assert_eq!(cam.offset(), (0, 0));
    }

    #[test]
    fn test_clamped_at_level_end() {
        let mut cam = camera();
        cam.update(&Rect::new(1990, 990, 10, 10));
        assert_eq!(cam.offset(), (-1250, -500));
    }

    #[test]
    fn test_offset_in_bounds_for_any_target() {
        let mut cam = camera();
        for x in (0..=2000).step_by(37) {
            for y in (0..=1000).step_by(23) {
                cam.update(&Rect::new(x, y, 40, 60));
                let (ox, oy) = cam.offset();
                assert!((-1250..=0).contains(&ox), "x offset {} for target {}", ox, x);
                assert!((-500..=0).contains(&oy), "y offset {} for target {}", oy, y);
            }
        }
    }

    #[test]
    fn test_small_level_is_pinned() {
        let mut cam = Camera::new(300, 200, 750, 500, 2.24);
        cam.update(&Rect::new(250, 150, 40, 60));
        assert_eq!(cam.offset(), (0, 0));
    }

    #[test]
    fn test_apply_translates() {
        let mut cam = camera();
        cam.update(&Rect::new(1000, 500, 40, 60));
        let on_screen = cam.apply(&Rect::new(1000, 500, 40, 60));
        assert_eq!(on_screen, Rect::new(335, 224, 40, 60));
        // Extent is untouched by updates
        assert_eq!((cam.state.w, cam.state.h), (2000, 1000));
    }
}
