//! Collision System
//!
//! Axis-separated box collision against static platforms. The caller moves
//! the body along one axis, then asks this module to push it back out of
//! whatever it now overlaps, using the sign of that axis' velocity to pick
//! the side to snap to.
//!
//! There is no swept test: a body moving more than a platform's thickness
//! in one tick can pass straight through it.

use crate::world::Rect;
use super::body::Body;

/// Result of resolving one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    /// Corrected box
    pub rect: Rect,
    /// Landed on top of a platform
    pub grounded: bool,
    /// Hit the underside of a platform
    pub hit_ceiling: bool,
    /// Pushed out of a platform horizontally
    pub hit_wall: bool,
}

impl CollisionResult {
    /// Vertical velocity must be cancelled
    pub fn stops_vertical(&self) -> bool {
        self.grounded || self.hit_ceiling
    }
}

/// Push `rect` out of every platform it overlaps.
///
/// Exactly one of `xvel`/`yvel` is expected to be non-zero; the other axis
/// is passed as 0 to mean "not testing it". Platforms are visited in order
/// and each correction is applied on top of the previous ones, so when two
/// platforms disagree the later one wins.
pub fn collide_rect(rect: Rect, xvel: f32, yvel: f32, platforms: &[Rect]) -> CollisionResult {
    let mut result = CollisionResult {
        rect,
        grounded: false,
        hit_ceiling: false,
        hit_wall: false,
    };

    for platform in platforms {
        if !result.rect.overlaps(platform) {
            continue;
        }
        if xvel > 0.0 {
            result.rect.set_right(platform.left());
            result.hit_wall = true;
        }
        if xvel < 0.0 {
            result.rect.set_left(platform.right());
            result.hit_wall = true;
        }
        if yvel > 0.0 {
            result.rect.set_bottom(platform.top().saturating_sub(1));
            result.grounded = true;
        }
        if yvel < 0.0 {
            result.rect.set_top(platform.bottom());
            result.hit_ceiling = true;
        }
    }

    result
}

/// Resolve one axis for a body, updating its box, grounded flag and
/// vertical velocity. Returns the raw result for callers that need it.
pub fn resolve_collisions(
    body: &mut Body,
    xvel: f32,
    yvel: f32,
    platforms: &[Rect],
    debug_log: bool,
) -> CollisionResult {
    let before = body.rect;
    let result = collide_rect(before, xvel, yvel, platforms);

    body.rect = result.rect;
    if result.grounded {
        body.grounded = true;
    }
    if result.stops_vertical() {
        body.velocity.1 = 0.0;
    }

    if debug_log && result.rect != before {
        log::debug!(
            "COL|vel:({:.1},{:.1})|in:({},{})|out:({},{})|g:{}|ceil:{}|wall:{}",
            xvel, yvel,
            before.x, before.y,
            result.rect.x, result.rect.y,
            if result.grounded { "Y" } else { "N" },
            if result.hit_ceiling { "Y" } else { "N" },
            if result.hit_wall { "Y" } else { "N" },
        );
    }

    result
}

/// True if the box rests on a platform: horizontally over it with the
/// bottom edge at most one pixel above its top. This is the position the
/// downward correction leaves a landed body in.
pub fn supported(rect: &Rect, platforms: &[Rect]) -> bool {
    platforms.iter().any(|platform| {
        rect.overlaps_x(platform)
            && rect.bottom() >= platform.top().saturating_sub(1)
            && rect.bottom() <= platform.top()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::body::Motion;

    const TILE: i32 = 50;

    fn tile(col: i32, row: i32) -> Rect {
        Rect::new(col * TILE, row * TILE, TILE, TILE)
    }

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(x, y, 40, 60, Motion { jump_speed: -800.0, run_speed: 100.0 })
    }

    #[test]
    fn test_landing_on_platform() {
        // Platform top at 400, body bottom overlapping it
        let platforms = [Rect::new(0, 400, 50, 50)];
        let mut body = body_at(0.0, 345.0);
        body.grounded = false;
        body.velocity.1 = 50.0;

        resolve_collisions(&mut body, 0.0, 50.0, &platforms, false);

        assert_eq!(body.rect.bottom(), 399);
        assert!(body.grounded);
        assert_eq!(body.velocity.1, 0.0);
    }

    #[test]
    fn test_bottom_above_every_overlapped_platform() {
        let platforms = [tile(0, 8), tile(1, 8), tile(2, 8)];
        let rect = Rect::new(30, 360, 40, 60);
        let overlapped: Vec<Rect> = platforms.iter().copied().filter(|p| rect.overlaps(p)).collect();
        assert_eq!(overlapped.len(), 2);

        let result = collide_rect(rect, 0.0, 120.0, &platforms);
        for p in overlapped {
            assert!(result.rect.bottom() <= p.top());
        }
        assert!(result.grounded);
    }

    #[test]
    fn test_head_bump() {
        let platforms = [tile(0, 2)];
        let mut body = body_at(5.0, 120.0);
        body.velocity.1 = -800.0;

        let result = resolve_collisions(&mut body, 0.0, -800.0, &platforms, false);

        assert_eq!(body.rect.top(), 150);
        assert!(result.hit_ceiling);
        assert!(!result.grounded);
        assert_eq!(body.velocity.1, 0.0);
    }

    #[test]
    fn test_walls() {
        let platforms = [tile(2, 0)];

        let moving_right = collide_rect(Rect::new(80, 0, 40, 40), 100.0, 0.0, &platforms);
        assert_eq!(moving_right.rect.right(), 100);
        assert!(moving_right.hit_wall);

        let moving_left = collide_rect(Rect::new(140, 0, 40, 40), -100.0, 0.0, &platforms);
        assert_eq!(moving_left.rect.left(), 150);
        assert!(moving_left.hit_wall);
    }

    #[test]
    fn test_horizontal_resolution_keeps_vertical_velocity() {
        let platforms = [tile(2, 0)];
        let mut body = body_at(70.0, 0.0);
        body.velocity = (100.0, 30.0);
        resolve_collisions(&mut body, 100.0, 0.0, &platforms, false);
        assert_eq!(body.rect.right(), 100);
        assert_eq!(body.velocity.1, 30.0);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let platforms = [tile(0, 8), tile(1, 8), tile(3, 7)];
        let cases = [
            (Rect::new(10, 370, 40, 60), 0.0, 90.0),
            (Rect::new(130, 340, 40, 40), 100.0, 0.0),
            (Rect::new(185, 345, 40, 40), -100.0, 0.0),
            (Rect::new(10, 420, 40, 40), 0.0, -300.0),
        ];
        for (rect, xvel, yvel) in cases {
            let first = collide_rect(rect, xvel, yvel, &platforms);
            let second = collide_rect(first.rect, xvel, yvel, &platforms);
            assert_eq!(second.rect, first.rect);
            assert!(!second.grounded && !second.hit_ceiling && !second.hit_wall);
        }
    }

    #[test]
    fn test_later_platform_wins() {
        // Second platform sits higher, so its correction lands last
        let platforms = [Rect::new(0, 400, 50, 50), Rect::new(30, 390, 50, 50)];
        let result = collide_rect(Rect::new(20, 370, 20, 40), 0.0, 10.0, &platforms);
        assert_eq!(result.rect.bottom(), 389);
    }

    #[test]
    fn test_zero_velocity_does_nothing() {
        let platforms = [tile(0, 0)];
        let rect = Rect::new(10, 10, 10, 10);
        let result = collide_rect(rect, 0.0, 0.0, &platforms);
        assert_eq!(result.rect, rect);
        assert!(!result.grounded);
    }

    #[test]
    fn test_corrections_at_world_edges_saturate() {
        let platforms = [Rect::new(0, i32::MIN, 50, 50)];
        let result = collide_rect(Rect::new(0, i32::MIN, 40, 60), 0.0, 10.0, &platforms);
        assert_eq!(result.rect.y, i32::MIN);
        assert!(result.grounded);
        assert!(!supported(&result.rect, &platforms));

        let platforms = [Rect::new(i32::MAX - 20, 0, 50, 50)];
        let result = collide_rect(Rect::new(i32::MAX - 30, 0, 40, 40), 100.0, 0.0, &platforms);
        assert_eq!(result.rect.right(), i32::MAX - 20);
    }

    #[test]
    fn test_supported() {
        let platforms = [tile(0, 8)];
        // Resting one pixel above
        assert!(supported(&Rect::new(0, 339, 40, 60), &platforms));
        // Flush contact
        assert!(supported(&Rect::new(0, 340, 40, 60), &platforms));
        // Two pixels above
        assert!(!supported(&Rect::new(0, 338, 40, 60), &platforms));
        // Past the platform's edge
        assert!(!supported(&Rect::new(50, 339, 40, 60), &platforms));
    }
}
