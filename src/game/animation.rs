//! Sprite-strip animation
//!
//! Tracks which frame of a strip is current. The strip knows nothing about
//! textures; the renderer maps the index to a source rectangle.

/// What happens when the strip reaches its last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancePolicy {
    /// Wrap back to frame 0
    Loop,
    /// Stay on the last frame
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStrip {
    frame_count: usize,
    current: usize,
    policy: AdvancePolicy,
    /// Ticks between frame changes (1 = every tick)
    ticks_per_frame: u32,
    ticks: u32,
}

impl AnimationStrip {
    /// A looping strip that advances on every call to `advance`
    pub fn looping(frame_count: usize) -> Self {
        Self {
            frame_count: frame_count.max(1),
            current: 0,
            policy: AdvancePolicy::Loop,
            ticks_per_frame: 1,
            ticks: 0,
        }
    }

    /// A strip that plays once and stops on its last frame
    pub fn once(frame_count: usize, ticks_per_frame: u32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            current: 0,
            policy: AdvancePolicy::Hold,
            ticks_per_frame: ticks_per_frame.max(1),
            ticks: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.policy == AdvancePolicy::Hold && self.current + 1 == self.frame_count
    }

    /// Count one tick, changing frame every `ticks_per_frame` ticks
    pub fn advance(&mut self) {
        self.ticks += 1;
        if self.ticks % self.ticks_per_frame != 0 {
            return;
        }
        self.current = match self.policy {
            AdvancePolicy::Loop => (self.current + 1) % self.frame_count,
            AdvancePolicy::Hold => (self.current + 1).min(self.frame_count - 1),
        };
    }

    #[cfg(test)]
    pub fn reset(&mut self) {
        self.current = 0;
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looping_wraps() {
        let mut strip = AnimationStrip::looping(3);
        let frames: Vec<usize> = (0..5).map(|_| { strip.advance(); strip.current() }).collect();
        assert_eq!(frames, vec![1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_once_holds_last_frame() {
        // 9 frames, one change every 3 ticks
        let mut strip = AnimationStrip::once(9, 3);
        for _ in 0..2 {
            strip.advance();
        }
        assert_eq!(strip.current(), 0);
        strip.advance();
        assert_eq!(strip.current(), 1);
        for _ in 0..100 {
            strip.advance();
        }
        assert_eq!(strip.current(), 8);
        assert!(strip.is_finished());
    }

    #[test]
    fn test_reset() {
        let mut strip = AnimationStrip::looping(3);
        strip.advance();
        strip.reset();
        assert_eq!(strip.current(), 0);
    }
}
