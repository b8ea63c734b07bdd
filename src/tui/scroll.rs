//! Scroll position tracking for the floating jump button.

/// Offset past which the jump button appears, in content lines.
pub const SCROLL_BUTTON_THRESHOLD: usize = 300;

/// Derives the jump-button state from consecutive scroll offsets.
///
/// Pure function of the samples it is fed: "scrolling up" means the offset
/// decreased since the last sample, "button visible" means the offset exceeds
/// the fixed threshold. There is no hysteresis band; flapping near the
/// threshold only affects a cosmetic control.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    last_offset: usize,
    scrolling_up: bool,
    button_visible: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the current scroll offset.
    pub fn observe(&mut self, offset: usize) {
        self.scrolling_up = offset < self.last_offset;
        self.last_offset = offset;
        self.button_visible = offset > SCROLL_BUTTON_THRESHOLD;
    }

    /// True when the last sample moved toward the top.
    pub fn scrolling_up(&self) -> bool {
        self.scrolling_up
    }

    /// True when the jump button should be shown.
    pub fn button_visible(&self) -> bool {
        self.button_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_direction_and_visibility_from_offsets() {
        let mut tracker = ScrollTracker::new();
        let offsets = [100usize, 50, 200, 600];
        let mut up = Vec::new();
        let mut visible = Vec::new();
        for offset in offsets {
            tracker.observe(offset);
            up.push(tracker.scrolling_up());
            visible.push(tracker.button_visible());
        }
        assert_eq!(up, vec![false, true, false, false]);
        assert_eq!(visible, vec![false, false, false, true]);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(SCROLL_BUTTON_THRESHOLD);
        assert!(!tracker.button_visible());
        tracker.observe(SCROLL_BUTTON_THRESHOLD + 1);
        assert!(tracker.button_visible());
    }
}
