//! Hit testing for clickable TUI elements
//!
//! Tracks rendered widget bounds and maps mouse coordinates to actions

use ratatui::layout::Rect;

/// Identifies a clickable element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Back control in the header
    Back,
    /// Floating scroll-direction button
    ScrollJump,
    /// Send control next to the input box
    Send,
}

/// Tracks clickable regions for hit testing
#[derive(Debug, Default)]
pub struct HitTestRegistry {
    // Later registrations are "on top"; hit testing walks in reverse
    regions: Vec<(Rect, ClickTarget)>,
}

impl HitTestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, rect: Rect, target: ClickTarget) {
        self.regions.push((rect, target));
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickTarget> {
        for (rect, target) in self.regions.iter().rev() {
            if x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height {
                return Some(*target);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_registrations_win() {
        let mut registry = HitTestRegistry::new();
        registry.register(Rect::new(0, 0, 10, 10), ClickTarget::Back);
        registry.register(Rect::new(5, 5, 2, 2), ClickTarget::ScrollJump);

        assert_eq!(registry.hit_test(1, 1), Some(ClickTarget::Back));
        assert_eq!(registry.hit_test(5, 5), Some(ClickTarget::ScrollJump));
        assert_eq!(registry.hit_test(20, 20), None);
    }
}
