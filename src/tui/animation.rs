//! Animation timing for cosmetic transitions.
//!
//! Everything here is a pure function of elapsed time so the sequencer can be
//! driven by the event-loop tick and tested without a terminal. None of it
//! touches conversation state.

use std::time::Duration;

/// Entry fade/slide duration on mount.
pub const ENTRY_FADE: Duration = Duration::from_millis(800);
/// One step of the typing-dot sequence.
pub const TYPING_STEP: Duration = Duration::from_millis(300);
/// Full typing loop: three dots lit in sequence, then dimmed in sequence.
pub const TYPING_PERIOD: Duration = Duration::from_millis(1800);
/// Scroll-button cross-fade duration.
pub const BUTTON_FADE: Duration = Duration::from_millis(200);

/// Ease-out progress of the mount transition, `0.0..=1.0`.
pub fn entry_progress(elapsed: Duration) -> f32 {
    let t = (elapsed.as_secs_f32() / ENTRY_FADE.as_secs_f32()).min(1.0);
    // quadratic ease-out
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Which typing dots are lit at a point in the loop.
///
/// The loop lights dot 1, 2, 3 one step apart, then dims them in the same
/// order, wrapping every [`TYPING_PERIOD`].
pub fn typing_dots(elapsed: Duration) -> [bool; 3] {
    let step = (elapsed.as_millis() / TYPING_STEP.as_millis()) % 6;
    match step {
        0 => [true, false, false],
        1 => [true, true, false],
        2 => [true, true, true],
        3 => [false, true, true],
        4 => [false, false, true],
        _ => [false, false, false],
    }
}

/// Linear cross-fade toward a visibility target.
///
/// Ticked from the event loop with the frame delta; rises and falls over
/// [`BUTTON_FADE`].
#[derive(Debug, Default)]
pub struct CrossFade {
    value: f32,
}

impl CrossFade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: Duration, visible: bool) {
        let step = dt.as_secs_f32() / BUTTON_FADE.as_secs_f32();
        self.value = if visible {
            (self.value + step).min(1.0)
        } else {
            (self.value - step).max(0.0)
        };
    }

    /// Current opacity, `0.0..=1.0`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// True while any part of the control should be drawn.
    pub fn is_visible(&self) -> bool {
        self.value > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_progress_saturates_at_one() {
        assert_eq!(entry_progress(Duration::ZERO), 0.0);
        assert_eq!(entry_progress(Duration::from_millis(800)), 1.0);
        assert_eq!(entry_progress(Duration::from_secs(5)), 1.0);
        let mid = entry_progress(Duration::from_millis(400));
        assert!(mid > 0.5 && mid < 1.0, "ease-out is past halfway at t/2");
    }

    #[test]
    fn typing_dots_cycle_in_sequence() {
        let at = |ms| typing_dots(Duration::from_millis(ms));
        assert_eq!(at(0), [true, false, false]);
        assert_eq!(at(300), [true, true, false]);
        assert_eq!(at(600), [true, true, true]);
        assert_eq!(at(900), [false, true, true]);
        assert_eq!(at(1200), [false, false, true]);
        assert_eq!(at(1500), [false, false, false]);
        // wraps at the full period
        assert_eq!(at(1800), at(0));
    }

    #[test]
    fn cross_fade_reaches_its_target() {
        let mut fade = CrossFade::new();
        assert!(!fade.is_visible());

        for _ in 0..10 {
            fade.tick(Duration::from_millis(25), true);
        }
        assert_eq!(fade.value(), 1.0);

        for _ in 0..10 {
            fade.tick(Duration::from_millis(25), false);
        }
        assert_eq!(fade.value(), 0.0);
    }
}
