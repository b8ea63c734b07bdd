//! Haptic feedback seam.
//!
//! The screen fires a light impact on send and a medium impact on back.
//! A terminal has no haptics engine, so the default implementation rings
//! the bell best-effort. Calls are fire-and-forget and never fail.

use std::io::{stdout, Write};

/// Qualitative impact strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Light,
    Medium,
}

/// Fire-and-forget haptic feedback.
pub trait Haptics {
    fn impact(&mut self, intensity: Intensity);
}

/// Terminal bell haptics.
#[derive(Debug, Default)]
pub struct TerminalHaptics;

impl Haptics for TerminalHaptics {
    fn impact(&mut self, intensity: Intensity) {
        tracing::trace!(?intensity, "haptic impact");
        let mut out = stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording(Vec<Intensity>);

    impl Haptics for Recording {
        fn impact(&mut self, intensity: Intensity) {
            self.0.push(intensity);
        }
    }

    #[test]
    fn impacts_are_observed_in_order() {
        let mut haptics = Recording::default();
        haptics.impact(Intensity::Light);
        haptics.impact(Intensity::Medium);
        assert_eq!(haptics.0, vec![Intensity::Light, Intensity::Medium]);
    }
}
