//! Navigation seam.
//!
//! The screen's only navigation contract is a single back call with no
//! arguments and no result. The terminal app has no screen stack behind the
//! chat, so its navigator asks the event loop to shut down instead.

/// Back-navigation contract.
pub trait Navigator {
    fn back(&mut self);
}
