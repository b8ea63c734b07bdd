//! Terminal chat screen
//!
//! A single scripted conversation: the user types, a hard-coded timer answers
//! with one of five canned responses. Everything lives in memory for the
//! lifetime of the screen.

mod app;
mod theme;
mod ui;

pub mod animation;
pub mod event;
pub mod hit_test;
pub mod scroll;
pub mod widgets;

pub use app::{ChatApp, ChatSession};
pub use theme::Theme;

use anyhow::Result;

use crate::runner::AppConfig;

/// Run the chat screen until the user leaves it
pub async fn run(config: AppConfig) -> Result<()> {
    let mut app = ChatApp::new(config)?;
    app.run().await
}
