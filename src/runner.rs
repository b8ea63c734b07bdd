//! Application Runner Module
//!
//! Owns logging setup and runtime bring-up, then hands control to the
//! terminal screen.

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Delay between a sent message and its scripted reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Shared application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
    /// Delay before the scripted reply fires
    pub reply_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            verbose: false,
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }
}

/// Run the chat screen.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized or the event loop
/// fails.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    use std::fs::File;

    // The screen owns the terminal in raw mode, so logs go to a file
    let log_file = File::create("/tmp/nutrino-chat.log")?;
    let default_filter = if config.verbose {
        "trace"
    } else if config.debug {
        "debug"
    } else {
        "info,nutrino_chat=debug"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(crate::tui::run(config))
}
