//! Nutrino Chat - scripted AI health assistant for the terminal
//!
//! Launches the chat screen in the current terminal.

use clap::Parser;
use nutrino_chat::runner::{run, AppConfig};

/// Nutrino Chat - your AI health companion
#[derive(Parser, Debug)]
#[command(name = "nutrino-chat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Override the scripted reply delay in milliseconds
    #[arg(long)]
    reply_delay_ms: Option<u64>,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        let mut config = AppConfig {
            debug: args.debug,
            verbose: args.verbose,
            ..AppConfig::default()
        };
        if let Some(ms) = args.reply_delay_ms {
            config.reply_delay = std::time::Duration::from_millis(ms);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run(AppConfig::from(&args))
}
