//! Chat message types and id generation.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Seed greeting shown when the screen mounts.
pub const GREETING: &str =
    "Hello! I'm Nutrino, your health AI assistant. How can I help you today?";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message.
///
/// Messages are append-only: once in the conversation they are never mutated
/// or deleted, and nothing survives the screen being torn down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl Message {
    /// `HH:MM` label shown in the bubble footer.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Generates message ids from creation time.
///
/// A bare millisecond timestamp collides when two messages land in the same
/// tick, so a session-monotonic sequence number is appended.
#[derive(Debug, Default)]
pub struct MessageIdGenerator {
    seq: u64,
}

impl MessageIdGenerator {
    pub fn next_id(&mut self, at: DateTime<Local>) -> String {
        let seq = self.seq;
        self.seq += 1;
        format!("{}-{}", at.timestamp_millis(), seq)
    }
}
