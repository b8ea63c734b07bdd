//! Append-only conversation state.

use chrono::Local;

use super::message::{Message, MessageIdGenerator, Sender, GREETING};

/// Ordered list of chat messages for one screen session.
///
/// Seeded with the bot greeting on construction. Order is strictly insertion
/// order, so a user message always precedes its scripted reply.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    ids: MessageIdGenerator,
}

impl Conversation {
    pub fn new() -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            ids: MessageIdGenerator::default(),
        };
        conversation.push(Sender::Bot, GREETING);
        conversation
    }

    /// Append a user message.
    ///
    /// Returns `false` without touching the list when the trimmed text is
    /// empty.
    pub fn push_user(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.push(Sender::User, text);
        true
    }

    /// Append a bot message.
    pub fn push_bot(&mut self, text: &str) {
        self.push(Sender::Bot, text);
    }

    fn push(&mut self, sender: Sender, text: &str) {
        let now = Local::now();
        self.messages.push(Message {
            id: self.ids.next_id(now),
            text: text.to_string(),
            sender,
            timestamp: now,
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
