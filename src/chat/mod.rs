//! Chat core: message model, conversation state, and scripted replies.

mod conversation;
mod message;
mod responder;

pub use conversation::Conversation;
pub use message::{Message, MessageIdGenerator, Sender, GREETING};
pub use responder::{Reply, ReplyError, ReplyHandle, ScriptedResponder, BOT_RESPONSES};
