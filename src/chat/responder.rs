//! Scripted reply scheduling.
//!
//! The bot never computes anything: a reply is one of five canned strings,
//! chosen uniformly at random and delivered once after a fixed delay.

use std::time::Duration;

use rand::Rng;
use tokio::sync::{mpsc, watch};

/// The fixed response set.
pub const BOT_RESPONSES: [&str; 5] = [
    "I understand your concern about nutrition. Let me provide some helpful information.",
    "That's a great question! Based on your profile, I'd recommend...",
    "I can help with that. Here are some dietary suggestions tailored for you:",
    "Your health is important! Let me analyze that and give you personalized advice.",
    "Thanks for sharing. Here's what I think would work best for your situation.",
];

/// A scripted reply on its way to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
}

/// Reply delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("screen went away before the reply fired")]
    ScreenClosed,
}

fn deliver(replies: &mpsc::UnboundedSender<Reply>, text: String) -> Result<(), ReplyError> {
    replies
        .send(Reply { text })
        .map_err(|_| ReplyError::ScreenClosed)
}

/// Handle for a single pending reply.
///
/// Each send gets its own handle; overlapping sends run their timers
/// independently. Dropping or cancelling the handle stops the timer so no
/// reply can land after the screen is gone.
pub struct ReplyHandle {
    cancel_tx: watch::Sender<bool>,
    task: tokio::task::JoinHandle<()>,
}

impl ReplyHandle {
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ReplyHandle {
    fn drop(&mut self) {
        let _ = self.cancel_tx.send(true);
    }
}

/// Schedules canned bot replies.
#[derive(Debug, Clone)]
pub struct ScriptedResponder {
    delay: Duration,
}

impl ScriptedResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Pick one response uniformly at random from the fixed set.
    pub fn pick_response() -> &'static str {
        let idx = rand::thread_rng().gen_range(0..BOT_RESPONSES.len());
        BOT_RESPONSES[idx]
    }

    /// Schedule a reply.
    ///
    /// Fires once after the configured delay unless the returned handle is
    /// cancelled first. The reply cannot fail; a closed channel only means
    /// the screen already went away.
    pub fn schedule(&self, replies: mpsc::UnboundedSender<Reply>) -> ReplyHandle {
        let delay = self.delay;
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    let text = Self::pick_response().to_string();
                    if let Err(err) = deliver(&replies, text) {
                        tracing::trace!(%err, "reply dropped");
                    }
                }
                _ = cancel_rx.changed() => {}
            }
        });

        ReplyHandle { cancel_tx, task }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[test]
    fn picked_response_is_from_the_fixed_set() {
        for _ in 0..50 {
            let response = ScriptedResponder::pick_response();
            assert!(BOT_RESPONSES.contains(&response));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_the_delay_not_before() {
        let responder = ScriptedResponder::new(Duration::from_millis(1500));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _handle = responder.schedule(tx);
        // Let the spawned task register its timer before moving the clock
        tokio::task::yield_now().await;

        advance(Duration::from_millis(1499)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        let reply = rx.try_recv().expect("reply should have fired");
        assert!(BOT_RESPONSES.contains(&reply.text.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_reply_never_fires() {
        let responder = ScriptedResponder::new(Duration::from_millis(1500));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = responder.schedule(tx);
        tokio::task::yield_now().await;

        handle.cancel();
        advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_sends_each_get_a_reply() {
        let responder = ScriptedResponder::new(Duration::from_millis(1500));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _first = responder.schedule(tx.clone());
        tokio::task::yield_now().await;
        advance(Duration::from_millis(500)).await;
        let _second = responder.schedule(tx);
        tokio::task::yield_now().await;

        advance(Duration::from_millis(1001)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_the_timer() {
        let responder = ScriptedResponder::new(Duration::from_millis(1500));
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(responder.schedule(tx));

        advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
