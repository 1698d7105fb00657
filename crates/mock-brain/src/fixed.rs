//! Fixed brain implementation - always answers with the same text.

use brain_core::{async_trait, Brain, BrainError, InboundMessage, OutboundMessage};
use tokio::sync::Mutex;

/// A brain that replies with a preset text and records every message it saw.
///
/// Lets tests assert both on what the router returns and on exactly what
/// text the router forwarded.
#[derive(Debug, Default)]
pub struct FixedBrain {
    reply: String,
    received: Mutex<Vec<InboundMessage>>,
}

impl FixedBrain {
    /// Create a brain that always replies with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Create a brain that always replies with an empty string.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Messages received so far, oldest first.
    pub async fn received(&self) -> Vec<InboundMessage> {
        self.received.lock().await.clone()
    }

    /// Number of calls made so far.
    pub async fn call_count(&self) -> usize {
        self.received.lock().await.len()
    }
}

#[async_trait]
impl Brain for FixedBrain {
    async fn process(&self, message: InboundMessage) -> Result<OutboundMessage, BrainError> {
        let reply = OutboundMessage::reply_to(&message, self.reply.clone());
        self.received.lock().await.push(message);
        Ok(reply)
    }

    fn name(&self) -> &str {
        "FixedBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_reply_and_recording() {
        let brain = FixedBrain::new("Bus X in 5 min");

        let first = brain.process(InboundMessage::new("one")).await.unwrap();
        let second = brain
            .process(InboundMessage::from_sender("whatsapp:+1", "two"))
            .await
            .unwrap();

        assert_eq!(first.text, "Bus X in 5 min");
        assert_eq!(second.text, "Bus X in 5 min");
        assert_eq!(brain.call_count().await, 2);

        let received = brain.received().await;
        assert_eq!(received[0].text, "one");
        assert_eq!(received[1].sender.as_deref(), Some("whatsapp:+1"));
    }

    #[tokio::test]
    async fn test_empty_reply() {
        let brain = FixedBrain::empty();
        let reply = brain.process(InboundMessage::new("anything")).await.unwrap();
        assert!(reply.is_blank());
    }
}
