//! The message router: canned replies first, text-generation brain second.

use std::sync::Arc;

use brain_core::{Brain, BrainError, InboundMessage};
use tracing::{error, info, warn};

use crate::catalog;
use crate::intent::{normalize, Intent};

/// Decides how to answer each inbound message.
///
/// Bare greetings, `help` and thanks get canned replies. Everything else is
/// passed to the brain. The router holds no per-request state and can be
/// shared across concurrent requests behind an `Arc`.
pub struct MessageRouter {
    brain: Arc<dyn Brain>,
}

impl MessageRouter {
    /// Create a router that falls back to `brain`.
    pub fn new(brain: Arc<dyn Brain>) -> Self {
        info!(brain = brain.name(), "Message router initialized");
        Self { brain }
    }

    /// Name of the fallback brain.
    pub fn brain_name(&self) -> &str {
        self.brain.name()
    }

    /// Produce the reply for one message.
    ///
    /// Never fails and never returns an empty string: a blank brain reply
    /// becomes the "unknown" reply and a brain error becomes the
    /// "temporarily unavailable" reply. Errors are logged, not returned.
    pub async fn route(&self, text: &str, sender: Option<&str>) -> String {
        let clean = text.trim();
        let normalized = normalize(text);
        let intent = Intent::from_normalized(&normalized);

        info!(
            sender = sender.unwrap_or("unknown"),
            intent = intent.as_str(),
            text = %normalized,
            "Processing message"
        );

        if intent == Intent::Unknown {
            warn!("Empty message received");
        }

        if let Some(reply) = intent.canned_reply() {
            return reply;
        }

        let message = match sender {
            Some(sender) => InboundMessage::from_sender(sender, clean),
            None => InboundMessage::new(clean),
        };

        match self.brain.process(message).await {
            Ok(reply) if reply.is_blank() => {
                warn!(brain = self.brain.name(), "Empty reply from brain");
                catalog::unknown()
            }
            Ok(reply) => reply.text,
            Err(err) => {
                error!(
                    brain = self.brain.name(),
                    error = %err,
                    "Message processing failed"
                );
                catalog::unavailable()
            }
        }
    }

    /// Whether the fallback brain reports itself ready.
    pub async fn is_ready(&self) -> bool {
        self.brain.is_ready().await
    }

    /// Shut down the fallback brain.
    pub async fn shutdown(&self) -> Result<(), BrainError> {
        self.brain.shutdown().await
    }
}
