//! Echo brain implementation - echoes messages back.

use brain_core::{async_trait, Brain, BrainError, InboundMessage, OutboundMessage};

/// A simple brain that echoes messages back to the sender.
///
/// Useful for checking that the text handed to the brain survives the
/// round trip through routing and transport encoding.
#[derive(Debug, Clone, Default)]
pub struct EchoBrain {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoBrain {
    /// Create a new EchoBrain with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoBrain with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_brain::EchoBrain;
    ///
    /// let brain = EchoBrain::with_prefix("Echo: ");
    /// // Will respond with "Echo: <original message>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Brain for EchoBrain {
    async fn process(&self, message: InboundMessage) -> Result<OutboundMessage, BrainError> {
        let response_text = match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, message.text),
            None => message.text.clone(),
        };

        Ok(OutboundMessage::reply_to(&message, response_text))
    }

    fn name(&self) -> &str {
        "EchoBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_no_prefix() {
        let brain = EchoBrain::new();
        let msg = InboundMessage::from_sender("whatsapp:+919800000001", "Route 500D?");

        let response = brain.process(msg).await.unwrap();
        assert_eq!(response.text, "Route 500D?");
        assert_eq!(response.recipient.as_deref(), Some("whatsapp:+919800000001"));
    }

    #[tokio::test]
    async fn test_echo_with_prefix() {
        let brain = EchoBrain::with_prefix("Echo: ");
        let msg = InboundMessage::new("Hello!");

        let response = brain.process(msg).await.unwrap();
        assert_eq!(response.text, "Echo: Hello!");
        assert!(response.recipient.is_none());
    }

    #[tokio::test]
    async fn test_brain_name_and_ready() {
        let brain = EchoBrain::new();
        assert_eq!(brain.name(), "EchoBrain");
        assert!(brain.is_ready().await);
    }
}
