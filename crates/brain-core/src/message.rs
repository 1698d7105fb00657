//! Message types exchanged with a brain.

/// A message received from a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Transport-specific sender identifier (e.g. `whatsapp:+9198...`), if known.
    pub sender: Option<String>,
    /// Message text as typed by the user.
    pub text: String,
}

impl InboundMessage {
    /// Create a message with no known sender.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            sender: None,
            text: text.into(),
        }
    }

    /// Create a message from a known sender.
    pub fn from_sender(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: Some(sender.into()),
            text: text.into(),
        }
    }

    /// Sender identifier, or `"unknown"` when the transport did not supply one.
    pub fn sender_or_unknown(&self) -> &str {
        self.sender.as_deref().unwrap_or("unknown")
    }
}

/// A reply produced by a brain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Who the reply is addressed to, mirrored from the inbound sender.
    pub recipient: Option<String>,
    /// Reply text.
    pub text: String,
}

impl OutboundMessage {
    /// Create a reply addressed to the sender of `message`.
    pub fn reply_to(message: &InboundMessage, text: impl Into<String>) -> Self {
        Self {
            recipient: message.sender.clone(),
            text: text.into(),
        }
    }

    /// Whether the reply has no visible content.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
