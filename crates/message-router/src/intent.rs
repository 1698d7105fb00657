//! Intent classification for inbound text.

use crate::catalog;

/// Tokens answered with the greeting.
const GREETING_TOKENS: &[&str] = &["hi", "hello", "hey"];

/// Tokens answered with the acknowledgment.
const THANKS_TOKENS: &[&str] = &["thanks", "thank you"];

/// What the router decided a message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Empty or whitespace-only text.
    Unknown,
    /// A bare greeting.
    Greeting,
    /// A request for usage help.
    Help,
    /// Gratitude.
    Thanks,
    /// Anything else; handed to the text-generation brain.
    Fallback,
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Intent {
    /// Classify raw user text.
    pub fn classify(text: &str) -> Self {
        Self::from_normalized(&normalize(text))
    }

    /// Classify text that has already been through [`normalize`].
    ///
    /// Matching is exact: `"hi there"` is a fallback, not a greeting.
    pub fn from_normalized(normalized: &str) -> Self {
        if normalized.is_empty() {
            Intent::Unknown
        } else if GREETING_TOKENS.contains(&normalized) {
            Intent::Greeting
        } else if normalized == "help" {
            Intent::Help
        } else if THANKS_TOKENS.contains(&normalized) {
            Intent::Thanks
        } else {
            Intent::Fallback
        }
    }

    /// Canned reply for this intent, or `None` for [`Intent::Fallback`].
    pub fn canned_reply(self) -> Option<String> {
        match self {
            Intent::Unknown => Some(catalog::unknown()),
            Intent::Greeting => Some(catalog::greeting()),
            Intent::Help => Some(catalog::help()),
            Intent::Thanks => Some(catalog::thanks()),
            Intent::Fallback => None,
        }
    }

    /// Short label for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Unknown => "unknown",
            Intent::Greeting => "greeting",
            Intent::Help => "help",
            Intent::Thanks => "thanks",
            Intent::Fallback => "fallback",
        }
    }
}
