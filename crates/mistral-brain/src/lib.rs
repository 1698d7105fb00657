//! Mistral-based brain implementation.
//!
//! This crate provides the text-generation adapter for the BMTC WhatsApp
//! bot. Every message that the router cannot answer from canned replies is
//! sent to the Mistral chat-completions API together with a fixed
//! transit-assistant instruction.
//!
//! # Features
//!
//! - Single-turn requests (system instruction + user text, no history)
//! - Short, low-temperature replies (200 tokens, temperature 0.4 by default)
//! - Request timeout so a stalled backend cannot hold a webhook open
//! - Backend failures are logged and turned into an apology reply
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use mistral_brain::{Brain, InboundMessage, MistralBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = MistralBrain::from_env()?;
//!     let reply = brain.process(InboundMessage::new("Bus from Majestic to Hebbal?")).await?;
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::{MistralBrain, BACKEND_ERROR_REPLY, EMPTY_CONTENT_REPLY, NO_CHOICES_REPLY};
pub use config::{
    MistralBrainConfig, MistralBrainConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL,
    DEFAULT_PROMPT_FILE, DEFAULT_SYSTEM_PROMPT,
};

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError, InboundMessage, OutboundMessage};
