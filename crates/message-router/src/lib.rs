//! Message routing for the BMTC WhatsApp bot.
//!
//! This crate provides the [`MessageRouter`], which answers every inbound
//! message with a single non-empty reply string.
//!
//! # Decision procedure
//!
//! ```text
//! raw text
//!    ↓ trim + lowercase
//! ┌───────────────────────────────────────────────┐
//! │ ""                  → catalog::unknown()      │
//! │ hi / hello / hey    → catalog::greeting()     │
//! │ help                → catalog::help()         │
//! │ thanks / thank you  → catalog::thanks()       │
//! │ anything else       → Brain::process(trimmed) │
//! │     Ok(blank)       → catalog::unknown()      │
//! │     Err(_)          → catalog::unavailable()  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use message_router::MessageRouter;
//! use mistral_brain::MistralBrain;
//!
//! let router = MessageRouter::new(Arc::new(MistralBrain::from_env()?));
//! let reply = router.route("Next bus from Majestic?", Some("whatsapp:+91...")).await;
//! ```

pub mod catalog;
mod intent;
mod router;

pub use intent::{normalize, Intent};
pub use router::MessageRouter;

// Re-export commonly used types from dependencies
pub use brain_core::{Brain, BrainError};
