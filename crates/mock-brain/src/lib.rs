//! Mock brain implementations for exercising message routing without a
//! text-generation backend.
//!
//! This crate provides mock implementations of the `Brain` trait for testing:
//! - `EchoBrain` - Echoes messages back
//! - `FixedBrain` - Always answers with the same text and records what it saw
//! - `FailingBrain` - Always fails with a configurable error
//! - `DelayedBrain` - Wraps another brain with artificial delay
//!
//! For production AI processing, use the `mistral-brain` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{Brain, FixedBrain, InboundMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = FixedBrain::new("Bus 500D in 5 min");
//!
//!     let message = InboundMessage::new("next bus to Hebbal?");
//!
//!     let response = brain.process(message).await?;
//!     assert_eq!(response.text, "Bus 500D in 5 min");
//!     Ok(())
//! }
//! ```

mod delayed;
mod echo;
mod failing;
mod fixed;

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError, InboundMessage, OutboundMessage};

pub use delayed::DelayedBrain;
pub use echo::EchoBrain;
pub use failing::{FailingBrain, FailureKind};
pub use fixed::FixedBrain;
