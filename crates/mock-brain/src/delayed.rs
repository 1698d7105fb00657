//! Delayed brain implementation - wraps another brain with artificial delay.

use std::time::Duration;

use brain_core::{async_trait, Brain, BrainError, InboundMessage, OutboundMessage};
use tokio::time::sleep;

/// A brain that wraps another brain and adds artificial latency.
///
/// Simulates a slow text-generation backend so callers can be checked for
/// handling many in-flight requests at once.
pub struct DelayedBrain<B: Brain> {
    inner: B,
    delay: Duration,
}

impl<B: Brain> DelayedBrain<B> {
    /// Create a new DelayedBrain wrapping the given brain with the specified delay.
    pub fn new(inner: B, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a brain with a delay in milliseconds.
    pub fn with_millis(inner: B, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// The wrapped brain.
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

#[async_trait]
impl<B: Brain> Brain for DelayedBrain<B> {
    async fn process(&self, message: InboundMessage) -> Result<OutboundMessage, BrainError> {
        sleep(self.delay).await;
        self.inner.process(message).await
    }

    fn name(&self) -> &str {
        "DelayedBrain"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }

    async fn shutdown(&self) -> Result<(), BrainError> {
        self.inner.shutdown().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedBrain;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_brain() {
        let brain = DelayedBrain::with_millis(FixedBrain::new("late"), 50);

        let start = Instant::now();
        let response = brain.process(InboundMessage::new("test")).await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(response.text, "late");
        assert!(elapsed >= Duration::from_millis(50));
        assert_eq!(brain.inner().call_count().await, 1);
    }

    #[tokio::test]
    async fn test_brain_name() {
        let brain = DelayedBrain::with_millis(FixedBrain::new("x"), 0);
        assert_eq!(brain.name(), "DelayedBrain");
    }
}
