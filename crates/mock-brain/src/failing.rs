//! Failing brain implementation - every call errors.

use brain_core::{async_trait, Brain, BrainError, InboundMessage, OutboundMessage};

/// Which error a [`FailingBrain`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureKind {
    /// `BrainError::Network`
    #[default]
    Network,
    /// `BrainError::Api` with a 401 status.
    Unauthorized,
    /// `BrainError::Timeout`
    Timeout,
    /// `BrainError::Unavailable`
    Unavailable,
    /// `BrainError::ShutDown`
    ShutDown,
}

/// A brain whose every call fails.
///
/// Useful for testing that callers recover from backend failures.
#[derive(Debug, Clone, Default)]
pub struct FailingBrain {
    kind: FailureKind,
}

impl FailingBrain {
    /// Create a brain that fails with a network error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a brain that fails with the given kind of error.
    pub fn with_kind(kind: FailureKind) -> Self {
        Self { kind }
    }

    fn error(&self) -> BrainError {
        match self.kind {
            FailureKind::Network => BrainError::Network("connection refused".to_string()),
            FailureKind::Unauthorized => BrainError::Api {
                status: 401,
                message: "Unauthorized".to_string(),
            },
            FailureKind::Timeout => BrainError::Timeout,
            FailureKind::Unavailable => BrainError::Unavailable("overloaded".to_string()),
            FailureKind::ShutDown => BrainError::ShutDown,
        }
    }
}

#[async_trait]
impl Brain for FailingBrain {
    async fn process(&self, _message: InboundMessage) -> Result<OutboundMessage, BrainError> {
        Err(self.error())
    }

    fn name(&self) -> &str {
        "FailingBrain"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}
