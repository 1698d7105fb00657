//! Application state shared across handlers.

use std::sync::Arc;

use message_router::MessageRouter;
use transit::TransitProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Routes inbound WhatsApp text to a reply.
    pub router: Arc<MessageRouter>,
    /// Transit data backing the `/transit` endpoints.
    pub transit: Arc<dyn TransitProvider>,
    /// Model name reported by `/` and `/health`.
    pub model: String,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        router: MessageRouter,
        transit: Arc<dyn TransitProvider>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            router: Arc::new(router),
            transit,
            model: model.into(),
        }
    }
}
