//! Twilio WhatsApp webhook for the BMTC bus assistant.
//!
//! Inbound messages are routed through [`message_router::MessageRouter`] and
//! answered with TwiML. Status, health and read-only transit endpoints are
//! served alongside.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;
pub mod twiml;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError, TwilioConfig};
pub use error::{ApiError, WebhookError, GENERIC_APOLOGY};
pub use state::AppState;
pub use twiml::MessagingResponse;

/// Build the application with request tracing and shared state.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
