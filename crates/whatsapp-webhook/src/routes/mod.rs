//! Route handlers for the webhook service.

pub mod health;
pub mod transit;
pub mod whatsapp;

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::panic_reply;
use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    // Twilio expects TwiML even when a handler panics.
    let twilio = Router::new()
        .route("/whatsapp", post(whatsapp::incoming))
        .route("/whatsapp/status", post(whatsapp::status_callback))
        .layer(CatchPanicLayer::custom(panic_reply));

    Router::new()
        // Status
        .route("/", get(health::root))
        .route("/health", get(health::health))
        // Transit data
        .route("/transit/stops", get(transit::search_stops))
        .route("/transit/stops/:stop/arrivals", get(transit::arrivals))
        .route("/transit/routes/:route", get(transit::route_info))
        .route("/transit/fare", get(transit::fare))
        .merge(twilio)
}
