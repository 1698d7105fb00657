//! Status and health check endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

pub const SERVICE_NAME: &str = "BMTC WhatsApp Bot";
pub const NLP_PROVIDER: &str = "mistral";

#[derive(Serialize)]
pub struct Status {
    pub status: &'static str,
    pub service: &'static str,
    pub nlp_provider: &'static str,
    pub model: String,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub mistral_model: String,
}

/// Service status.
pub async fn root(State(state): State<AppState>) -> Json<Status> {
    Json(Status {
        status: "online",
        service: SERVICE_NAME,
        nlp_provider: NLP_PROVIDER,
        model: state.model.clone(),
    })
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        mistral_model: state.model.clone(),
    })
}
