//! Twilio WhatsApp webhook handlers.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::WebhookError;
use crate::state::AppState;
use crate::twiml::MessagingResponse;

/// Inbound message form posted by Twilio.
#[derive(Debug, Default, Deserialize)]
pub struct InboundMessageForm {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "MessageSid", default)]
    pub message_sid: Option<String>,
}

/// Delivery status callback posted by Twilio.
#[derive(Debug, Default, Deserialize)]
pub struct StatusCallbackForm {
    #[serde(rename = "MessageSid", default)]
    pub message_sid: Option<String>,
    #[serde(rename = "MessageStatus", default)]
    pub message_status: Option<String>,
    #[serde(rename = "To", default)]
    pub to: Option<String>,
    #[serde(rename = "ErrorCode", default)]
    pub error_code: Option<String>,
}

/// Handle an incoming WhatsApp message and reply with TwiML.
pub async fn incoming(
    State(state): State<AppState>,
    form: Result<Form<InboundMessageForm>, FormRejection>,
) -> Result<MessagingResponse, WebhookError> {
    let Form(form) = form?;

    info!(
        from = %form.from,
        sid = form.message_sid.as_deref().unwrap_or("-"),
        body = %form.body,
        "Received WhatsApp message"
    );

    let sender = Some(form.from.trim()).filter(|s| !s.is_empty());
    let reply = state.router.route(&form.body, sender).await;

    info!(to = %form.from, reply = %reply, "Sending reply");

    let response = MessagingResponse::reply(reply);
    debug!(twiml = %response.to_xml(), "TwiML response");

    Ok(response)
}

/// Log a delivery status update.
pub async fn status_callback(
    form: Result<Form<StatusCallbackForm>, FormRejection>,
) -> StatusCode {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection, "Malformed status callback");
            return StatusCode::NO_CONTENT;
        }
    };

    let sid = form.message_sid.as_deref().unwrap_or("-");
    let status = form.message_status.as_deref().unwrap_or("unknown");
    let to = form.to.as_deref().unwrap_or("-");

    match form.error_code.as_deref() {
        Some(code) if !code.is_empty() => {
            warn!(sid, status, to, error_code = code, "Message delivery failed");
        }
        _ => info!(sid, status, to, "Message status update"),
    }

    StatusCode::NO_CONTENT
}
