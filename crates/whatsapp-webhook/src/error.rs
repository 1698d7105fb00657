//! Error types for the webhook service.

use std::any::Any;

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use transit::TransitError;

use crate::twiml::MessagingResponse;

/// Reply sent to WhatsApp when a request could not be handled.
pub const GENERIC_APOLOGY: &str = "⚠️ Something went wrong.";

/// Errors on the Twilio-facing routes.
///
/// Always rendered as a TwiML apology with status 200 so the user still gets
/// a message.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The form body could not be parsed.
    #[error("Invalid form body: {0}")]
    Form(#[from] FormRejection),

    /// A handler panicked.
    #[error("Handler panicked: {0}")]
    Panic(String),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Webhook error");
        MessagingResponse::reply(GENERIC_APOLOGY).into_response()
    }
}

/// Panic handler for `CatchPanicLayer` on the Twilio routes.
pub fn panic_reply(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    WebhookError::Panic(detail).into_response()
}

/// Errors on the JSON transit routes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transit provider failure.
    #[error("Transit error: {0}")]
    Transit(#[from] TransitError),

    /// Lookup found nothing.
    #[error("{0}")]
    NotFound(String),

    /// Missing or malformed query parameters.
    #[error("Invalid query: {0}")]
    Query(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Transit(TransitError::InvalidQuery(_)) | ApiError::Query(_) => {
                tracing::warn!("Bad transit request: {}", self);
                StatusCode::BAD_REQUEST
            }
            ApiError::Transit(TransitError::Unavailable(_)) => {
                tracing::error!("Transit provider error: {}", self);
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for transit routes.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_reply_is_twiml() {
        let response = panic_reply(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "text/xml"
        );
    }

    #[test]
    fn test_api_error_status_codes() {
        let unavailable =
            ApiError::from(TransitError::Unavailable("down".into())).into_response();
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let invalid =
            ApiError::from(TransitError::InvalidQuery("empty".into())).into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let missing = ApiError::NotFound("Route 999 not found".into()).into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
