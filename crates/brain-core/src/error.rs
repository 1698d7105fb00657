//! Error types for brain operations.

use thiserror::Error;

/// Errors that can occur during brain construction or processing.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The brain is missing required configuration (e.g. an API key).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The backend answered with a body we could not interpret.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The brain is temporarily unavailable.
    #[error("brain unavailable: {0}")]
    Unavailable(String),

    /// A timeout occurred during processing.
    #[error("processing timed out")]
    Timeout,

    /// The brain has been shut down.
    #[error("brain shut down")]
    ShutDown,
}
