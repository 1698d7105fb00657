//! Error types for transit lookups.

use thiserror::Error;

/// Errors a transit backend can report.
///
/// "Not found" is never an error: unknown stops give empty lists and unknown
/// routes give `None`.
#[derive(Debug, Error)]
pub enum TransitError {
    /// The backend could not be reached or is not serving.
    #[error("transit backend unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
