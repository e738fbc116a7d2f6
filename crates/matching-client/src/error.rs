//! Error types for the matching client.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Client error types.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from API.
        message: String,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected the request or its legs.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Machine readable code, e.g. `INVALID_LEGS`.
        code: String,
        /// Error message from API.
        message: String,
        /// Per-leg problems, empty unless the legs were rejected.
        issues: Vec<crate::types::LegIssue>,
    },
}
