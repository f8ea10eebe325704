//! Nexum API-specific error types.

/// Errors that can occur during Nexum API operations.
#[derive(Debug, thiserror::Error)]
pub enum NexumError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error (status {status})")]
    Api {
        status: u16,
        /// Detail extracted from the response body's `message` field, when
        /// one was present and parseable.
        message: Option<String>,
    },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),
}
