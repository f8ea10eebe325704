//! Session persistence-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the persisted session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The persisted session exists but could not be parsed
    #[error("Persisted session is invalid: {0}")]
    Corrupt(String),

    /// Failed to read the session file
    #[error("Failed to read session from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the session file
    #[error("Failed to save session to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the session
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),
}
