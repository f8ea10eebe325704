//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No session is held in state
    #[error("No session in state")]
    #[allow(dead_code)]
    SessionNotSet,

    /// No candidate is loaded for the detail view
    #[error("Candidate not loaded")]
    #[allow(dead_code)]
    CandidateNotLoaded,

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}
