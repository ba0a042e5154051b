use thiserror::Error;

/// Errors from the completion endpoint
///
/// Every variant is absorbed by the script service and replaced with the
/// canned fallback line; the distinctions exist for the log.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Request never reached the endpoint
    #[error("failed to reach completion endpoint: {0}")]
    Connection(String),

    /// Endpoint rejected the configured credential
    #[error("completion endpoint rejected credentials: {0}")]
    AuthenticationFailed(String),

    /// Endpoint returned a non-success status
    #[error("completion endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected completion shape
    #[error("malformed completion response: {0}")]
    Malformed(String),
}
