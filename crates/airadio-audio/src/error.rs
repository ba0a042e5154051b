use thiserror::Error;

/// Errors from the engine gateway
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Could not reach the gateway or keep the connection alive
    #[error("gateway connection failed: {0}")]
    Connection(String),

    /// Gateway answered with something other than a command response
    #[error("gateway protocol error: {0}")]
    Protocol(String),

    /// Engine reported a failure executing the command
    #[error("engine rejected {method}: {message}")]
    Engine { method: String, message: String },
}
