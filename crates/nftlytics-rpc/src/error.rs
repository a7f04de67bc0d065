//! RPC error types.

use thiserror::Error;

/// Failure taxonomy for the analytics view query.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The transport itself failed: connection, timeout, or a non-2xx
    /// response.
    #[error("Network error: {0}")]
    Network(String),

    /// The node answered, but the payload does not match the view
    /// function's contract.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl RpcError {
    /// Generic user-facing message for any fetch failure.
    ///
    /// The network/contract split stays internal (structured logs); the
    /// user sees one retryable message either way.
    pub fn user_message(&self) -> &'static str {
        "Failed to fetch analytics data. Please try again."
    }
}

/// Result type alias for RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;
