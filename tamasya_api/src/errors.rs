//! Error types for the API client.

use serde_json::Value;

/// Errors that can occur when calling the admin backend.
///
/// `Network` (status 0) is the only class that may trigger the mock fallback
/// in the resource layer. `Http` means the transport completed but the server
/// rejected the request; it carries the decoded body (or the raw text when
/// the body was not JSON) for caller inspection.
///
/// The backend signals an expired or missing session either with HTTP 401 or
/// with a message containing "unauthenticated" (any casing). Both map to
/// `Unauthenticated`. The substring check mirrors the backend's observed
/// behavior; a machine-readable error code would be the sturdier contract.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport could not complete (connection refused, DNS failure, or
    /// any other failure before a response arrived).
    #[error("cannot reach backend at {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Http {
        status: u16,
        message: String,
        body: Value,
    },

    /// The server rejected the session. Session-lifecycle code reacts to this
    /// variant by clearing the stored token; the client itself does not.
    #[error("unauthenticated (status {status}): {message}")]
    Unauthenticated { status: u16, message: String },
}

impl Error {
    /// Status code carried by the error. Network-class failures report 0.
    pub fn status(&self) -> u16 {
        match self {
            Error::Network { .. } => 0,
            Error::Http { status, .. } => *status,
            Error::Unauthenticated { status, .. } => *status,
        }
    }

    /// True for transport-level failures, the sole mock-fallback trigger.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. })
    }
}
