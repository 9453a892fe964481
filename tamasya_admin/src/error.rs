//! Error type for the resource layer, wrapping transport errors and adding
//! mock-repository misses.

use thiserror::Error;

/// Errors produced by the resource layer.
#[derive(Error, Debug)]
pub enum AdminError {
    /// An error from the underlying API client.
    #[error(transparent)]
    Api(#[from] tamasya_api::Error),

    /// A mock-repository lookup missed during fallback.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },
}

impl AdminError {
    /// True when the wrapped error is a transport-level failure.
    pub fn is_network(&self) -> bool {
        matches!(self, AdminError::Api(e) if e.is_network())
    }
}
