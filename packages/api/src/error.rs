//! Error types for the boundary surface.

use thiserror::Error;

use blockboard_script_store::StoreError;

/// Errors surfaced to the external transport layer.
///
/// The variants map onto the transport's status vocabulary: a malformed
/// payload is the caller's fault, a store failure is the host's. Script
/// failures are not errors at this level — they are data on the run
/// report.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload is malformed or missing required fields.
    #[error("invalid request payload: {message}")]
    InvalidPayload { message: String },

    /// No stored script has the requested name.
    #[error("no stored script named {name:?}")]
    ScriptNotFound { name: String },

    /// The script store failed.
    #[error("script store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }
}
