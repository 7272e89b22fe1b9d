//! Error types for script persistence.

use thiserror::Error;

/// Errors raised by a script store implementation.
///
/// A store failure is surfaced to the caller as a failure status; it
/// never affects board state or other script runs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a valid script table.
    #[error("malformed script table: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The script table could not be encoded for persistence.
    #[error("failed to encode script table: {0}")]
    Encode(#[source] serde_json::Error),
}
