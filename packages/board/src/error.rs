//! Error types for board construction.

use thiserror::Error;

use crate::block::Position;

/// Errors raised while assembling a board at startup.
///
/// The block set is fixed once the registry exists, so these can only
/// occur during construction.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Two blocks share the same name.
    #[error("duplicate block name: {0}")]
    DuplicateName(String),

    /// Two blocks share the same position.
    #[error("duplicate block position: {0}")]
    DuplicatePosition(Position),
}
