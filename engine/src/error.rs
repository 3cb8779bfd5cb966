//! Error types for the Laneboard engine.

use crate::ClientId;
use thiserror::Error;

/// All possible errors from the Laneboard engine.
///
/// Both variants are detected before any mutation begins; the engine never
/// returns a partially renumbered board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown client: {0}")]
    UnknownClient(ClientId),

    #[error("invalid status: {0}")]
    InvalidStatus(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
