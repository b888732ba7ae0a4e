use thiserror::Error;

/// Caller-facing failures of the leaderboard core. Every variant is
/// recoverable; a failed call leaves the store exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("Player with identity {0} already exists")]
    DuplicateIdentity(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
