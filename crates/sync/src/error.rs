use thiserror::Error;

/// Everything that can go wrong between the game and the relay.
///
/// None of these reach the player: the game keeps running without an
/// opponent and the error is logged.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("relay i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("arena has {actual} cells, expected {expected}")]
    BadArena { expected: usize, actual: usize },

    #[error("relay connection closed")]
    Closed,
}

pub type SyncResult<T> = Result<T, SyncError>;
