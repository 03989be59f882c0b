//! Driver errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to spawn the game loop thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("the game loop is no longer running")]
    ChannelClosed,

    #[error("snapshot lock poisoned")]
    LockPoisoned,

    #[error("the game loop thread panicked")]
    ThreadPanicked,
}
