//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from world setup, content loading, command parsing and
//! execution so callers can bubble them up with consistent context.
use thiserror::Error;

use game_core::{CommandError, ParseCommandError, PopulateError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to set up the board")]
    Setup(#[from] PopulateError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("invalid command script")]
    Script(#[from] ParseCommandError),

    /// Config, catalog or roster files that could not be read or parsed.
    #[error(transparent)]
    Content(#[from] anyhow::Error),
}
