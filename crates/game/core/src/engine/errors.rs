//! Errors surfaced by the turn engine and command parser.

use crate::error::{ErrorSeverity, GameError};

use super::GameStatus;

/// Errors surfaced while executing a command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    #[error("game is over ({status})")]
    GameOver { status: GameStatus },
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GameOver { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver { .. } => "COMMAND_GAME_OVER",
        }
    }
}

/// Errors raised while parsing a command key or script.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(String),

    /// `h` must be followed by 1 (weapon), 2 (armour), 3 (shield) or 4 (ring).
    #[error("invalid drop target `{0}`")]
    InvalidDropTarget(String),

    /// Rings are numbered from 1: `h4:1` drops the first ring.
    #[error("invalid ring number `{0}`")]
    InvalidRingNumber(String),
}

impl GameError for ParseCommandError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "PARSE_EMPTY",
            Self::Unknown(_) => "PARSE_UNKNOWN_COMMAND",
            Self::InvalidDropTarget(_) => "PARSE_INVALID_DROP_TARGET",
            Self::InvalidRingNumber(_) => "PARSE_INVALID_RING_NUMBER",
        }
    }
}
