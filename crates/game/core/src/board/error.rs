//! Board population errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while populating a board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopulateError {
    /// Fewer free cells than occupants to place. Placement would never finish.
    #[error("Board has {free_cells} free cells but {required} occupants to place")]
    InsufficientCapacity { free_cells: usize, required: usize },

    /// The board has no cells for the player to stand on.
    #[error("Board of {width}x{height} has no cells")]
    EmptyBoard { width: usize, height: usize },

    /// The board would exceed [`Board::MAX_CELLS`](super::Board::MAX_CELLS).
    #[error("Board of {width}x{height} exceeds the limit of {max_cells} cells")]
    TooLarge {
        width: usize,
        height: usize,
        max_cells: usize,
    },
}

impl GameError for PopulateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientCapacity { .. } => ErrorSeverity::Fatal,
            Self::EmptyBoard { .. } | Self::TooLarge { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientCapacity { .. } => "POPULATE_INSUFFICIENT_CAPACITY",
            Self::EmptyBoard { .. } => "POPULATE_EMPTY_BOARD",
            Self::TooLarge { .. } => "POPULATE_BOARD_TOO_LARGE",
        }
    }
}
