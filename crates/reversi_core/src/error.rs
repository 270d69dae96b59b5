use thiserror::Error;

use crate::types::Coord;

/// Everything that can go wrong at the session boundary. Construction
/// failures end session creation; move failures leave the game untouched
/// so the caller can re-prompt.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Board sizes must be even and at least 2.
    #[error("invalid board size {size}: must be a positive even number")]
    InvalidSize { size: u8 },
    /// Search depths must be at least 1.
    #[error("invalid search depth {depth}: must be a positive number")]
    InvalidDepth { depth: u8 },
    /// Coordinate outside the board.
    #[error("coordinate ({}, {}) is outside the {size}x{size} board", coord.row, coord.col)]
    OutOfBounds { coord: Coord, size: u8 },
    /// Move not available to the player in the current position.
    #[error("illegal move at ({}, {})", coord.row, coord.col)]
    IllegalMove { coord: Coord },
}
