//! Error types for the tic-tac-toe core.

use super::position::Position;
use derive_more::{Display, Error};

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: a rejected operation leaves the session
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the 3x3 grid")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the position is already occupied.
    #[display("{_0} is already occupied")]
    OccupiedCell(Position),

    /// The move, restart or computer turn is not allowed in the current state.
    #[display("Invalid move: {_0}")]
    InvalidMove(String),

    /// The computer opponent was asked to move on a full board.
    #[display("No legal move left on the board")]
    NoLegalMove,
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Creates an [`MoveError::InvalidMove`] with the given reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidMove(reason.into())
    }
}

/// Error parsing a compact board string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board parse error: {}", message)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
}

impl BoardParseError {
    /// Creates a new parse error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::OutOfRange { row: 4, col: 0 }.to_string(),
            "Cell (4, 0) is outside the 3x3 grid"
        );
        assert_eq!(
            MoveError::OccupiedCell(Position::Center).to_string(),
            "Center (1, 1) is already occupied"
        );
        assert_eq!(
            MoveError::invalid("Game is already over").to_string(),
            "Invalid move: Game is already over"
        );
    }

    #[test]
    fn test_board_parse_error_message() {
        assert_eq!(
            BoardParseError::new("expected 9 cells, found 3").to_string(),
            "Board parse error: expected 9 cells, found 3"
        );
    }
}
