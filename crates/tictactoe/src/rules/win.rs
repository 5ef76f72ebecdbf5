//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight lines of the grid: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of the line.
    pub player: Player,
    /// The three positions, in [`LINES`] order.
    pub positions: [Position; 3],
}

fn owns_line(board: &Board, player: Player, line: &[Position; 3]) -> bool {
    line.iter()
        .all(|&pos| board.cell(pos) == Cell::Occupied(player))
}

/// Checks whether `player` occupies a full row, column or diagonal.
///
/// Every one of the eight lines is inspected.
pub fn has_won(board: &Board, player: Player) -> bool {
    let completed = LINES
        .iter()
        .filter(|line| owns_line(board, player, line))
        .count();
    completed > 0
}

/// Returns the first completed line on the board, if any.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let player = board.cell(line[0]).player()?;
        owns_line(board, player, line).then_some(WinningLine {
            player,
            positions: *line,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board("XXX.OO...");
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_column() {
        let board = board("XOX.O.XO.");
        assert!(has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board("OX.XO.X.O");
        assert!(has_won(&board, Player::O));
        assert_eq!(
            winning_line(&board),
            Some(WinningLine {
                player: Player::O,
                positions: [Position::TopLeft, Position::Center, Position::BottomRight],
            })
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board("OOX.X.X..");
        assert!(has_won(&board, Player::X));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(pos, Player::O).unwrap();
            }
            assert!(has_won(&board, Player::O), "missed line {line:?}");
            assert_eq!(winning_line(&board).map(|l| l.positions), Some(line));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board("XX.O.O...");
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }
}
