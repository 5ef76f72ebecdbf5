//! Monotonic board invariant: cells never change once set.

use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must succeed without
/// touching an occupied cell and must reproduce the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(game: &GameSession) -> bool {
        let mut reconstructed = Board::new();
        for mov in game.history() {
            if reconstructed.place(mov.position, mov.player).is_err() {
                return false;
            }
        }
        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
