//! History consistency invariant: history length matches occupied cells.

use super::super::{Cell, GameSession};
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(game: &GameSession) -> bool {
        let occupied_count = game
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        game.history().len() == occupied_count
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
