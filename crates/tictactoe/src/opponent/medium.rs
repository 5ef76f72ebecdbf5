//! Medium opponent: fixed positional priorities, no lookahead.

use super::Strategy;
use crate::{Board, MoveError, Player, Position};
use tracing::instrument;

/// Takes the center, then the first free corner, then the first free cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Medium;

impl Strategy for Medium {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<Position, MoveError> {
        std::iter::once(Position::Center)
            .chain(Position::CORNERS)
            .chain(Position::ALL)
            .find(|&pos| board.is_empty(pos))
            .ok_or(MoveError::NoLegalMove)
    }
}
