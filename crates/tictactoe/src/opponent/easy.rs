//! Easy opponent: a uniformly random legal move.

use super::Strategy;
use crate::{Board, MoveError, Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Picks uniformly among the free cells.
#[derive(Debug, Clone)]
pub struct Easy {
    rng: StdRng,
    seed: u64,
}

impl Easy {
    /// Creates a reproducible opponent.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an opponent seeded from the thread-local generator.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(seed)
    }

    /// Seed this opponent was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Strategy for Easy {
    #[instrument(skip(self, board), fields(seed = self.seed))]
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<Position, MoveError> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(MoveError::NoLegalMove);
        }
        let idx = self.rng.random_range(0..moves.len());
        Ok(moves[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_only_free_cell_is_chosen() {
        let board: Board = "XOXXOOOX.".parse().unwrap();
        let mut easy = Easy::with_seed(3);
        for _ in 0..10 {
            assert_eq!(easy.select_move(&board, Player::X), Ok(Position::BottomRight));
        }
    }

    #[test]
    fn test_covers_all_free_cells() {
        let board = Board::new();
        let mut easy = Easy::with_seed(42);
        let seen: HashSet<_> = (0..500)
            .map(|_| easy.select_move(&board, Player::X).unwrap())
            .collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = Easy::with_seed(99);
        let mut b = Easy::with_seed(a.seed());
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Player::O),
                b.select_move(&board, Player::O)
            );
        }
        assert_eq!(Easy::with_seed(5).seed(), 5);
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(
            Easy::with_seed(0).select_move(&board, Player::O),
            Err(MoveError::NoLegalMove)
        );
    }
}
