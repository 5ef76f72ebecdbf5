//! Computer opponent for tic-tac-toe.
//!
//! Three interchangeable strategies pick a move for a given player on a
//! board snapshot. None of them mutate the board they are handed.

mod easy;
mod hard;
mod medium;

pub use easy::Easy;
pub use hard::{Hard, ScoredMove};
pub use medium::Medium;

use super::{Board, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move-selection procedure.
pub trait Strategy {
    /// Picks a move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] when the board is full.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, MoveError>;
}

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Center, then corners, then the first free cell.
    #[default]
    Medium,
    /// Exhaustive minimax; never loses.
    Hard,
}

/// Picks a move for `player` on `board` at the given difficulty.
///
/// Easy draws from a freshly seeded generator on every call; use
/// [`ComputerOpponent`] for a reproducible sequence.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] when the board is full.
#[instrument(skip(board))]
pub fn compute_opponent_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
) -> Result<Position, MoveError> {
    match difficulty {
        Difficulty::Easy => Easy::from_random().select_move(board, player),
        Difficulty::Medium => Medium.select_move(board, player),
        Difficulty::Hard => Hard.select_move(board, player),
    }
}

/// A computer player bound to one mark.
///
/// Owns the random generator used at [`Difficulty::Easy`] so that a seeded
/// opponent replays the same moves.
#[derive(Debug, Clone)]
pub struct ComputerOpponent {
    player: Player,
    difficulty: Difficulty,
    easy: Easy,
}

impl ComputerOpponent {
    /// Creates an opponent playing `player`, seeded from `seed` when given.
    #[instrument]
    pub fn new(player: Player, difficulty: Difficulty, seed: Option<u64>) -> Self {
        let easy = match seed {
            Some(seed) => Easy::with_seed(seed),
            None => Easy::from_random(),
        };
        debug!(seed = easy.seed(), "Computer opponent seeded");
        Self {
            player,
            difficulty,
            easy,
        }
    }

    /// Mark this opponent plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty used for subsequent moves.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Picks this opponent's move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] when the board is full.
    #[instrument(skip(self, board), fields(player = %self.player, difficulty = %self.difficulty))]
    pub fn select_move(&mut self, board: &Board) -> Result<Position, MoveError> {
        let position = match self.difficulty {
            Difficulty::Easy => self.easy.select_move(board, self.player),
            Difficulty::Medium => Medium.select_move(board, self.player),
            Difficulty::Hard => Hard.select_move(board, self.player),
        }?;
        debug!(%position, "Computer selected move");
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::from_str("hard"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("Easy"), Ok(Difficulty::Easy));
        assert!(Difficulty::from_str("impossible").is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_every_difficulty_rejects_full_board() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                compute_opponent_move(&board, Player::O, difficulty),
                Err(MoveError::NoLegalMove)
            );
        }
    }

    #[test]
    fn test_every_difficulty_returns_legal_move() {
        let board: Board = "XO..X....".parse().unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let pos = compute_opponent_move(&board, Player::O, difficulty).unwrap();
            assert!(board.is_empty(pos), "{difficulty} picked occupied {pos}");
        }
    }

    #[test]
    fn test_seeded_opponents_agree() {
        let board = Board::new();
        let mut a = ComputerOpponent::new(Player::O, Difficulty::Easy, Some(7));
        let mut b = ComputerOpponent::new(Player::O, Difficulty::Easy, Some(7));
        for _ in 0..20 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }

    #[test]
    fn test_set_difficulty() {
        let mut opponent = ComputerOpponent::new(Player::O, Difficulty::Easy, Some(1));
        opponent.set_difficulty(Difficulty::Medium);
        assert_eq!(opponent.difficulty(), Difficulty::Medium);
        assert_eq!(opponent.select_move(&Board::new()), Ok(Position::Center));
    }
}
