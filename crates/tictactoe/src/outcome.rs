//! Outcome of a match as derived from the board.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// An outcome is never stored next to the board it describes; it is
/// recomputed by [`crate::evaluate`] whenever it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Player completed a line.
    Win(Player),
    /// Board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "It's a tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Outcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_draw());
        assert!(!Outcome::InProgress.is_draw());
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Win(Player::X).is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Win(Player::X).to_string(), "Player X wins");
        assert_eq!(Outcome::Draw.to_string(), "It's a tie");
    }
}
