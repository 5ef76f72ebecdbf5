//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show the X, O, X, O, ... pattern. While the game is
/// on, the turn belongs to the player after the last mover; once it is
/// over, the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(game: &GameSession) -> bool {
        let history = game.history();

        let Some(last) = history.last() else {
            return game.turn() == Player::X;
        };

        if history[0].player != Player::X {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let expected = if game.outcome().is_terminal() {
            last.player
        } else {
            last.player.opponent()
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
