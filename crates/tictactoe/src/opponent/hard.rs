//! Hard opponent: exhaustive minimax over the remaining game tree.

use super::Strategy;
use crate::rules::has_won;
use crate::{Board, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Terminal score of a won game; a loss scores the negation, a draw zero.
pub const WIN_SCORE: i32 = 10;

/// A legal move together with its minimax value for the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Candidate position.
    pub position: Position,
    /// `WIN_SCORE`, `-WIN_SCORE` or `0` under perfect play from here.
    pub score: i32,
}

/// Plays perfectly by searching every line of play to the end.
///
/// The player asked to move is the maximizer and its opponent the minimizer.
/// Scores carry no depth discount, so a slow win ranks with a fast one.
/// Among equally scored moves the first in row-major order is chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hard;

impl Hard {
    /// Minimax value of every legal move for `player`, in row-major order.
    #[instrument(skip(self, board))]
    pub fn scored_moves(&self, board: &Board, player: Player) -> Vec<ScoredMove> {
        let mut nodes = 0u64;
        let scored: Vec<ScoredMove> = board
            .legal_moves()
            .into_iter()
            .map(|position| ScoredMove {
                position,
                score: minimax(
                    &board.with_mark(position, player),
                    player.opponent(),
                    player,
                    &mut nodes,
                ),
            })
            .collect();
        debug!(nodes, candidates = scored.len(), "Minimax search finished");
        scored
    }
}

impl Strategy for Hard {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, MoveError> {
        self.scored_moves(board, player)
            .into_iter()
            .fold(None, |best: Option<ScoredMove>, candidate| match best {
                Some(best) if best.score >= candidate.score => Some(best),
                _ => Some(candidate),
            })
            .map(|best| best.position)
            .ok_or(MoveError::NoLegalMove)
    }
}

/// Value of `board` for `maximizer` with `to_move` about to play.
///
/// Each child is a copy of the board, so nothing needs undoing.
fn minimax(board: &Board, to_move: Player, maximizer: Player, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if has_won(board, maximizer) {
        return WIN_SCORE;
    }
    if has_won(board, maximizer.opponent()) {
        return -WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let mut best: Option<i32> = None;
    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }
        let score = minimax(
            &board.with_mark(position, to_move),
            to_move.opponent(),
            maximizer,
            nodes,
        );
        best = Some(match best {
            None => score,
            Some(best) if to_move == maximizer => best.max(score),
            Some(best) => best.min(score),
        });
    }
    best.unwrap_or(0)
}
