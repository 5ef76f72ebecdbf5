//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the session and the computer opponent share one source
//! of truth.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, has_won, winning_line};

use super::{Board, Outcome, Player};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// Both players holding a line at once cannot arise from legal play and is
/// treated as a defect in the caller.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    let x_won = has_won(board, Player::X);
    let o_won = has_won(board, Player::O);
    debug_assert!(!(x_won && o_won), "both players hold a line:\n{board}");

    match (x_won, o_won) {
        (true, _) => Outcome::Win(Player::X),
        (false, true) => Outcome::Win(Player::O),
        (false, false) if is_full(board) => Outcome::Draw,
        (false, false) => Outcome::InProgress,
    }
}

/// Whose move it is on a board reached by alternating play from X.
pub fn next_turn(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}
