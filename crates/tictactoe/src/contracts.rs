//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::MoveError;
use super::action::Move;
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::session::GameSession;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must not be won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `InvalidMove` once the outcome is terminal.
    #[instrument(skip(game))]
    pub fn check(game: &GameSession) -> Result<(), MoveError> {
        if game.outcome().is_terminal() {
            Err(MoveError::invalid("Game is already over"))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `OccupiedCell` if the target is taken.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameSession) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::OccupiedCell(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `InvalidMove` if someone moves out of turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameSession) -> Result<(), MoveError> {
        if mov.player != game.turn() {
            Err(MoveError::invalid(format!("It's not {}'s turn", mov.player)))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is on, the cell is free and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameSession) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Cell must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one move was appended
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(game: &GameSession, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match SessionInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if after.history().len() != before.history().len() + 1
            || !after.history().starts_with(before.history())
        {
            violations.push(InvariantViolation::new(
                "A move appends exactly one history entry",
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
