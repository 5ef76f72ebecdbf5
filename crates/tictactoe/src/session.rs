//! Game session: one match at a time, restartable once it is over.

use super::action::Move;
use super::config::{GameConfig, PlayMode};
use super::contracts::{Contract, MoveContract};
use super::opponent::{ComputerOpponent, Difficulty};
use super::rules::evaluate;
use super::{Board, MoveError, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who sits on each side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans alternate at the same input.
    TwoPlayer,
    /// One side is played by the computer.
    VsComputer {
        /// Mark played by the computer.
        computer: Player,
        /// Strength of the computer.
        difficulty: Difficulty,
    },
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Copy of the board.
    pub board: Board,
    /// Player whose turn it is (the last mover once the game is over).
    pub turn: Player,
    /// Outcome derived from `board`.
    pub outcome: Outcome,
}

/// A single match between two players.
///
/// The session owns the authoritative board. Outcome is not stored: it is
/// derived from the board by the rules engine whenever it is read, so it can
/// never disagree with the board.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) history: Vec<Move>,
    opponent: Option<ComputerOpponent>,
}

impl GameSession {
    /// Creates a two-player session in the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            history: Vec::new(),
            opponent: None,
        }
    }

    /// Creates a session where `computer` is played by the computer opponent.
    ///
    /// `seed` makes [`Difficulty::Easy`] reproducible.
    #[instrument]
    pub fn vs_computer(computer: Player, difficulty: Difficulty, seed: Option<u64>) -> Self {
        info!(%computer, %difficulty, "Creating session against the computer");
        Self {
            opponent: Some(ComputerOpponent::new(computer, difficulty, seed)),
            ..Self::new()
        }
    }

    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        match config.mode() {
            PlayMode::TwoPlayer => Self::new(),
            PlayMode::Computer => {
                Self::vs_computer(*config.computer(), *config.difficulty(), *config.seed())
            }
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On success the outcome is re-derived and, only if the game goes on,
    /// the turn passes to the other player. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] for coordinates outside the grid
    /// - [`MoveError::InvalidMove`] once the game is over
    /// - [`MoveError::OccupiedCell`] if the cell is taken
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let position = Position::from_coords(row, col).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;
        self.apply_position(position)
    }

    /// Places the current player's mark at `position`.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::apply_move`], minus `OutOfRange`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_position(&mut self, position: Position) -> Result<(), MoveError> {
        let action = Move::new(self.turn, position);

        // Preconditions are checked before any state is touched
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Rejected move");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(position, action.player)?;
        self.history.push(action);

        match self.outcome() {
            Outcome::InProgress => {
                self.turn = self.turn.opponent();
                debug!(%action, next = %self.turn, "Move applied");
            }
            outcome => info!(%action, %outcome, "Game over"),
        }

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self);
            debug_assert!(checked.is_ok(), "{checked:?}");
        }

        Ok(())
    }

    /// Resets to an empty board with X to move, keeping the play mode.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] while the game is still in progress.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), MoveError> {
        if !self.outcome().is_terminal() {
            warn!("Restart requested mid-game");
            return Err(MoveError::invalid("Game is still in progress"));
        }
        self.board = Board::new();
        self.turn = Player::X;
        self.history.clear();
        info!("Game restarted");
        Ok(())
    }

    /// Board, turn and outcome as of now.
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Derives the outcome from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Accepted moves of the current match, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the play mode.
    pub fn mode(&self) -> GameMode {
        match &self.opponent {
            None => GameMode::TwoPlayer,
            Some(opponent) => GameMode::VsComputer {
                computer: opponent.player(),
                difficulty: opponent.difficulty(),
            },
        }
    }

    /// True when the game is on and the computer holds the turn.
    pub fn is_computer_turn(&self) -> bool {
        self.opponent
            .as_ref()
            .is_some_and(|opponent| opponent.player() == self.turn)
            && !self.outcome().is_terminal()
    }

    /// Changes the computer's strength; takes effect on its next move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] in a two-player session.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), MoveError> {
        let opponent = self
            .opponent
            .as_mut()
            .ok_or_else(|| MoveError::invalid("No computer opponent in a two-player game"))?;
        opponent.set_difficulty(difficulty);
        info!(%difficulty, "Difficulty changed");
        Ok(())
    }

    /// Lets the computer choose and play its move.
    ///
    /// The opponent works on a copy of the board; the move is then applied
    /// exactly like a human move. Returns the position played.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if there is no computer opponent,
    /// it is not the computer's turn, or the game is over.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play_computer_turn(&mut self) -> Result<Position, MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::invalid("Game is already over"));
        }
        let turn = self.turn;
        let snapshot = self.board;
        let opponent = self
            .opponent
            .as_mut()
            .ok_or_else(|| MoveError::invalid("No computer opponent in a two-player game"))?;
        if opponent.player() != turn {
            return Err(MoveError::invalid(format!("It is {turn}'s turn, not the computer's")));
        }
        let position = opponent.select_move(&snapshot)?;
        self.apply_position(position)?;
        Ok(position)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
