//! Tic-tac-toe core - board, rules, sessions and a computer opponent
//!
//! This library holds the deterministic game logic. Rendering and input
//! handling belong to a front-end that feeds coordinates into a
//! [`GameSession`] and reads [`GameSession::current_state`] back.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of cells
//! - **Rules**: win/draw detection over a board
//! - **Session**: one match, turn alternation, restart
//! - **Opponent**: easy (random), medium (positional) and hard (minimax)
//!
//! # Example
//!
//! ```
//! use tictactoe::{Difficulty, GameSession, Outcome, Player};
//!
//! let mut session = GameSession::vs_computer(Player::O, Difficulty::Hard, None);
//! session.apply_move(0, 0)?;
//! let reply = session.play_computer_turn()?;
//! assert_eq!(reply.coords(), (1, 1));
//! assert_eq!(session.current_state().outcome, Outcome::InProgress);
//! # Ok::<(), tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]

mod action;
mod config;
mod contracts;
mod error;
mod invariants;
mod opponent;
mod outcome;
mod position;
mod session;
mod types;

pub mod rules;

// Crate-level exports - Game types
pub use action::Move;
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, Cell, Player};

// Crate-level exports - Errors
pub use error::{BoardParseError, MoveError};

// Crate-level exports - Rules
pub use rules::{evaluate, has_won};

// Crate-level exports - Session
pub use session::{GameMode, GameSession, GameSnapshot};

// Crate-level exports - Computer opponent
pub use opponent::{
    ComputerOpponent, Difficulty, Easy, Hard, Medium, ScoredMove, Strategy, compute_opponent_move,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlayMode};

// Crate-level exports - Contracts
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SessionInvariants};
