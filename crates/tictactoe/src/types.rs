//! Core domain types for tic-tac-toe.

use super::error::{BoardParseError, MoveError};
use super::position::Position;
use super::rules::has_won;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order. A set cell is never cleared again;
/// the only way back to an empty grid is a fresh [`Board::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Side length of the grid.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if either coordinate is outside the grid.
    #[instrument(skip(self))]
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Ok(self.cell(Position::from_coords(row, col)?))
    }

    /// Marks `(row, col)` for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for coordinates outside the grid and
    /// [`MoveError::OccupiedCell`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        self.place(Position::from_coords(row, col)?, player)
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Marks the given position for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OccupiedCell`] if the cell already holds a mark.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::OccupiedCell(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(player);
        Ok(())
    }

    /// Returns a copy of this board with `pos` marked for `player`.
    ///
    /// Callers must only pass empty positions (e.g. from [`Board::legal_moves`]).
    pub(crate) fn with_mark(mut self, pos: Position, player: Player) -> Self {
        debug_assert!(self.is_empty(pos), "{pos} is already occupied");
        self.cells[pos.to_index()] = Cell::Occupied(player);
        self
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// All empty positions in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                let symbol = match self.cells[row * Self::SIZE + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                write!(f, "{symbol}")?;
                if col < Self::SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < Self::SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses a compact 9-character board such as `"X.O.X...O"`.
///
/// `X`/`O` (either case) are marks, `.`, `-` or `_` are empty cells and
/// whitespace is ignored. The position must be reachable by alternating play
/// with X first: balanced mark counts, at most one player holding a line, and
/// the winner being the last to move.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != 9 {
            return Err(BoardParseError::new(format!(
                "expected 9 cells, found {}",
                symbols.len()
            )));
        }

        let mut board = Board::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            board.cells[index] = match symbol {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '-' | '_' => Cell::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected symbol '{other}' at cell {index}"
                    )));
                }
            };
        }

        let (x, o) = (board.count(Player::X), board.count(Player::O));
        if x != o && x != o + 1 {
            return Err(BoardParseError::new(format!(
                "unreachable mark counts: {x} X and {o} O"
            )));
        }

        match (has_won(&board, Player::X), has_won(&board, Player::O)) {
            (true, true) => {
                return Err(BoardParseError::new("both players hold a line"));
            }
            (true, false) if x != o + 1 => {
                return Err(BoardParseError::new(format!(
                    "X cannot have won with {x} X and {o} O"
                )));
            }
            (false, true) if x != o => {
                return Err(BoardParseError::new(format!(
                    "O cannot have won with {x} X and {o} O"
                )));
            }
            _ => {}
        }

        Ok(board)
    }
}
