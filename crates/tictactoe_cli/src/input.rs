//! Parsing of interactive commands typed during a game.

use tictactoe::Difficulty;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at `(row, col)`.
    Move(usize, usize),
    /// Start a new game once the current one is over.
    Restart,
    /// Change the computer's strength.
    SetDifficulty(Difficulty),
    /// Leave the game.
    Quit,
}

/// Parses a line such as `"1 2"`, `"1,2"`, `"r"`, `"h"` or `"q"`.
///
/// Returns `None` for anything unrecognised.
pub fn parse(line: &str) -> Option<Input> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "q" | "quit" => return Some(Input::Quit),
        "r" | "restart" => return Some(Input::Restart),
        "e" => return Some(Input::SetDifficulty(Difficulty::Easy)),
        "m" => return Some(Input::SetDifficulty(Difficulty::Medium)),
        "h" => return Some(Input::SetDifficulty(Difficulty::Hard)),
        _ => {}
    }
    if let Ok(difficulty) = line.parse::<Difficulty>() {
        return Some(Input::SetDifficulty(difficulty));
    }

    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Input::Move(row, col))
}
