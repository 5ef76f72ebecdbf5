//! Move suggestions for a board given on the command line.

use anyhow::{Context, Result};
use std::io::Write;
use tictactoe::{Board, Difficulty, Hard, compute_opponent_move, rules};
use tracing::instrument;

/// Prints the board and the move `difficulty` would play for the side to move.
///
/// At [`Difficulty::Hard`] every candidate is listed with its minimax score.
#[instrument(skip(out))]
pub fn run(difficulty: Difficulty, cells: &str, out: &mut impl Write) -> Result<()> {
    let board: Board = cells.parse().context("Invalid board")?;
    writeln!(out, "{board}")?;

    let outcome = rules::evaluate(&board);
    if outcome.is_terminal() {
        writeln!(out, "{outcome}")?;
        return Ok(());
    }

    let player = rules::next_turn(&board);
    if difficulty == Difficulty::Hard {
        for scored in Hard.scored_moves(&board, player) {
            writeln!(out, "  {:<22} {:>3}", scored.position.to_string(), scored.score)?;
        }
    }
    let position =
        compute_opponent_move(&board, player, difficulty).context("No move to suggest")?;
    writeln!(out, "{player} should play {position}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(difficulty: Difficulty, cells: &str) -> Result<String> {
        let mut out = Vec::new();
        run(difficulty, cells, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_suggests_block() {
        let output = hint(Difficulty::Hard, "XX..O....").unwrap();
        assert!(output.contains("O should play Top-right (0, 2)"));
        assert!(output.lines().any(|l| l.trim_end().ends_with("-10")));
    }

    #[test]
    fn test_medium_lists_no_scores() {
        let output = hint(Difficulty::Medium, ".........").unwrap();
        assert!(output.ends_with("X should play Center (1, 1)\n"));
        assert!(!output.contains("-10"));
    }

    #[test]
    fn test_terminal_board_prints_outcome() {
        let output = hint(Difficulty::Hard, "XXXOO....").unwrap();
        assert!(output.ends_with("Player X wins\n"));
        assert!(!output.contains("should play"));

        let output = hint(Difficulty::Easy, "XOXXOOOXX").unwrap();
        assert!(output.ends_with("It's a tie\n"));
    }

    #[test]
    fn test_bad_boards_are_errors() {
        assert!(hint(Difficulty::Hard, "XO").is_err());
        assert!(hint(Difficulty::Hard, "XXXOOO...").is_err());
        assert!(hint(Difficulty::Hard, "OOO......").is_err());
    }
}
