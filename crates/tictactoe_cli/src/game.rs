//! Interactive game loop over any line-based reader and writer.

use crate::input::{self, Input};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe::{GameSession, MoveError, rules};
use tracing::{debug, instrument, warn};

/// Renders the board and whose move it is.
fn render(session: &GameSession, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", session.board())?;
    let outcome = session.outcome();
    if !outcome.is_terminal() {
        writeln!(out, "{} to move", session.turn())?;
        return Ok(());
    }

    if let Some(winner) = outcome.winner() {
        let line = rules::winning_line(session.board())
            .filter(|line| line.player == winner)
            .context("Won board without a winning line")?;
        let labels: Vec<_> = line.positions.iter().map(|p| p.label()).collect();
        writeln!(out, "{outcome} along {}", labels.join(", "))?;
    } else if outcome.is_draw() {
        writeln!(out, "{outcome}: the board is full")?;
    }
    writeln!(out, "Type r to play again or q to quit")?;
    Ok(())
}

/// Lets the computer move for as long as it holds the turn.
fn computer_moves(session: &mut GameSession, out: &mut impl Write) -> Result<()> {
    while session.is_computer_turn() {
        let position = session
            .play_computer_turn()
            .context("Computer failed to move")?;
        writeln!(out, "Computer plays {position}")?;
        render(session, out)?;
    }
    Ok(())
}

/// Runs the game until `q` or end of input.
#[instrument(skip_all, fields(mode = ?session.mode()))]
pub fn run(session: &mut GameSession, reader: impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Enter moves as \"row col\" (0-2). Commands: r restart, e/m/h difficulty, q quit"
    )?;
    render(session, out)?;
    computer_moves(session, out)?;

    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        debug!(%line, "Read input");

        match input::parse(&line) {
            Some(Input::Quit) => break,
            Some(Input::Move(row, col)) => match session.apply_move(row, col) {
                Ok(()) => {
                    render(session, out)?;
                    computer_moves(session, out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            Some(Input::Restart) => match session.restart() {
                Ok(()) => {
                    render(session, out)?;
                    computer_moves(session, out)?;
                }
                Err(MoveError::InvalidMove(reason)) => writeln!(out, "{reason}")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Some(Input::SetDifficulty(difficulty)) => match session.set_difficulty(difficulty) {
                Ok(()) => writeln!(out, "Difficulty set to {difficulty}")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            None => {
                warn!(%line, "Unrecognised input");
                writeln!(out, "Unrecognised input: {line:?}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
