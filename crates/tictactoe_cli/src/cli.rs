//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe::{Difficulty, PlayMode, Player};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe on the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin
    Play {
        /// Game mode: two-player or computer (overrides config)
        #[arg(short, long)]
        mode: Option<PlayMode>,

        /// Computer strength: easy, medium or hard (overrides config)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark played by the computer (overrides config)
        #[arg(long)]
        computer: Option<Player>,

        /// Seed for the easy opponent
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Ask the computer for a move on a given board
    Hint {
        /// Strength of the suggestion
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Nine cells in row-major order, using X, O and '.' (e.g. "X...O....")
        cells: String,
    },
}
