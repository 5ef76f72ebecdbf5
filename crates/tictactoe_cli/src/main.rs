//! Tic-tac-toe command-line front-end.
//!
//! Plays interactive games on stdin/stdout and suggests moves for a board.

#![warn(missing_docs)]

mod cli;
mod game;
mod hint;
mod input;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe::{Difficulty, GameConfig, GameSession, PlayMode, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            computer,
            seed,
            config,
        } => run_play(mode, difficulty, computer, seed, config),
        Command::Hint { difficulty, cells } => {
            hint::run(difficulty, &cells, &mut std::io::stdout())
        }
    }
}

/// Run an interactive game
#[instrument]
fn run_play(
    mode: Option<PlayMode>,
    difficulty: Option<Difficulty>,
    computer: Option<Player>,
    seed: Option<u64>,
    config: Option<PathBuf>,
) -> Result<()> {
    let mut game_config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(mode) = mode {
        game_config = game_config.with_mode(mode);
    }
    if let Some(difficulty) = difficulty {
        game_config = game_config.with_difficulty(difficulty);
    }
    if let Some(computer) = computer {
        game_config = game_config.with_computer(computer);
    }
    if let Some(seed) = seed {
        game_config = game_config.with_seed(seed);
    }

    info!(?game_config, "Starting game");
    let mut session = GameSession::from_config(&game_config);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    game::run(&mut session, stdin.lock(), &mut stdout)
}
