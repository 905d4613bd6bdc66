//! tictactoe - play against a minimax opponent in the terminal.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use minimax_tictactoe::{
    Board, FirstMover, GameConfig, Player, ResolutionOrder, TurnController, best_move_on,
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use terminal::TerminalListener;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            first,
            resolution,
            config,
            board,
        } => run_play(config, size, first, resolution, board),
        Command::BestMove {
            board,
            player,
            json,
        } => run_best_move(&board, player, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: PathBuf,
    size: Option<usize>,
    first: Option<FirstMover>,
    resolution: Option<ResolutionOrder>,
    board: Option<String>,
) -> Result<()> {
    let config = load_config(&config_path, size, first, resolution)?;
    let mut game = match board {
        Some(board) => TurnController::resume(config, board.parse()?, TerminalListener)?,
        None => TurnController::new(config, TerminalListener)?,
    };

    println!("You are X. Enter a cell number, r to reset, q to quit.");
    println!("{}", game.board().display());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if game.outcome().is_finished() {
            print!("r to play again, q to quit: ");
        } else {
            print!("Your move (1-{}): ", game.board().len());
        }
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "q" | "quit" => break,
            "r" | "reset" => {
                let size = game.board().size();
                game.reset(size)?;
                println!("{}", game.board().display());
            }
            input => match input.parse::<usize>() {
                Ok(cell) if cell >= 1 => match game.submit_human_move(cell - 1) {
                    Ok(_) => println!("{}", game.board().display()),
                    Err(e) => {
                        warn!(error = %e, cell, "Move rejected");
                        println!("{}", e);
                    }
                },
                _ => println!("Enter a cell number between 1 and {}", game.board().len()),
            },
        }
    }

    info!("Leaving game");
    Ok(())
}

/// Print the minimax choice for a position
#[instrument]
fn run_best_move(board: &str, player: Player, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let result = best_move_on(&board, player);

    if json {
        let report = serde_json::json!({
            "size": board.size(),
            "player": player,
            "index": result.index(),
            "score": result.score(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", board.display());
    match result.index() {
        Some(index) => println!(
            "{} should play cell {} (index {}), score {}",
            player,
            index + 1,
            index,
            result.score()
        ),
        None => println!("Game is over, score {}", result.score()),
    }
    Ok(())
}

/// Loads the config file if present, then applies command-line overrides.
#[instrument(skip(config_path))]
fn load_config(
    config_path: &Path,
    size: Option<usize>,
    first: Option<FirstMover>,
    resolution: Option<ResolutionOrder>,
) -> Result<GameConfig> {
    let mut config = if config_path.exists() {
        GameConfig::from_file(config_path)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        GameConfig::default()
    };

    if let Some(size) = size {
        config = config.with_size(size);
    }
    if let Some(first) = first {
        config = config.with_first_mover(first);
    }
    if let Some(resolution) = resolution {
        config = config.with_resolution(resolution);
    }

    config.validate()?;
    Ok(config)
}
