//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use minimax_tictactoe::{FirstMover, Player, ResolutionOrder};
use std::path::PathBuf;

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play N×N tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Board dimension (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Who moves first (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<FirstMover>,

        /// How a move that fills the board and completes a line is scored
        #[arg(long, value_enum)]
        resolution: Option<ResolutionOrder>,

        /// Path to a TOML game config; defaults are used if it is missing
        #[arg(long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Resume from a position such as "XX.OO...." with the human to move
        #[arg(long)]
        board: Option<String>,
    },

    /// Print the minimax choice for a position
    BestMove {
        /// Board such as "XX.OO...." (X human, O computer, . empty)
        #[arg(long)]
        board: String,

        /// Side to move
        #[arg(long, value_enum, default_value = "computer")]
        player: Player,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
