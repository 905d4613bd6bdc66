//! Minimax tic-tac-toe engine.
//!
//! An N×N tic-tac-toe game between a human and a computer opponent that
//! plays by exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board**: grid of cells with apply/undo and empty-cell listing
//! - **Rules**: winning lines generated from the board size, tie detection
//! - **Search**: unbounded minimax, deterministic lowest-index tie-break
//! - **Controller**: turn state machine reporting to a [`GameListener`]
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{FirstMover, GameConfig, GameEvent, TurnController};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GameConfig::default().with_first_mover(FirstMover::Human);
//! let mut game = TurnController::new(config, Vec::<GameEvent>::new())?;
//! game.submit_human_move(4)?;
//! assert_eq!(game.listener().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod games;

// Crate-level exports - Configuration
pub use config::{FirstMover, GameConfig};
pub use error::ConfigurationError;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardShapeInvariant, Cell, DEFAULT_SIZE, GameEvent,
    GameInvariants, GameListener, GameState, HistoryConsistentInvariant, InvalidMoveError,
    Invariant, InvariantSet, InvariantViolation, LOSS, MIN_SIZE, Move, Outcome, Player,
    ResolutionOrder, SearchResult, TIE, TurnController, TurnState, WIN, best_move, best_move_on,
    check_winner, evaluate, has_won, is_full, is_tie, winning_lines,
};
