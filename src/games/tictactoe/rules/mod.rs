//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage so the
//! search and the turn controller share one definition of a finished game.

pub mod draw;
pub mod win;

pub use draw::{ResolutionOrder, evaluate, is_full, is_tie};
pub use win::{check_winner, has_won, winning_lines};
