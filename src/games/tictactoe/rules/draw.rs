//! Tie detection and outcome resolution.

use super::super::{Board, Outcome, Player};
use super::win::{check_winner, has_won};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which a finished board is classified after a move.
///
/// Only matters for a move that fills the last empty cell and completes
/// a line at the same time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionOrder {
    /// A completed line wins even on a full board.
    #[default]
    WinFirst,
    /// A full board is a tie even if the last move completed a line.
    TieFirst,
}

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

/// Classifies the board right after `mover` played.
///
/// Only `mover` can have completed a line with that move, so only their
/// lines are checked.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player, order: ResolutionOrder) -> Outcome {
    let won = has_won(board, mover);
    let full = board.is_full();
    match order {
        ResolutionOrder::WinFirst if won => Outcome::Win(mover),
        ResolutionOrder::TieFirst if full => Outcome::Tie,
        _ if won => Outcome::Win(mover),
        _ if full => Outcome::Tie,
        _ => Outcome::InProgress,
    }
}
