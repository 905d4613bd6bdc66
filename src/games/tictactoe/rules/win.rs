//! Win detection logic for tic-tac-toe.
//!
//! Lines are derived from the board dimension: every row, every column
//! and the two diagonals, `2 * size + 2` lines in total.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// A line described by its first cell and the stride between cells.
#[derive(Debug, Clone, Copy)]
struct LineSpec {
    start: usize,
    step: usize,
}

fn line_specs(size: usize) -> impl Iterator<Item = LineSpec> {
    let rows = (0..size).map(move |r| LineSpec {
        start: r * size,
        step: 1,
    });
    let cols = (0..size).map(move |c| LineSpec { start: c, step: size });
    let diagonals = [
        LineSpec {
            start: 0,
            step: size + 1,
        },
        LineSpec {
            start: size - 1,
            step: size - 1,
        },
    ];
    rows.chain(cols).chain(diagonals)
}

/// Returns every winning line of a `size×size` board as cell indices.
///
/// Rows first, then columns, then the main and anti diagonal.
#[instrument]
pub fn winning_lines(size: usize) -> Vec<Vec<usize>> {
    if size == 0 {
        return Vec::new();
    }
    line_specs(size)
        .map(|spec| (0..size).map(|k| spec.start + k * spec.step).collect())
        .collect()
}

/// True iff some line is fully occupied by `player`.
pub fn has_won(board: &Board, player: Player) -> bool {
    let size = board.size();
    let cells = board.cells();
    let target = Cell::Occupied(player);
    line_specs(size).any(|spec| (0..size).all(|k| cells[spec.start + k * spec.step] == target))
}

/// Returns the player holding a complete line, if any.
///
/// The human is checked first, matching the search's terminal order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    <Player as strum::IntoEnumIterator>::iter().find(|&player| has_won(board, player))
}
