//! Board shape invariant: the cell count matches the dimension.

use super::super::GameState;
use super::Invariant;

/// Invariant: the board holds exactly `size * size` cells.
pub struct BoardShapeInvariant;

impl Invariant<GameState> for BoardShapeInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        board.len() == board.size() * board.size()
    }

    fn description() -> &'static str {
        "Board holds exactly size * size cells"
    }
}
