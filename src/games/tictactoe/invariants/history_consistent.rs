//! History consistency invariant: history matches occupied cells.

use super::super::{Cell, GameState};
use super::Invariant;

/// Invariant: every move in history owns its cell, and nothing else is filled.
///
/// The number of filled cells equals the number of turns taken.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let owned = state
            .history()
            .iter()
            .all(|mov| board.get(mov.index) == Some(Cell::Occupied(mov.player)));

        owned && board.filled_count() == state.turns()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
