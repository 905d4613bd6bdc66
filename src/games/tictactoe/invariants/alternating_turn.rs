//! Alternating turn invariant: sides take turns, whoever started.

use super::super::GameState;
use super::Invariant;

/// Invariant: no player moves twice in a row.
///
/// Either side may open the game, so only consecutive moves are compared.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .all(|pair| pair[0].player != pair[1].player)
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
