//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a game.
//! The turn controller checks them after every applied move in debug builds,
//! and each one is testable on its own.

use super::GameState;
use tracing::{instrument, warn};

pub mod alternating_turn;
pub mod board_shape;
pub mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use board_shape::BoardShapeInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    BoardShapeInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    if let Err(violations) = GameInvariants::check_all(state) {
        for violation in &violations {
            warn!(invariant = %violation.description, "Invariant violated");
        }
        debug_assert!(false, "Game invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, GameState, Move, Player};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let state = GameState::new(3).unwrap();
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut state = GameState::new(3).unwrap();
        for (player, index) in [(Player::Human, 0), (Player::Computer, 4), (Player::Human, 2)] {
            state.apply(Move::new(player, index)).unwrap();
        }
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = GameState::new(3).unwrap();
        state.apply(Move::new(Player::Human, 4)).unwrap();

        // A mark with no move behind it.
        state.board_mut().apply_move(0, Player::Computer).unwrap();

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            HistoryConsistentInvariant::description()
        );
        assert_eq!(state.board().get(0), Some(Cell::Occupied(Player::Computer)));
    }
}
