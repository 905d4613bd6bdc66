//! Move events and move validation errors.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a cell index.
///
/// Moves are recorded in the controller's history and carried through
/// logging, so they can be inspected after the game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell index where the mark is placed.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell index of this move.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// A move that cannot be applied.
///
/// Rejection leaves the board and the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveError {
    /// The index lies outside the board.
    #[display("Cell {} is out of bounds (board has {} cells)", index, len)]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMoveError {}
