//! N×N tic-tac-toe against an exhaustive minimax opponent.

mod action;
mod controller;
mod invariants;
mod phases;
mod rules;
mod search;
mod types;

pub use action::{InvalidMoveError, Move};
pub use controller::{GameEvent, GameListener, TurnController};
pub use invariants::{
    AlternatingTurnInvariant, BoardShapeInvariant, GameInvariants, HistoryConsistentInvariant,
    Invariant, InvariantSet, InvariantViolation,
};
pub use phases::{Outcome, TurnState};
pub use rules::{ResolutionOrder, check_winner, evaluate, has_won, is_full, is_tie, winning_lines};
pub use search::{LOSS, SearchResult, TIE, WIN, best_move, best_move_on};
pub use types::{Board, Cell, DEFAULT_SIZE, GameState, MIN_SIZE, Player};
