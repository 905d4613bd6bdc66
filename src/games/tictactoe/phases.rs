//! Game outcome and turn controller states.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of a game, or the lack of one yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won and moves remain.
    InProgress,
    /// Player completed a line.
    Win(Player),
    /// Board filled without a winner.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns true if the game ended in a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }

    /// Returns true once the game has ended.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Message shown to the human when the game ends.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::InProgress => "GAME IN PROGRESS",
            Outcome::Win(Player::Human) => "GOOD JOB, YOU WON",
            Outcome::Win(Player::Computer) => "YOU ARE A FAILURE",
            Outcome::Tie => "YOU HAVE A TIE",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// State of the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the human to submit a move.
    AwaitingHuman,
    /// The computer is searching for its reply.
    ComputerThinking,
    /// The game has ended; terminal.
    Finished(Outcome),
}

impl TurnState {
    /// Returns the outcome if the game has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            TurnState::Finished(outcome) => Some(*outcome),
            TurnState::AwaitingHuman | TurnState::ComputerThinking => None,
        }
    }
}
