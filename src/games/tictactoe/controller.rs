//! Turn controller: alternates human and computer turns and reports results.
//!
//! The controller is the only boundary a UI needs. Human moves come in
//! through [`TurnController::submit_human_move`]; every applied move and the
//! final outcome go out through a [`GameListener`]. The computer's reply is
//! searched and applied inside the same call as the human move that
//! triggered it.

use super::action::{InvalidMoveError, Move};
use super::invariants::assert_invariants;
use super::phases::{Outcome, TurnState};
use super::rules::{self, check_winner};
use super::search::best_move_on;
use super::types::{Board, DEFAULT_SIZE, GameState, Player};
use crate::config::GameConfig;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Receives notifications from a running game.
pub trait GameListener {
    /// Called once per applied move, human or computer.
    fn on_cell_updated(&mut self, index: usize, player: Player);

    /// Called exactly once per game, with a finished outcome.
    fn on_game_ended(&mut self, outcome: Outcome);
}

/// A notification delivered to a [`GameListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    CellUpdated {
        /// Cell index.
        index: usize,
        /// Owner of the new mark.
        player: Player,
    },
    /// The game finished.
    GameEnded(Outcome),
}

/// Records every notification in order.
impl GameListener for Vec<GameEvent> {
    fn on_cell_updated(&mut self, index: usize, player: Player) {
        self.push(GameEvent::CellUpdated { index, player });
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        self.push(GameEvent::GameEnded(outcome));
    }
}

/// Ignores every notification.
impl GameListener for () {
    fn on_cell_updated(&mut self, _index: usize, _player: Player) {}

    fn on_game_ended(&mut self, _outcome: Outcome) {}
}

/// Drives one game session between the human and the minimax opponent.
#[derive(Debug)]
pub struct TurnController<L: GameListener> {
    config: GameConfig,
    state: GameState,
    turn: TurnState,
    first_mover: Player,
    listener: L,
}

impl<L: GameListener> TurnController<L> {
    /// Starts a new game.
    ///
    /// If the computer opens, its first move is made and reported before
    /// this returns.
    #[instrument(skip(listener))]
    pub fn new(config: GameConfig, listener: L) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let state = GameState::new(*config.size())?;
        let first_mover = config.first_mover().resolve();
        let mut controller = Self {
            config,
            state,
            turn: TurnState::AwaitingHuman,
            first_mover,
            listener,
        };
        controller.start();
        Ok(controller)
    }

    /// Resumes a game from `board`, with the human to move.
    ///
    /// The board's own dimension replaces the configured size. Finished
    /// boards and boards where it is not the human's turn are rejected.
    #[instrument(skip(board, listener))]
    pub fn resume(config: GameConfig, board: Board, listener: L) -> Result<Self, ConfigurationError> {
        let config = config.with_size(board.size());
        config.validate()?;
        if check_winner(&board).is_some() || board.is_full() {
            return Err(ConfigurationError::new("Cannot resume a finished board"));
        }

        let state = GameState::from_board(board)?;
        let first_mover = state
            .history()
            .first()
            .map(|mov| mov.player)
            .unwrap_or(Player::Human);
        assert_invariants(&state);
        info!(
            size = state.board().size(),
            turns = state.turns(),
            "Game resumed"
        );

        Ok(Self {
            config,
            state,
            turn: TurnState::AwaitingHuman,
            first_mover,
            listener,
        })
    }

    /// Submits the human's move at `index`.
    ///
    /// On success the returned state reflects the human move and, if the game
    /// went on, the computer's reply. On error nothing changed and no
    /// listener callback fired.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<TurnState, InvalidMoveError> {
        // ComputerThinking never outlives `computer_turn`.
        if let TurnState::Finished(_) = self.turn {
            return Err(InvalidMoveError::GameOver);
        }

        let outcome = self.play(Move::new(Player::Human, index))?;
        if outcome == Outcome::InProgress {
            self.turn = TurnState::ComputerThinking;
            self.computer_turn();
        }
        Ok(self.turn)
    }

    /// Discards the current game and starts a fresh one of the given size.
    ///
    /// The current game is kept if `size` is invalid.
    #[instrument(skip(self))]
    pub fn reset(&mut self, size: usize) -> Result<(), ConfigurationError> {
        let config = self.config.clone().with_size(size);
        config.validate()?;
        self.state = GameState::new(size)?;
        self.config = config;
        self.first_mover = self.config.first_mover().resolve();
        self.turn = TurnState::AwaitingHuman;
        self.start();
        Ok(())
    }

    /// Resets to a fresh 3×3 game.
    pub fn reset_default(&mut self) -> Result<(), ConfigurationError> {
        self.reset(DEFAULT_SIZE)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the board and move history.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the controller state.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Outcome so far; `InProgress` until the game finishes.
    pub fn outcome(&self) -> Outcome {
        self.turn.outcome().unwrap_or(Outcome::InProgress)
    }

    /// Who opened this game.
    pub fn first_mover(&self) -> Player {
        self.first_mover
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Returns the listener mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the controller, returning the listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    fn start(&mut self) {
        info!(
            size = self.board().size(),
            first_mover = %self.first_mover,
            "Game started"
        );
        if self.first_mover == Player::Computer {
            self.turn = TurnState::ComputerThinking;
            self.computer_turn();
        }
    }

    /// Applies a move, notifies the listener and resolves the outcome.
    fn play(&mut self, mov: Move) -> Result<Outcome, InvalidMoveError> {
        self.state.apply(mov)?;
        assert_invariants(&self.state);
        debug!(index = mov.index, player = %mov.player, "Move applied");
        self.listener.on_cell_updated(mov.index, mov.player);

        let outcome = rules::evaluate(self.state.board(), mov.player, *self.config.resolution());
        if outcome.is_finished() {
            self.finish(outcome);
        }
        Ok(outcome)
    }

    fn computer_turn(&mut self) {
        let result = best_move_on(self.state.board(), Player::Computer);
        let played = result
            .index()
            .map(|index| self.play(Move::new(Player::Computer, index)));

        match played {
            Some(Ok(Outcome::InProgress)) => self.turn = TurnState::AwaitingHuman,
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                error!(error = %e, "Search chose an unplayable cell");
                self.finish_from_board();
            }
            None => {
                error!("Computer asked to move on a finished board");
                self.finish_from_board();
            }
        }
    }

    fn finish_from_board(&mut self) {
        let outcome = check_winner(self.state.board())
            .map(Outcome::Win)
            .unwrap_or(Outcome::Tie);
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, turns = self.state.turns(), "Game ended");
        self.turn = TurnState::Finished(outcome);
        self.listener.on_game_ended(outcome);
    }
}
