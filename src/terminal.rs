//! Plain-text game listener for the terminal.

use minimax_tictactoe::{GameListener, Outcome, Player};

/// Prints moves and results to stdout.
#[derive(Debug, Default)]
pub struct TerminalListener;

impl GameListener for TerminalListener {
    fn on_cell_updated(&mut self, index: usize, player: Player) {
        println!("{} ({}) takes cell {}", player, player.mark(), index + 1);
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        println!();
        println!("{}", outcome.message());
    }
}
