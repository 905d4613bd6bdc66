//! Exhaustive minimax search for the computer's move.
//!
//! Scores are always from the computer's point of view: the computer
//! maximizes, the human minimizes. The search is unbounded in depth with no
//! pruning and no transposition table, so it is only practical on small
//! boards.

use super::rules::has_won;
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Score of a board the computer has won.
pub const WIN: i8 = 1;
/// Score of a tied board.
pub const TIE: i8 = 0;
/// Score of a board the human has won.
pub const LOSS: i8 = -1;

/// The move chosen by the search and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    index: Option<usize>,
    score: i8,
}

impl SearchResult {
    /// Chosen cell, or `None` when the board was already terminal.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Value in `{-1, 0, 1}` from the computer's perspective.
    pub fn score(&self) -> i8 {
        self.score
    }
}

/// Terminal score of the board, if the game is over.
///
/// Human win is checked before computer win, then a full board.
fn terminal_score(board: &Board) -> Option<i8> {
    if has_won(board, Player::Human) {
        Some(LOSS)
    } else if has_won(board, Player::Computer) {
        Some(WIN)
    } else if board.is_full() {
        Some(TIE)
    } else {
        None
    }
}

/// Finds the optimal move for `player`.
///
/// Speculative moves are undone before returning, so the board is left
/// exactly as it was passed in. Among equally scored moves the lowest index
/// wins.
#[instrument(skip(board), fields(size = board.size(), empty = board.empty_cells().len()))]
pub fn best_move(board: &mut Board, player: Player) -> SearchResult {
    let mut nodes = 0u64;
    let result = minimax(board, player, &mut nodes);
    debug!(
        index = ?result.index,
        score = result.score,
        nodes,
        "Search complete"
    );
    result
}

/// Same as [`best_move`], searching a private copy of a shared board.
pub fn best_move_on(board: &Board, player: Player) -> SearchResult {
    let mut scratch = board.clone();
    best_move(&mut scratch, player)
}

fn minimax(board: &mut Board, player: Player, nodes: &mut u64) -> SearchResult {
    *nodes += 1;

    if let Some(score) = terminal_score(board) {
        return SearchResult { index: None, score };
    }

    let mut best: Option<SearchResult> = None;
    for index in board.empty_cells() {
        if let Err(e) = board.apply_move(index, player) {
            error!(index, error = %e, "Empty cell rejected a move");
            debug_assert!(false, "Empty cell {} rejected a move: {}", index, e);
            continue;
        }
        let score = minimax(board, player.opponent(), nodes).score;
        board.undo_move(index);

        let improves = match (best, player) {
            (None, _) => true,
            (Some(current), Player::Computer) => score > current.score,
            (Some(current), Player::Human) => score < current.score,
        };
        if improves {
            best = Some(SearchResult {
                index: Some(index),
                score,
            });
        }
    }

    // A non-terminal board always has an empty cell.
    best.unwrap_or(SearchResult {
        index: None,
        score: TIE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_move() {
        let mut board: Board = "XXX OO. ...".parse().unwrap();
        let result = best_move(&mut board, Player::Computer);
        assert_eq!(result.index(), None);
        assert_eq!(result.score(), LOSS);
    }

    #[test]
    fn test_full_board_scores_tie() {
        let mut board: Board = "XOX OXX OXO".parse().unwrap();
        let result = best_move(&mut board, Player::Human);
        assert_eq!(result.index(), None);
        assert_eq!(result.score(), TIE);
    }

    #[test]
    fn test_computer_takes_immediate_win() {
        let mut board: Board = "XX. OO. X..".parse().unwrap();
        let result = best_move(&mut board, Player::Computer);
        assert_eq!(result.index(), Some(5));
        assert_eq!(result.score(), WIN);
    }

    #[test]
    fn test_computer_blocks() {
        // Human threatens the top row; computer has no win of its own.
        let mut board: Board = "XX. .O. ...".parse().unwrap();
        let result = best_move(&mut board, Player::Computer);
        assert_eq!(result.index(), Some(2));
    }

    #[test]
    fn test_human_minimizes() {
        let mut board: Board = "XX. OO. ...".parse().unwrap();
        let result = best_move(&mut board, Player::Human);
        assert_eq!(result.index(), Some(2));
        assert_eq!(result.score(), LOSS);
    }

    #[test]
    fn test_lowest_index_breaks_ties() {
        // Both 2 and 5 win immediately for the computer; 2 comes first.
        let mut board: Board = "XX. OO. O.X".parse().unwrap();
        let result = best_move(&mut board, Player::Computer);
        assert_eq!(result.index(), Some(2));
        assert_eq!(result.score(), WIN);

        // Both remaining cells lose; the lower index is kept.
        let mut lost: Board = "XOX OXX .X.".parse().unwrap();
        let result = best_move(&mut lost, Player::Computer);
        assert_eq!(result.index(), Some(6));
        assert_eq!(result.score(), LOSS);
    }

    #[test]
    fn test_board_restored() {
        let mut board: Board = "X.. ... ...".parse().unwrap();
        let before = board.clone();
        let _ = best_move(&mut board, Player::Computer);
        assert_eq!(board, before);
    }

    #[test]
    fn test_chosen_cell_is_playable() {
        for (text, player) in [
            ("X.. ... ...", Player::Computer),
            ("XO. .X. ...", Player::Computer),
            ("O.. .X. ..X", Player::Human),
        ] {
            let mut board: Board = text.parse().unwrap();
            let before = board.clone();
            let result = best_move(&mut board, player);
            let index = result.index().unwrap();
            assert!(before.is_cell_empty(index), "{} chose {}", text, index);
            assert_eq!(board, before);
            assert!(board.apply_move(index, player).is_ok());
        }
    }
}
