//! Core domain types for tic-tac-toe.

use super::action::{InvalidMoveError, Move};
use super::invariants::{GameInvariants, InvariantSet};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Smallest board dimension with meaningful winning lines.
pub const MIN_SIZE: usize = 3;

/// Board dimension used when none is given.
pub const DEFAULT_SIZE: usize = 3;

/// Side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Player {
    /// The human, playing `X`.
    Human,
    /// The minimax opponent, playing `O`.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Returns the mark drawn for this player.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }

    /// Parses a mark back into a player.
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark.to_ascii_uppercase() {
            'X' => Some(Player::Human),
            'O' => Some(Player::Computer),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// Square `size×size` board, cells in row-major order.
///
/// Deserialization goes through the same checks as [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigurationError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.size, raw.cells)
    }
}

impl Board {
    /// Creates an empty board of the given dimension.
    ///
    /// Fails when `size` is below [`MIN_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigurationError> {
        if size < MIN_SIZE {
            return Err(ConfigurationError::new(format!(
                "Board size must be at least {}, got {}",
                MIN_SIZE, size
            )));
        }
        let len = size.checked_mul(size).ok_or_else(|| {
            ConfigurationError::new(format!("Board size {} is too large", size))
        })?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Builds a board from existing cells, checking the dimension first.
    fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, ConfigurationError> {
        if size < MIN_SIZE {
            return Err(ConfigurationError::new(format!(
                "Board size must be at least {}, got {}",
                MIN_SIZE, size
            )));
        }
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(ConfigurationError::new(format!(
                "Board of size {} cannot hold {} cells",
                size,
                cells.len()
            )));
        }
        Ok(Self { size, cells })
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells (`size * size`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true when no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Empty)
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_cell_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Places `player`'s mark at `index`.
    ///
    /// The cell must be in range and empty; the board is untouched on error.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), InvalidMoveError> {
        let len = self.len();
        match self.cells.get_mut(index) {
            None => Err(InvalidMoveError::OutOfBounds { index, len }),
            Some(Cell::Occupied(_)) => Err(InvalidMoveError::CellOccupied(index)),
            Some(cell) => {
                *cell = Cell::Occupied(player);
                Ok(())
            }
        }
    }

    /// Restores the cell at `index` to empty.
    ///
    /// Only the search calls this, always on a cell it just filled.
    pub fn undo_move(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let width = self.len().to_string().len();
        let separator = vec!["-".repeat(width); self.size].join("+");
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let index = row * self.size + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(player) => player.mark().to_string(),
                };
                result.push_str(&format!("{:>width$}", symbol, width = width));
                if col + 1 < self.size {
                    result.push('|');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
                result.push_str(&separator);
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![Cell::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

/// Board plus the moves that produced it.
///
/// A deserialized state must satisfy every game invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    history: Vec<Move>,
}

#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    history: Vec<Move>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = ConfigurationError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            board: raw.board,
            history: raw.history,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            let reasons: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            ConfigurationError::new(format!("Inconsistent game state: {}", reasons.join("; ")))
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a fresh state with an empty board of the given dimension.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigurationError> {
        Ok(Self {
            board: Board::new(size)?,
            history: Vec::new(),
        })
    }

    /// Rebuilds a state from a position where the human is to move.
    ///
    /// The history is synthesized by alternating the two sides' cells in
    /// ascending order, ending with a computer move. The board must hold as
    /// many `O` as `X`, or one more.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Result<Self, ConfigurationError> {
        let cells_of = |player: Player| -> Vec<usize> {
            board
                .cells()
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == Cell::Occupied(player))
                .map(|(i, _)| i)
                .collect()
        };
        let humans = cells_of(Player::Human);
        let computers = cells_of(Player::Computer);

        if computers.len() != humans.len() && computers.len() != humans.len() + 1 {
            return Err(ConfigurationError::new(format!(
                "Board with {} X and {} O is not awaiting a human move",
                humans.len(),
                computers.len()
            )));
        }

        let (opener, first, second) = if computers.len() > humans.len() {
            (Player::Computer, computers, humans)
        } else {
            (Player::Human, humans, computers)
        };
        let mut history = Vec::with_capacity(board.filled_count());
        for (i, &index) in first.iter().enumerate() {
            history.push(Move::new(opener, index));
            if let Some(&reply) = second.get(i) {
                history.push(Move::new(opener.opponent(), reply));
            }
        }

        Ok(Self { board, history })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of turns taken.
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// Applies a move and records it; nothing changes on error.
    #[instrument(skip(self))]
    pub fn apply(&mut self, mov: Move) -> Result<(), InvalidMoveError> {
        self.board.apply_move(mov.index, mov.player)?;
        self.history.push(mov);
        Ok(())
    }

    /// Mutable board access for tests that corrupt state on purpose.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Parses a compact board such as `"XX.OO...."` or `"XX3|OO6|789"`.
///
/// `X` is the human, `O` the computer, `.`, `_` or a run of digits an empty
/// cell, so the numbered cells of [`Board::display`] parse back. Whitespace,
/// `|`, `-` and `+` are ignored. The cell count must be a square of a size
/// no smaller than [`MIN_SIZE`].
impl FromStr for Board {
    type Err = ConfigurationError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                c if c.is_whitespace() => {}
                '|' | '-' | '+' => {}
                '.' | '_' => cells.push(Cell::Empty),
                c if c.is_ascii_digit() => {
                    while chars.next_if(|next| next.is_ascii_digit()).is_some() {}
                    cells.push(Cell::Empty);
                }
                c => {
                    let player = Player::from_mark(c).ok_or_else(|| {
                        ConfigurationError::new(format!("Invalid board character '{}'", c))
                    })?;
                    cells.push(Cell::Occupied(player));
                }
            }
        }

        let size = (0..=cells.len())
            .find(|n| n * n >= cells.len())
            .unwrap_or_default();
        if size * size != cells.len() {
            return Err(ConfigurationError::new(format!(
                "Board has {} cells, which is not a square",
                cells.len()
            )));
        }

        Board::from_cells(size, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.len(), 16);
        assert!(board.is_empty());
        assert_eq!(board.empty_cells(), (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_degenerate_sizes_rejected() {
        assert!(Board::new(0).is_err());
        assert!(Board::new(2).is_err());
        assert!(Board::new(3).is_ok());
    }

    #[test]
    fn test_apply_and_undo() {
        let mut board = Board::default();
        board.apply_move(4, Player::Human).unwrap();
        assert_eq!(board.get(4), Some(Cell::Occupied(Player::Human)));
        assert!(!board.empty_cells().contains(&4));

        board.undo_move(4);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_apply_rejects_occupied_and_out_of_range() {
        let mut board = Board::default();
        board.apply_move(0, Player::Computer).unwrap();
        assert_eq!(
            board.apply_move(0, Player::Human),
            Err(InvalidMoveError::CellOccupied(0))
        );
        assert_eq!(
            board.apply_move(9, Player::Human),
            Err(InvalidMoveError::OutOfBounds { index: 9, len: 9 })
        );
        assert_eq!(board.count(Player::Computer), 1);
        assert_eq!(board.count(Player::Human), 0);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.get(1), Some(Cell::Occupied(Player::Human)));
        assert_eq!(board.get(3), Some(Cell::Occupied(Player::Computer)));
        assert_eq!(board.empty_cells(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XX.OO".parse::<Board>().is_err());
        assert!("XXZOO....".parse::<Board>().is_err());
        assert!("XO.X".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_numbered_cells_as_one_cell() {
        let board: Board = "X 2 3 4 | 5 6 7 8 | 9 10 11 12 | 13 14 15 O".parse().unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.get(0), Some(Cell::Occupied(Player::Human)));
        assert_eq!(board.get(15), Some(Cell::Occupied(Player::Computer)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_display_parses_back() {
        for text in ["X.O......", "X..O .X.. ..O. ...X"] {
            let board: Board = text.parse().unwrap();
            assert_eq!(board.display().parse::<Board>().unwrap(), board);
        }
    }

    #[test]
    fn test_deserialize_rejects_malformed_board() {
        let short = r#"{"size":3,"cells":["Empty","Empty"]}"#;
        assert!(serde_json::from_str::<Board>(short).is_err());

        let tiny = r#"{"size":0,"cells":[]}"#;
        assert!(serde_json::from_str::<Board>(tiny).is_err());

        let board: Board = "XX. OO. ...".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_state() {
        let mut state = GameState::new(3).unwrap();
        state.apply(Move::new(Player::Human, 4)).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameState>(&json).unwrap(), state);

        state.board_mut().apply_move(0, Player::Computer).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert!(serde_json::from_str::<GameState>(&json).is_err());
    }

    #[test]
    fn test_display() {
        let board: Board = "X.O......".parse().unwrap();
        assert_eq!(board.display(), "X|2|O\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
