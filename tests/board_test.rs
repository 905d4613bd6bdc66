//! Tests for board state and win detection.

use minimax_tictactoe::{
    Board, Cell, InvalidMoveError, Player, check_winner, has_won, is_tie, winning_lines,
};

/// Reference check: some generated line is fully held by `player`.
fn line_complete(board: &Board, player: Player) -> bool {
    winning_lines(board.size()).iter().any(|line| {
        line.iter()
            .all(|&i| board.get(i) == Some(Cell::Occupied(player)))
    })
}

/// Visits every position reachable by legal alternating play, stopping at wins.
fn visit_reachable(board: &mut Board, to_move: Player, visit: &mut impl FnMut(&Board)) {
    visit(board);
    if check_winner(board).is_some() {
        return;
    }
    for index in board.empty_cells() {
        board.apply_move(index, to_move).unwrap();
        visit_reachable(board, to_move.opponent(), visit);
        board.undo_move(index);
    }
}

#[test]
fn test_empty_board_has_no_winner() {
    for size in 3..=5 {
        let board = Board::new(size).unwrap();
        assert!(!has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Computer));
    }
}

#[test]
fn test_has_won_matches_lines_on_every_reachable_position() {
    let mut board = Board::default();
    let mut positions = 0usize;
    visit_reachable(&mut board, Player::Human, &mut |b| {
        positions += 1;
        for player in [Player::Human, Player::Computer] {
            assert_eq!(has_won(b, player), line_complete(b, player), "{}", b.display());
        }
    });
    // Game-tree node count for 3×3 tic-tac-toe, root included.
    assert_eq!(positions, 549_946);
}

#[test]
fn test_generic_lines_on_4x4() {
    let mut board = Board::new(4).unwrap();
    for index in [3, 6, 9] {
        board.apply_move(index, Player::Human).unwrap();
    }
    assert!(!has_won(&board, Player::Human));

    board.apply_move(12, Player::Human).unwrap();
    assert!(has_won(&board, Player::Human));
    assert_eq!(check_winner(&board), Some(Player::Human));
}

#[test]
fn test_empty_cells_ascending() {
    let mut board = Board::default();
    for (index, player) in [(7, Player::Human), (1, Player::Computer), (4, Player::Human)] {
        board.apply_move(index, player).unwrap();
    }
    assert_eq!(board.empty_cells(), vec![0, 2, 3, 5, 6, 8]);
    assert_eq!(board.filled_count(), 3);
    assert!(!board.is_full());
}

#[test]
fn test_apply_errors_leave_board_unchanged() {
    let mut board: Board = "X.. .O. ...".parse().unwrap();
    let before = board.clone();

    assert_eq!(
        board.apply_move(4, Player::Human),
        Err(InvalidMoveError::CellOccupied(4))
    );
    assert_eq!(
        board.apply_move(42, Player::Computer),
        Err(InvalidMoveError::OutOfBounds { index: 42, len: 9 })
    );
    assert_eq!(board, before);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let board: Board = "XOX XOO OXX".parse().unwrap();
    assert!(board.is_full());
    assert!(is_tie(&board));
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_malformed_json_board_is_rejected_before_use() {
    let json = r#"{"size":3,"cells":["Empty","Empty"]}"#;
    let err = serde_json::from_str::<Board>(json).unwrap_err();
    assert!(err.to_string().contains("cannot hold 2 cells"));

    let json = r#"{"size":2,"cells":["Empty","Empty","Empty","Empty"]}"#;
    assert!(serde_json::from_str::<Board>(json).is_err());
}
