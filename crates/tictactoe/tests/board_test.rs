//! Tests for the public board API.

use strum::IntoEnumIterator;
use tictactoe::{Board, Cell, GameStatus, Mark, PlacementError, Position, rules};

/// Deterministic sequence of boards reached by filling cells in a
/// scrambled order with alternating marks.
fn scrambled_boards() -> Vec<Board> {
    let orders: [[usize; 9]; 4] = [
        [4, 0, 8, 2, 6, 1, 7, 3, 5],
        [0, 1, 2, 3, 4, 5, 6, 7, 8],
        [8, 7, 6, 5, 4, 3, 2, 1, 0],
        [1, 3, 5, 7, 0, 2, 4, 6, 8],
    ];
    let mut boards = Vec::new();
    for order in orders {
        let mut board = Board::new();
        for (ply, idx) in order.into_iter().enumerate() {
            let mark = if ply % 2 == 0 { Mark::X } else { Mark::O };
            board.place(Position::ALL[idx], mark).unwrap();
            boards.push(board.clone());
        }
    }
    boards
}

/// Reference win check written directly against rows, columns and diagonals.
fn reference_win(board: &Board, mark: Mark) -> bool {
    let is = |r: usize, c: usize| board.get(Position::new(r, c).unwrap()) == Cell::Marked(mark);
    (0..3).any(|i| (0..3).all(|j| is(i, j)))
        || (0..3).any(|j| (0..3).all(|i| is(i, j)))
        || (0..3).all(|i| is(i, i))
        || (0..3).all(|i| is(i, 2 - i))
}

#[test]
fn test_check_win_matches_reference() {
    for board in scrambled_boards() {
        for mark in Mark::iter() {
            assert_eq!(board.check_win(mark), reference_win(&board, mark), "{board}");
        }
    }
}

#[test]
fn test_is_full_iff_no_empty_cells() {
    for board in scrambled_boards() {
        assert_eq!(board.is_full(), board.empty_cells().is_empty());
    }
}

#[test]
fn test_rejected_placements_never_mutate() {
    let mut board = Board::new();
    board.place_mark(1, 1, Mark::X).unwrap();
    let snapshot = board.clone();

    for (row, col) in [(3, 0), (0, 3), (9, 9), (1, 1)] {
        assert!(board.place_mark(row, col, Mark::O).is_err());
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_occupied_error_names_cell() {
    let mut board = Board::new();
    board.place_mark(2, 0, Mark::O).unwrap();
    let err = board.place_mark(2, 0, Mark::X).unwrap_err();
    assert_eq!(err, PlacementError::Occupied(Position::new(2, 0).unwrap()));
    assert_eq!(err.to_string(), "cell 3 1 is already occupied");
}

#[test]
fn test_single_empty_cell() {
    let mut board = Board::new();
    for (i, pos) in Position::ALL.iter().enumerate() {
        if *pos == Position::new(1, 1).unwrap() {
            continue;
        }
        let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        board.place(*pos, mark).unwrap();
    }
    assert_eq!(board.empty_cells(), vec![Position::new(1, 1).unwrap()]);
}

#[test]
fn test_status_resolves_draw() {
    // X O X / X O O / O X X
    #[rustfmt::skip]
    let layout = [
        Mark::X, Mark::O, Mark::X,
        Mark::X, Mark::O, Mark::O,
        Mark::O, Mark::X, Mark::X,
    ];
    let mut board = Board::new();
    for (pos, mark) in Position::ALL.iter().zip(layout) {
        board.place(*pos, mark).unwrap();
    }
    assert!(rules::is_draw(&board));
    assert_eq!(GameStatus::after_move(&board, Mark::X), GameStatus::Draw);
}
