//! Core domain types for tic-tac-toe.

use crate::{BOARD_SIZE, PlacementError, Position, rules};
use tracing::{debug, instrument};

/// One of the two marks a player places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Mark {
    /// Mark X (player 1, moves first).
    X,
    /// Mark O (player 2).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Character used when rendering the board.
    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Only cells explicitly set through [`Board::place_mark`] are ever
/// non-empty, and a placed mark is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks that `mark` could be placed at `(row, col)` without placing it.
    #[instrument(skip(self))]
    pub fn check_placement(&self, row: usize, col: usize) -> Result<Position, PlacementError> {
        let pos = Position::new(row, col).ok_or(PlacementError::OutOfRange { row, col })?;
        match self.get(pos) {
            Cell::Empty => Ok(pos),
            Cell::Marked(_) => Err(PlacementError::Occupied(pos)),
        }
    }

    /// Places `mark` at `(row, col)` if the cell is on the board and empty.
    ///
    /// On failure the board is left unchanged.
    #[instrument(skip(self))]
    pub fn place_mark(
        &mut self,
        row: usize,
        col: usize,
        mark: Mark,
    ) -> Result<Position, PlacementError> {
        let pos = self.check_placement(row, col)?;
        self.cells[pos.to_index()] = Cell::Marked(mark);
        debug!(%pos, %mark, "Mark placed");
        Ok(pos)
    }

    /// Places `mark` at an already constructed position.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<Position, PlacementError> {
        self.place_mark(pos.row(), pos.col(), mark)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True iff some row, column or diagonal is entirely `mark`.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(self, mark)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.get(pos) == Cell::Empty)
            .collect()
    }

    /// Formats the board as a grid with 1-based row and column labels.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(2 * BOARD_SIZE);
        lines.push("   1   2   3".to_string());
        for row in 0..BOARD_SIZE {
            let symbols: Vec<String> = (0..BOARD_SIZE)
                .map(|col| self.cells[row * BOARD_SIZE + col].symbol().to_string())
                .collect();
            let line = format!("{}  {}", row + 1, symbols.join(" | "));
            lines.push(line.trim_end().to_string());
            if row + 1 < BOARD_SIZE {
                lines.push("  ---+---+---".to_string());
            }
        }
        lines.join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// Board filled with no line completed.
    Draw,
}

impl GameStatus {
    /// Evaluates the status right after `last` was placed on `board`.
    ///
    /// Only `last` is checked for a win: with one mark per turn the other
    /// player cannot have completed a line on this ply.
    #[instrument(skip(board))]
    pub fn after_move(board: &Board, last: Mark) -> Self {
        if board.check_win(last) {
            GameStatus::Won(last)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
