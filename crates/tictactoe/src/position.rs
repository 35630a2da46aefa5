//! Board coordinates.

use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// A cell coordinate on the board, 0-based.
///
/// Values can only be built through [`Position::new`], so a `Position`
/// always lies inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, or `None` if either coordinate is off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Creates a position from 1-based coordinates as typed by a person.
    #[instrument]
    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        Self::new(row.checked_sub(1)?, col.checked_sub(1)?)
    }

    /// Row index (0-based).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index (0-based).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Index into a row-major array of cells (0-8).
    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

/// Displays the position 1-based, as `row col`.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
