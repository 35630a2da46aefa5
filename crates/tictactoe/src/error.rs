//! Placement error type.

use crate::Position;

/// Why a mark could not be placed.
///
/// Both cases are expected during interactive play and leave the board
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlacementError {
    /// Row or column is outside `0..3`.
    #[display("cell ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row (0-based).
        row: usize,
        /// Requested column (0-based).
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    Occupied(Position),
}

impl std::error::Error for PlacementError {}
