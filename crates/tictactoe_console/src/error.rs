//! Session error types.

use derive_more::{Display, From};
use tictactoe::{Mark, PlacementError};

/// Errors that end an interactive session.
///
/// Bad input during a prompt is never one of these: it is reported to
/// the player and the prompt is repeated.
#[derive(Debug, Display, From)]
pub enum SessionError {
    /// The input channel closed while a line was expected.
    #[display("input ended before the game finished")]
    EndOfInput,

    /// A move source was asked to move on a board with no empty cell.
    #[display("{name} has no legal move")]
    NoLegalMove {
        /// Name of the player asked to move.
        name: String,
    },

    /// A move source returned a cell the board refused.
    #[display("move rejected by the board: {_0}")]
    #[from]
    Placement(PlacementError),

    /// Both seats were given the same mark.
    #[display("both players cannot play {_0}")]
    DuplicateMark(Mark),

    /// Player names must contain at least one visible character.
    #[display("player name must not be empty")]
    EmptyName,

    /// Reading from or writing to the console failed.
    #[display("console I/O failed: {_0}")]
    #[from]
    Io(std::io::Error),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            SessionError::Placement(err) => Some(err),
            _ => None,
        }
    }
}
