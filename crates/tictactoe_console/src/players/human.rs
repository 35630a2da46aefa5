//! Human player typing `row col` on the console.

use super::PlayerIdentity;
use crate::{Console, SessionError};
use std::io::{BufRead, Write};
use tictactoe::{Board, PlacementError, Position};
use tracing::{debug, instrument, warn};

/// Why a typed move was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveInputError {
    /// The line did not hold exactly two tokens.
    #[display("expected 2 numbers, found {_0} tokens")]
    WrongTokenCount(usize),

    /// A token is not an integer.
    #[display("{_0:?} is not a number")]
    NotANumber(String),

    /// Well-formed, but outside 1..3 (values as typed).
    #[display("{row} {col} is outside the board")]
    OutOfRange {
        /// Row as typed (1-based).
        row: i64,
        /// Column as typed (1-based).
        col: i64,
    },

    /// Well-formed, but the cell already holds a mark.
    #[display("{_0} is already taken")]
    Occupied(Position),
}

impl std::error::Error for MoveInputError {}

impl MoveInputError {
    /// True when the line itself could not be read as two integers.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            MoveInputError::WrongTokenCount(_) | MoveInputError::NotANumber(_)
        )
    }

    /// Message shown to the player before asking again.
    pub fn hint(&self) -> &'static str {
        match self {
            MoveInputError::WrongTokenCount(_) => "Enter two numbers, for example: 2 3",
            MoveInputError::NotANumber(_) => "Invalid input. Use numbers 1..3.",
            MoveInputError::OutOfRange { .. } | MoveInputError::Occupied(_) => {
                "That cell is occupied or out of range. Try again."
            }
        }
    }
}

/// Splits a line into two whitespace separated integers (as typed, 1-based).
#[instrument]
pub fn parse_move(line: &str) -> Result<(i64, i64), MoveInputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(MoveInputError::WrongTokenCount(tokens.len()));
    };
    let number = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|_| MoveInputError::NotANumber(token.to_string()))
    };
    Ok((number(*row)?, number(*col)?))
}

/// Turns a typed line into an empty board position (0-based).
#[instrument(skip(board))]
pub fn interpret_move(board: &Board, line: &str) -> Result<Position, MoveInputError> {
    let (row, col) = parse_move(line)?;
    let position = usize::try_from(row)
        .ok()
        .zip(usize::try_from(col).ok())
        .and_then(|(r, c)| Position::from_one_based(r, c))
        .ok_or(MoveInputError::OutOfRange { row, col })?;

    board
        .check_placement(position.row(), position.col())
        .map_err(|err| match err {
            PlacementError::Occupied(pos) => MoveInputError::Occupied(pos),
            PlacementError::OutOfRange { .. } => MoveInputError::OutOfRange { row, col },
        })
}

/// Prompts until the player types a legal move.
///
/// There is no retry limit; only end of input stops the loop.
pub(super) fn read_move<R: BufRead, W: Write>(
    board: &Board,
    player: &PlayerIdentity,
    console: &mut Console<R, W>,
) -> Result<Position, SessionError> {
    if board.is_full() {
        return Err(SessionError::NoLegalMove {
            name: player.name().clone(),
        });
    }

    loop {
        console.prompt(format!("{player}, enter your move as 'row col' (1..3 1..3): "))?;
        let line = console.read_line()?;
        match interpret_move(board, &line) {
            Ok(position) => {
                debug!(%position, "Human move accepted");
                return Ok(position);
            }
            Err(err) => {
                warn!(input = %line, error = %err, malformed = err.is_malformed(), "Move rejected");
                console.say(err.hint())?;
            }
        }
    }
}
