//! Players and the sources of their moves.

mod human;
mod random_ai;

pub use human::{MoveInputError, interpret_move, parse_move};
pub use random_ai::RandomAi;

use crate::{Console, SessionError};
use derive_getters::Getters;
use std::io::{BufRead, Write};
use tictactoe::{Board, Mark, Position};
use tracing::{debug, instrument};

/// A named player and the mark they play for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerIdentity {
    /// Display name, never empty.
    name: String,
    /// Mark placed by this player.
    mark: Mark,
}

impl PlayerIdentity {
    /// Creates an identity, trimming the name.
    pub fn new(name: impl Into<String>, mark: Mark) -> Result<Self, SessionError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        Ok(Self { name, mark })
    }
}

impl std::fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

/// Where a player's moves come from.
#[derive(Debug)]
pub enum MoveSource {
    /// Coordinates typed on the console.
    Human,
    /// Uniformly random empty cell.
    Random(RandomAi),
}

impl MoveSource {
    /// Produces a legal, empty position for `player` on `board`.
    ///
    /// The board is not modified; applying the move is the caller's job.
    /// Fails with [`SessionError::NoLegalMove`] when the board is full.
    #[instrument(skip_all, fields(player = %player))]
    pub fn make_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        player: &PlayerIdentity,
        console: &mut Console<R, W>,
    ) -> Result<Position, SessionError> {
        let position = match self {
            MoveSource::Human => human::read_move(board, player, console)?,
            MoveSource::Random(ai) => {
                let position = ai.choose(board).ok_or_else(|| SessionError::NoLegalMove {
                    name: player.name.clone(),
                })?;
                console.say(format!("{player} played: {position}"))?;
                position
            }
        };
        debug!(%position, "Move chosen");
        Ok(position)
    }
}
