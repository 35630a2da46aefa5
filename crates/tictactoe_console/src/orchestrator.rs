//! Game orchestration between two players.

use crate::players::{MoveSource, PlayerIdentity};
use crate::{Console, SessionError};
use derive_getters::Getters;
use std::io::{BufRead, Write};
use tictactoe::{Board, GameStatus, Mark};
use tracing::{debug, info, instrument};

/// A player taking part in a game: who they are and how they move.
#[derive(Debug, Getters)]
pub struct Seat {
    /// Name and mark.
    identity: PlayerIdentity,
    /// Move source consulted on this player's turns.
    source: MoveSource,
}

impl Seat {
    /// Seats a player.
    pub fn new(identity: PlayerIdentity, source: MoveSource) -> Self {
        Self { identity, source }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The named player completed a line.
    Winner {
        /// Winner's name.
        name: String,
        /// Winner's mark.
        mark: Mark,
    },
    /// Board full without a line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { name, mark } => write!(f, "{name} ({mark}) wins!"),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Runs one game: owns the board and both seats and alternates turns.
///
/// The first seat moves first. Turns alternate strictly, one mark per
/// turn, until a win or a draw.
#[derive(Debug)]
pub struct Orchestrator {
    board: Board,
    seats: [Seat; 2],
    current: usize,
    status: GameStatus,
    moves_played: usize,
    last_mark: Option<Mark>,
}

impl Orchestrator {
    /// Creates a game on an empty board.
    pub fn new(first: Seat, second: Seat) -> Result<Self, SessionError> {
        if first.identity.mark() == second.identity.mark() {
            return Err(SessionError::DuplicateMark(*first.identity.mark()));
        }
        Ok(Self {
            board: Board::new(),
            seats: [first, second],
            current: 0,
            status: GameStatus::InProgress,
            moves_played: 0,
            last_mark: None,
        })
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move next (or who made the final move).
    pub fn current(&self) -> &PlayerIdentity {
        &self.seats[self.current].identity
    }

    /// Number of marks placed so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(Outcome::Draw),
            GameStatus::Won(mark) => {
                let winner = self
                    .seats
                    .iter()
                    .map(|seat| &seat.identity)
                    .find(|identity| *identity.mark() == mark)?;
                Some(Outcome::Winner {
                    name: winner.name().clone(),
                    mark,
                })
            }
        }
    }

    /// Plays a single turn and returns the resulting status.
    ///
    /// Renders the board, asks the current seat for a move, applies it and
    /// evaluates the result for the mark just played. On a terminal result
    /// the final board and the announcement are printed; otherwise the turn
    /// passes to the other seat. Calling this on a finished game is a no-op.
    #[instrument(skip_all, fields(ply = self.moves_played + 1))]
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<GameStatus, SessionError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        console.blank_line()?;
        console.say(&self.board)?;
        console.blank_line()?;

        let seat = &mut self.seats[self.current];
        let position = seat.source.make_move(&self.board, &seat.identity, console)?;
        let mark = *seat.identity.mark();
        debug_assert_ne!(self.last_mark, Some(mark), "marks must alternate");

        self.board.place(position, mark)?;
        self.moves_played += 1;
        self.last_mark = Some(mark);
        debug!(%position, %mark, moves = self.moves_played, "Move applied");

        self.status = GameStatus::after_move(&self.board, mark);
        if let Some(outcome) = self.outcome() {
            console.blank_line()?;
            console.say(&self.board)?;
            console.blank_line()?;
            console.say(&outcome)?;
            info!(%outcome, moves = self.moves_played, "Game over");
        } else {
            self.current = 1 - self.current;
        }
        Ok(self.status)
    }

    /// Plays turns until the game is won or drawn.
    ///
    /// A move source failure stops the game and is returned unchanged.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Outcome, SessionError> {
        info!(
            first = %self.seats[0].identity,
            second = %self.seats[1].identity,
            "Game started"
        );
        loop {
            self.step(console)?;
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::RandomAi;
    use std::io::Cursor;

    fn human(name: &str, mark: Mark) -> Seat {
        Seat::new(PlayerIdentity::new(name, mark).unwrap(), MoveSource::Human)
    }

    fn computer(name: &str, mark: Mark, seed: u64) -> Seat {
        Seat::new(
            PlayerIdentity::new(name, mark).unwrap(),
            MoveSource::Random(RandomAi::seeded(seed)),
        )
    }

    #[test]
    fn test_rejects_duplicate_marks() {
        let err = Orchestrator::new(human("a", Mark::X), human("b", Mark::X)).unwrap_err();
        assert!(matches!(err, SessionError::DuplicateMark(Mark::X)));
    }

    #[test]
    fn test_turns_alternate() {
        let input = "1 1\n2 2\n3 3\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let mut game = Orchestrator::new(human("Ann", Mark::X), human("Bob", Mark::O)).unwrap();

        assert_eq!(game.current().name(), "Ann");
        game.step(&mut console).unwrap();
        assert_eq!(game.current().name(), "Bob");
        game.step(&mut console).unwrap();
        assert_eq!(game.current().name(), "Ann");
        assert_eq!(game.step(&mut console).unwrap(), GameStatus::InProgress);
        assert_eq!(game.moves_played(), 3);
    }

    #[test]
    fn test_step_after_finish_is_noop() {
        let input = "1 1\n2 1\n1 2\n2 2\n1 3\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let mut game = Orchestrator::new(human("Ann", Mark::X), human("Bob", Mark::O)).unwrap();
        let outcome = game.run(&mut console).unwrap();
        assert_eq!(
            outcome,
            Outcome::Winner {
                name: "Ann".to_string(),
                mark: Mark::X
            }
        );
        let board = game.board().clone();
        assert_eq!(game.step(&mut console).unwrap(), GameStatus::Won(Mark::X));
        assert_eq!(game.board(), &board);
        assert_eq!(game.moves_played(), 5);
    }

    #[test]
    fn test_computers_finish_within_nine_moves() {
        for seed in 0..30 {
            let mut console = Console::new(Cursor::new(""), Vec::new());
            let mut game = Orchestrator::new(
                computer("One", Mark::X, seed),
                computer("Two", Mark::O, seed + 1000),
            )
            .unwrap();
            let outcome = game.run(&mut console).unwrap();
            assert!(game.moves_played() <= 9);
            match outcome {
                Outcome::Winner { mark, .. } => assert!(game.board().check_win(mark)),
                Outcome::Draw => {
                    assert!(game.board().is_full());
                    assert_eq!(game.moves_played(), 9);
                }
            }
        }
    }

    #[test]
    fn test_end_of_input_stops_game() {
        let mut console = Console::new(Cursor::new("1 1\n"), Vec::new());
        let mut game = Orchestrator::new(human("Ann", Mark::X), human("Bob", Mark::O)).unwrap();
        let err = game.run(&mut console).unwrap_err();
        assert!(matches!(err, SessionError::EndOfInput));
        assert_eq!(game.moves_played(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
