//! Console tic-tac-toe.
//!
//! Two players, or one player and a random computer opponent, take turns
//! on a 3x3 board through a line-oriented console.
//!
//! # Architecture
//!
//! - **Console**: blocking line reads and writes over any reader/writer
//! - **Players**: identities and their move sources (human or random)
//! - **Orchestrator**: the game loop, alternating turns until a win or draw
//! - **Setup**: the interactive prompts that seat the players
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::Mark;
//! use tictactoe_console::{Console, MoveSource, Orchestrator, Outcome, PlayerIdentity, Seat};
//!
//! # fn main() -> Result<(), tictactoe_console::SessionError> {
//! let mut console = Console::new(Cursor::new("1 1\n2 1\n1 2\n2 2\n1 3\n"), Vec::new());
//! let mut game = Orchestrator::new(
//!     Seat::new(PlayerIdentity::new("Ann", Mark::X)?, MoveSource::Human),
//!     Seat::new(PlayerIdentity::new("Bob", Mark::O)?, MoveSource::Human),
//! )?;
//! let outcome = game.run(&mut console)?;
//! assert_eq!(outcome, Outcome::Winner { name: "Ann".into(), mark: Mark::X });
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;
mod orchestrator;
pub mod players;
pub mod setup;

pub use cli::{Cli, Command, SAMPLE_TREE};
pub use config::{Config, ConfigError};
pub use console::{Console, StdConsole, stdio};
pub use error::SessionError;
pub use orchestrator::{Orchestrator, Outcome, Seat};
pub use players::{MoveSource, PlayerIdentity, RandomAi};
