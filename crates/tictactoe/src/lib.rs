//! Tic-tac-toe game logic.
//!
//! A fixed 3x3 board, the two marks that can be placed on it, and the
//! rules that decide when a game is over. Nothing in this crate performs
//! I/O; rendering produces a string and leaves printing to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Mark};
//!
//! let mut board = Board::new();
//! for col in 0..3 {
//!     board.place_mark(0, col, Mark::X).unwrap();
//! }
//! assert!(board.check_win(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod types;

pub use error::PlacementError;
pub use position::{BOARD_SIZE, Position};
pub use types::{Board, Cell, GameStatus, Mark};
