//! Computer player picking uniformly among empty cells.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tictactoe::{Board, Position};
use tracing::{debug, instrument};

/// Random move picker owning its own generator.
#[derive(Debug, Clone)]
pub struct RandomAi {
    rng: StdRng,
}

impl RandomAi {
    /// Generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks one of the board's empty cells, or `None` if it is full.
    #[instrument(skip_all)]
    pub fn choose(&mut self, board: &Board) -> Option<Position> {
        let empty = board.empty_cells();
        let pick = empty.choose(&mut self.rng).copied();
        debug!(candidates = empty.len(), pick = ?pick, "Random pick");
        pick
    }
}
