//! Players and their running score.

use super::types::Side;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A side together with how many games it has won this session.
///
/// The side is fixed for the player's lifetime; only the win count changes,
/// and only when the orchestrator sees a win attributed to this side.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Which mark this player uses.
    #[getter(copy)]
    side: Side,
    /// Games won so far.
    #[getter(copy)]
    wins: u32,
}

impl Player {
    /// Creates a player with no wins.
    pub fn new(side: Side) -> Self {
        Self { side, wins: 0 }
    }

    /// Credits this player with one more win.
    #[instrument(skip(self), fields(side = %self.side))]
    pub fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
        info!(wins = self.wins, "Win recorded");
    }
}
