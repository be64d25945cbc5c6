//! Player entities and score tallies.

use crate::cell::Cell;
use crate::mark::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Snapshot of a player's running score counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Games won.
    pub wins: u32,
    /// Games tied.
    pub ties: u32,
    /// Games lost.
    pub losses: u32,
}

/// Score snapshots for both players, for display by the adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Player X's score.
    pub x: Score,
    /// Player O's score.
    pub o: Score,
}

/// A player in a game session.
///
/// Players are passive data holders owned by the [`Game`](crate::Game)
/// aggregate: the coordinator mutates them, the adapter reads them.
/// Claimed cells are cleared at the start of each game; score counters
/// persist across games for the life of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Which mark this player uses (X or O).
    mark: Mark,
    /// Player's display name.
    name: String,
    /// Display-asset reference for the mark. Not used by game logic.
    icon: String,
    /// Whether it is this player's turn.
    active: bool,
    /// Cells claimed by this player in the current game.
    claimed: Vec<Cell>,
    wins: u32,
    ties: u32,
    losses: u32,
}

impl Player {
    /// Creates a new player with zeroed counters and no claims.
    #[instrument(skip(name))]
    pub fn new(mark: Mark, name: impl Into<String>) -> Self {
        let icon = match mark {
            Mark::X => "images/x.png".to_string(),
            Mark::O => "images/o.png".to_string(),
        };
        Self {
            mark,
            name: name.into(),
            icon,
            active: false,
            claimed: Vec::new(),
            wins: 0,
            ties: 0,
            losses: 0,
        }
    }

    /// This player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// This player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display-asset reference for this player's mark.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Whether it is this player's turn.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cells claimed by this player in the current game.
    pub fn claimed(&self) -> &[Cell] {
        &self.claimed
    }

    /// Whether this player has claimed the given cell.
    pub fn has_claimed(&self, cell: Cell) -> bool {
        self.claimed.contains(&cell)
    }

    /// Returns a snapshot of the running score counters.
    pub fn score(&self) -> Score {
        Score {
            wins: self.wins,
            ties: self.ties,
            losses: self.losses,
        }
    }

    /// Adds a cell to this player's claims.
    ///
    /// The coordinator guarantees the cell is unclaimed by either player.
    #[instrument(skip(self), fields(mark = %self.mark))]
    pub(crate) fn claim(&mut self, cell: Cell) {
        debug!(?cell, "Claiming cell");
        self.claimed.push(cell);
    }

    /// Marks this player as the one to move.
    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    /// Marks this player as waiting.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    /// Forgets all claims, at the start of a new game.
    pub(crate) fn clear_claims(&mut self) {
        self.claimed.clear();
    }

    /// Increments the win counter and returns the new count.
    pub(crate) fn record_win(&mut self) -> u32 {
        self.wins += 1;
        self.wins
    }

    /// Increments the tie counter and returns the new count.
    pub(crate) fn record_tie(&mut self) -> u32 {
        self.ties += 1;
        self.ties
    }

    /// Increments the loss counter and returns the new count.
    pub(crate) fn record_loss(&mut self) -> u32 {
        self.losses += 1;
        self.losses
    }
}
