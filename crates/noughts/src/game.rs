//! Turn coordination for a two-player session.

use crate::cell::Cell;
use crate::mark::Mark;
use crate::player::{Player, Score, ScoreBoard};
use crate::rules::{self, Combo};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Why a concluded game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The named player completed a winning combination.
    WinFor(Mark),
    /// No combination remained achievable.
    Draw,
}

/// Coordinator state: whose move it is, or why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the named player to move.
    AwaitingMove(Mark),
    /// The game has concluded; no further moves are accepted.
    Concluded(Outcome),
}

/// Structured result of a submitted move, for the presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResult {
    /// Game continues; the named player moves next.
    Continued(Mark),
    /// The move completed a winning combination.
    Won {
        /// The winning player.
        winner: Mark,
        /// The completed combination, for highlighting. When several
        /// combinations are complete, the first in table order.
        line: Combo,
        /// Score counters after recording the outcome.
        scores: ScoreBoard,
    },
    /// The move left no combination achievable by either player.
    Drawn {
        /// Score counters after recording the outcome.
        scores: ScoreBoard,
    },
}

/// Error raised for a rejected move. State is never mutated on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already claimed by one of the players.
    #[display("Cell {} is already claimed", _0)]
    CellOccupied(Cell),
    /// The game has concluded; restart the session to play again.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A two-player game session.
///
/// Owns both [`Player`] entities and the coordinator [`Phase`]. Score
/// counters persist across [`restart`](Game::restart); claimed cells do
/// not. Each game opens with a coin toss deciding who moves first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    player_x: Player,
    player_o: Player,
    phase: Phase,
}

impl Game {
    /// Creates a new session and starts the first game.
    ///
    /// The first mover is chosen by a fair coin flip.
    #[instrument(skip(name_x, name_o))]
    pub fn new(name_x: impl Into<String>, name_o: impl Into<String>) -> Self {
        let first = coin_toss();
        info!(first = %first, "Starting new game session");
        Self::with_first_player(name_x, name_o, first)
    }

    /// Creates a new session with a fixed first mover instead of a coin
    /// flip. Everything else matches [`Game::new`].
    #[instrument(skip(name_x, name_o))]
    pub fn with_first_player(
        name_x: impl Into<String>,
        name_o: impl Into<String>,
        first: Mark,
    ) -> Self {
        let mut game = Self {
            player_x: Player::new(Mark::X, name_x),
            player_o: Player::new(Mark::O, name_o),
            phase: Phase::AwaitingMove(first),
        };
        game.player_mut(first).activate();
        game
    }

    /// Current coordinator phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player expected to move, or `None` once concluded.
    pub fn active_mark(&self) -> Option<Mark> {
        match self.phase {
            Phase::AwaitingMove(mark) => Some(mark),
            Phase::Concluded(_) => None,
        }
    }

    /// Whether the current game has concluded.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Concluded(_))
    }

    /// The outcome of the current game, once concluded.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Concluded(outcome) => Some(outcome),
            Phase::AwaitingMove(_) => None,
        }
    }

    /// The player holding the given mark.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Cells claimed by the given player in the current game.
    pub fn claimed_by(&self, mark: Mark) -> &[Cell] {
        self.player(mark).claimed()
    }

    /// Which player claimed the given cell, if any.
    pub fn owner_of(&self, cell: Cell) -> Option<Mark> {
        if self.player_x.has_claimed(cell) {
            Some(Mark::X)
        } else if self.player_o.has_claimed(cell) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Cells not yet claimed by either player, in row-major order.
    ///
    /// The adapter uses this to disable claimed cells before accepting
    /// input.
    pub fn open_cells(&self) -> Vec<Cell> {
        Cell::iter()
            .filter(|cell| self.owner_of(*cell).is_none())
            .collect()
    }

    /// Score snapshots for both players.
    pub fn scores(&self) -> ScoreBoard {
        ScoreBoard {
            x: self.player_x.score(),
            o: self.player_o.score(),
        }
    }

    /// Score snapshot for the given player.
    pub fn score_of(&self, mark: Mark) -> Score {
        self.player(mark).score()
    }

    /// Records a move for the active player and resolves the turn.
    ///
    /// Runs to completion before another move can be accepted: claims
    /// the cell, checks for a win, then for a draw, and otherwise passes
    /// the turn.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the game has concluded and
    /// [`MoveError::CellOccupied`] if either player already claimed the
    /// cell. Neither error mutates any state.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, cell: Cell) -> Result<TurnResult, MoveError> {
        let mover = match self.phase {
            Phase::Concluded(_) => {
                warn!(?cell, "Move submitted after game concluded");
                return Err(MoveError::GameOver);
            }
            Phase::AwaitingMove(mark) => mark,
        };

        if let Some(owner) = self.owner_of(cell) {
            warn!(?cell, %owner, "Move submitted for a claimed cell");
            return Err(MoveError::CellOccupied(cell));
        }

        self.player_mut(mover).claim(cell);

        if let Some(line) = rules::winning_line(self.player(mover).claimed()) {
            let wins = self.player_mut(mover).record_win();
            let losses = self.player_mut(mover.opponent()).record_loss();
            info!(winner = %mover, wins, losses, ?line, "Game won");
            self.phase = Phase::Concluded(Outcome::WinFor(mover));
            return Ok(TurnResult::Won {
                winner: mover,
                line,
                scores: self.scores(),
            });
        }

        if rules::is_draw(self.player_x.claimed(), self.player_o.claimed()) {
            let x_ties = self.player_x.record_tie();
            let o_ties = self.player_o.record_tie();
            info!(x_ties, o_ties, "Game drawn");
            self.phase = Phase::Concluded(Outcome::Draw);
            return Ok(TurnResult::Drawn {
                scores: self.scores(),
            });
        }

        let next = mover.opponent();
        self.player_mut(mover).deactivate();
        self.player_mut(next).activate();
        self.phase = Phase::AwaitingMove(next);
        debug!(next = %next, "Turn passed");
        Ok(TurnResult::Continued(next))
    }

    /// Starts a new game in the same session.
    ///
    /// Clears both players' claims, re-flips the coin, and returns the
    /// new first mover. Score counters are running session totals and
    /// are not reset.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Mark {
        self.player_x.clear_claims();
        self.player_o.clear_claims();
        self.player_x.deactivate();
        self.player_o.deactivate();

        let first = coin_toss();
        self.player_mut(first).activate();
        self.phase = Phase::AwaitingMove(first);
        info!(first = %first, "Session restarted");
        first
    }

    fn player_mut(&mut self, mark: Mark) -> &mut Player {
        match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        }
    }
}

/// Fair coin flip deciding who opens a game.
fn coin_toss() -> Mark {
    if rand::thread_rng().gen_bool(0.5) {
        Mark::X
    } else {
        Mark::O
    }
}
