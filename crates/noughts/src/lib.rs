//! Noughts - a two-player tic-tac-toe game-resolution engine.
//!
//! The engine tracks per-player claimed cells, detects wins against the
//! fixed table of 8 winning combinations, detects draws (including
//! early "dead" draws where no combination remains achievable), and
//! drives turn alternation. Rendering and input handling belong to an
//! external presentation adapter, which submits moves and receives a
//! structured [`TurnResult`] back.
//!
//! # Example
//!
//! ```
//! use noughts::{Cell, Game, Mark, TurnResult};
//!
//! let mut game = Game::with_first_player("Player X", "Player O", Mark::X);
//! match game.submit_move(Cell::Center)? {
//!     TurnResult::Continued(next) => assert_eq!(next, Mark::O),
//!     _ => unreachable!("one move cannot end a game"),
//! }
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod game;
mod mark;
mod player;
mod rules;

// Crate-level exports - board vocabulary
pub use cell::Cell;
pub use mark::Mark;

// Crate-level exports - player entities and scores
pub use player::{Player, Score, ScoreBoard};

// Crate-level exports - turn coordination
pub use game::{Game, MoveError, Outcome, Phase, TurnResult};

// Crate-level exports - win/draw evaluation
pub use rules::{Combo, LINES, has_won, is_draw, winning_line};
