//! Draw detection logic.

use super::win::{Combo, LINES};
use crate::cell::Cell;
use tracing::instrument;

/// Checks whether a combination is blocked for both players.
///
/// Counts, for each of the combination's three cells, membership in each
/// player's claimed set. A line holding exactly one cell from each side
/// can no longer be completed by either. Any other tally counts as still
/// contestable; this mirrors sequential alternating play rather than a
/// full reachability analysis, and is an observable contract of the
/// engine.
fn line_blocked(combo: &Combo, claimed_x: &[Cell], claimed_o: &[Cell]) -> bool {
    let x_matches = combo.iter().filter(|cell| claimed_x.contains(cell)).count();
    let o_matches = combo.iter().filter(|cell| claimed_o.contains(cell)).count();
    x_matches == 1 && o_matches == 1
}

/// Checks whether the game is drawn.
///
/// Caller has already established that neither player has won. Returns
/// true iff every winning combination is either fully claimed by the
/// union of both players' cells (dead) or blocked one-against-one.
/// Returns false as soon as a combination someone could still complete
/// is found.
///
/// A full board with no winner makes every combination dead, so no
/// separate full-board check is needed.
#[instrument]
pub fn is_draw(claimed_x: &[Cell], claimed_o: &[Cell]) -> bool {
    for combo in &LINES {
        let dead = combo
            .iter()
            .all(|cell| claimed_x.contains(cell) || claimed_o.contains(cell));

        if !dead && !line_blocked(combo, claimed_x, claimed_o) {
            return false;
        }
    }

    true
}
