//! Win detection logic.

use crate::cell::Cell;
use tracing::instrument;

/// A winning combination: three cells forming a row, column, or diagonal.
pub type Combo = [Cell; 3];

/// The 8 winning combinations.
///
/// The enumeration order (3 rows, 3 columns, 2 diagonals) is part of the
/// contract: the first combination contained in a claimed set is the one
/// reported as the winning line.
pub const LINES: [Combo; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns the first combination fully contained in `claimed`.
///
/// `None` if the claimed set completes no combination. A win needs at
/// least 3 cells, so smaller sets return early.
#[instrument]
pub fn winning_line(claimed: &[Cell]) -> Option<Combo> {
    if claimed.len() < 3 {
        return None;
    }

    LINES
        .into_iter()
        .find(|combo| combo.iter().all(|cell| claimed.contains(cell)))
}

/// Checks whether `claimed` is a superset of any winning combination.
#[instrument]
pub fn has_won(claimed: &[Cell]) -> bool {
    winning_line(claimed).is_some()
}
