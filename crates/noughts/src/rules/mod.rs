//! Win and draw evaluation over claimed-cell sets.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{Combo, LINES, has_won, winning_line};
