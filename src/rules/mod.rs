//! Game rules for freestyle gobang
//!
//! Freestyle rules only: five or more in a row wins (overlines included),
//! any empty cell is playable, no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line, has_five_at};
