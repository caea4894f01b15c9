//! Native egui/eframe front end
//!
//! The window is a menu bar, an info side panel and the board canvas.
//! Engine queries run on a worker thread owned by [`GameState`].

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GobangApp;
pub use game_state::{GameMode, GameState};
