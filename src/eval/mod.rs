//! Evaluation module for gobang candidate moves
//!
//! This module scores prospective placements:
//! - Line scanning along the four axes through a cell
//! - Pattern weights keyed by (run length, open ends)
//! - Offense plus discounted defense for move choice

pub mod heuristic;
pub mod patterns;

// Re-exports for convenient access
pub use heuristic::{
    combined_score, evaluate_point, scan_run, score_run, Run, DEFENSE_WEIGHT_PERCENT,
};
pub use patterns::PatternScore;
