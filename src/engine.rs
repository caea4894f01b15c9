//! Move selection engine
//!
//! One-ply selection: every empty cell is scored with the combined
//! offense/defense heuristic, the maximum is tracked together with all cells
//! tying it, and one of the tied cells is picked uniformly at random. The
//! randomness source is injected so hosts get varied games while tests and
//! replays stay reproducible.
//!
//! # Example
//!
//! ```
//! use gobang::{AiEngine, Board, Pos, Stone};
//!
//! let mut engine = AiEngine::from_seed(42);
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.select_move_with_stats(&board, Stone::White);
//! println!("Reply: {:?}", result.best_move);
//! println!("Score: {} ({} cells tied)", result.score, result.tied);
//! ```

use std::time::Instant;

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::eval::combined_score;

/// Result of a move selection with diagnostics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Selected move; `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Combined score of the selected cell (every tied cell shares it);
    /// 0 when no move exists
    pub score: i32,
    /// Number of cells that tied for the best score
    pub tied: usize,
    /// Number of empty cells examined
    pub evaluated: u32,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Move selection engine with an injected randomness source.
///
/// The engine looks exactly one move ahead: it never simulates replies, so
/// selection cost is one evaluation per empty cell. Randomness only breaks
/// ties between equally scored cells.
///
/// # Example
///
/// ```
/// use gobang::{AiEngine, Board, Stone};
///
/// let mut engine = AiEngine::new();
/// let board = Board::new();
/// if let Some(pos) = engine.select_move(&board, Stone::Black) {
///     println!("Open at ({}, {})", pos.row, pos.col);
/// }
/// ```
pub struct AiEngine<R: Rng = SmallRng> {
    rng: R,
}

impl AiEngine<SmallRng> {
    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed seed.
    ///
    /// Identical seeds reproduce identical tie-break choices, which is what
    /// tests and replays want.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> AiEngine<R> {
    /// Create an engine from any randomness source.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Select a move for `stone`.
    ///
    /// Convenience wrapper around [`select_move_with_stats`] that drops the
    /// diagnostics.
    ///
    /// # Returns
    ///
    /// The selected cell, or `None` if the board has no empty cell.
    ///
    /// [`select_move_with_stats`]: Self::select_move_with_stats
    #[must_use]
    pub fn select_move(&mut self, board: &Board, stone: Stone) -> Option<Pos> {
        self.select_move_with_stats(board, stone).best_move
    }

    /// Select a move for `stone`, with diagnostics.
    ///
    /// Scans the board in row-major order, scores every empty cell with
    /// [`combined_score`], keeps the running maximum plus all cells tying
    /// it, and finally picks one of the tied cells uniformly at random.
    /// Occupied cells are never candidates.
    #[must_use]
    pub fn select_move_with_stats(&mut self, board: &Board, stone: Stone) -> MoveResult {
        let start = Instant::now();

        let mut best_score = 0;
        let mut candidates: Vec<Pos> = Vec::new();
        let mut evaluated = 0u32;

        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                if !board.is_empty(pos) {
                    continue;
                }
                evaluated += 1;

                let score = combined_score(board, pos, stone);
                if candidates.is_empty() || score > best_score {
                    best_score = score;
                    candidates.clear();
                    candidates.push(pos);
                } else if score == best_score {
                    candidates.push(pos);
                }
            }
        }

        let tied = candidates.len();
        let best_move = candidates.choose(&mut self.rng).copied();
        let score = if best_move.is_some() { best_score } else { 0 };
        let time_ms = start.elapsed().as_millis() as u64;

        if let Some(pos) = best_move {
            debug!(
                "{} plays {} (score {}, {} tied of {} empty, {} ms)",
                stone, pos, score, tied, evaluated, time_ms
            );
        }

        MoveResult {
            best_move,
            score,
            tied,
            evaluated,
            time_ms,
        }
    }
}

impl Default for AiEngine<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}
