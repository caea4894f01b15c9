//! Gobang move-evaluation engine
//!
//! A move-evaluation engine for freestyle five-in-a-row (gobang) on a
//! 15x15 board:
//! - 5-in-a-row wins, overlines count, no forbidden moves
//! - one-ply evaluation: offence plus discounted defence for every empty cell
//! - seedable randomness for breaking ties between equally scored cells
//!
//! # Architecture
//!
//! - [`board`]: stones, positions and the bitboard-backed grid
//! - [`eval`]: line scanning and pattern scoring
//! - [`rules`]: win detection
//! - [`engine`]: move selection with injectable randomness
//! - [`session`]: turn-taking game session with a request/response API
//!
//! # Quick Start
//!
//! ```
//! use gobang::{AiEngine, GameSession, MoveOutcome, Stone};
//!
//! let mut session = GameSession::new();
//!
//! // Human opens in the centre
//! session.attempt_placement(7, 7, Stone::Black).unwrap();
//!
//! // Engine answers as White
//! let mut engine = AiEngine::from_seed(42);
//! if let Some(pos) = engine.select_move(session.board(), Stone::White) {
//!     let outcome = session
//!         .attempt_placement(i32::from(pos.row), i32::from(pos.col), Stone::White)
//!         .unwrap();
//!     assert_eq!(outcome, MoveOutcome::Placed);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod session;
pub mod ui;

pub use board::{Board, PlaceError, Pos, Stone, BOARD_SIZE};
pub use engine::{AiEngine, MoveResult};
pub use session::{GameSession, MoveOutcome, SessionStatus};
