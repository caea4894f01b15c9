//! Game state management for the gobang GUI

use crate::{AiEngine, Board, GameSession, MoveResult, Pos, Stone};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Minimum wait before the computer's reply is placed on the board.
///
/// The engine answers in well under a frame; without this pause the reply
/// stone would appear in the same instant as the human's click.
const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs computer
    PvE { human_color: Stone },
    /// Player vs player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// Computer move computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub session: GameSession,
    pub mode: GameMode,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            session: GameSession::new(),
            mode,
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
        }
    }

    /// Start over in the same mode
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// The computer's color, or `None` in a hotseat game
    fn engine_color(&self) -> Option<Stone> {
        match self.mode {
            GameMode::PvE { human_color } => Some(human_color.opponent()),
            GameMode::PvP => None,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.engine_color() == Some(self.session.to_move())
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_ai_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone at the given position for the human player
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.session.is_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("Computer is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let stone = self.session.to_move();
        self.session
            .attempt_placement(i32::from(pos.row), i32::from(pos.col), stone)
            .map_err(|err| err.to_string())?;

        self.suggested_move = None;
        self.message = None;
        Ok(())
    }

    /// Start computing the computer's reply on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if self.is_ai_thinking() || self.session.is_over() || !self.is_ai_turn() {
            return;
        }

        self.ai_state = AiState::Thinking {
            receiver: spawn_engine(self.session.board().clone(), self.session.to_move()),
            start_time: Instant::now(),
        };
    }

    /// Poll the worker thread and apply the computer's move once it is
    /// ready and the presentation delay has passed
    pub fn check_ai_result(&mut self) {
        let (receiver, start_time) = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => (receiver, start_time),
            AiState::Idle => return,
        };

        // Hold the reply back until the pause has run out, even when the
        // engine finished long ago
        if start_time.elapsed() < AI_MOVE_DELAY {
            return;
        }

        match receiver.try_recv() {
            Ok(reply) => {
                self.ai_state = AiState::Idle;
                self.apply_engine_reply(reply);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.ai_state = AiState::Idle;
                self.message = Some("Computer move failed".to_string());
            }
        }
    }

    fn apply_engine_reply(&mut self, reply: MoveResult) {
        self.last_ai_result = Some(reply.clone());

        match reply.best_move {
            Some(pos) => {
                let stone = self.session.to_move();
                match self
                    .session
                    .attempt_placement(i32::from(pos.row), i32::from(pos.col), stone)
                {
                    Ok(_) => {
                        self.suggested_move = None;
                        self.message = None;
                    }
                    Err(err) => self.message = Some(err.to_string()),
                }
            }
            None => self.message = Some("No empty cell left to play".to_string()),
        }
    }

    /// Compute a move suggestion for the side to move (hotseat hint)
    pub fn request_suggestion(&mut self) {
        if self.session.is_over() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AiEngine::new();
        let result = engine.select_move_with_stats(self.session.board(), self.session.to_move());

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }
}

/// Run one engine query on a worker thread, reporting through a channel
fn spawn_engine(board: Board, stone: Stone) -> Receiver<MoveResult> {
    let (tx, rx) = channel();
    thread::spawn(move || {
        let mut engine = AiEngine::new();
        let _ = tx.send(engine.select_move_with_stats(&board, stone));
    });
    rx
}
