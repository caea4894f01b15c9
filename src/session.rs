//! Game session state machine
//!
//! Wraps a board with turn order and end-of-game tracking. Every placement
//! goes through [`GameSession::attempt_placement`]: the session validates
//! the request, applies it, and reports what happened. Once decided, a game
//! stays decided and rejects all further placements.

use log::info;

use crate::board::{Board, PlaceError, Pos, Stone};
use crate::rules::find_five_line;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting placements
    InProgress,
    /// Five in a row; `line` is the winning run for display
    Won { winner: Stone, line: [Pos; 5] },
    /// Board filled without a five
    Drawn,
}

/// What a successful placement did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stone placed, the other player is up
    Placed,
    /// Stone placed and completed five or more in a row
    Won(Stone),
    /// Stone placed on the last empty cell without making five
    Drawn,
}

/// A single game from the opening move to its terminal state.
///
/// Black opens and turns alternate strictly; the session tracks whose turn
/// it is and refuses placements by the wrong player, on occupied cells, or
/// after the game has ended.
///
/// # Example
///
/// ```
/// use gobang::{GameSession, MoveOutcome, Stone};
///
/// let mut session = GameSession::new();
/// let outcome = session.attempt_placement(7, 7, Stone::Black).unwrap();
/// assert_eq!(outcome, MoveOutcome::Placed);
/// assert_eq!(session.to_move(), Stone::White);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Stone,
    status: SessionStatus,
    last_move: Option<Pos>,
    move_count: u32,
}

impl GameSession {
    /// Start a fresh game: empty board, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Stone::Black,
            status: SessionStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    /// Current board state
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is
    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    /// Current game status
    #[inline]
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Most recently placed stone, if any
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Number of stones placed so far
    #[inline]
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether the game has reached a terminal state
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self.status, SessionStatus::InProgress)
    }

    /// The winning five, if the game has been won
    #[must_use]
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self.status {
            SessionStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Request a placement by `stone` at raw coordinates.
    ///
    /// Validation order: coordinates on the board, game still in progress,
    /// `stone` is the player to move, target cell empty. On any error the
    /// board, the turn and the status are left untouched.
    ///
    /// A winning placement moves the session to [`SessionStatus::Won`], a
    /// board-filling one without five to [`SessionStatus::Drawn`]; otherwise
    /// the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// [`PlaceError::OutOfBounds`], [`PlaceError::GameOver`],
    /// [`PlaceError::OutOfTurn`] or [`PlaceError::Occupied`], per the
    /// validation order above.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn attempt_placement(
        &mut self,
        row: i32,
        col: i32,
        stone: Stone,
    ) -> Result<MoveOutcome, PlaceError> {
        if !Pos::is_valid(row, col) {
            return Err(PlaceError::OutOfBounds { row, col });
        }
        if self.is_over() {
            return Err(PlaceError::GameOver);
        }
        if stone != self.to_move {
            return Err(PlaceError::OutOfTurn(stone));
        }

        let pos = Pos::new(row as u8, col as u8);
        self.board.place(pos, stone)?;

        self.last_move = Some(pos);
        self.move_count += 1;

        if let Some(line) = find_five_line(&self.board, pos, stone) {
            self.status = SessionStatus::Won {
                winner: stone,
                line,
            };
            info!("{} wins with five in a row through {}", stone, pos);
            return Ok(MoveOutcome::Won(stone));
        }

        if self.board.is_full() {
            self.status = SessionStatus::Drawn;
            info!("board full after {} moves, game drawn", self.move_count);
            return Ok(MoveOutcome::Drawn);
        }

        self.to_move = stone.opponent();
        Ok(MoveOutcome::Placed)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.to_move(), Stone::Black);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert!(!session.is_over());
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.last_move(), None);
        assert_eq!(session.board().stone_count(), 0);
    }

    #[test]
    fn test_turns_alternate_from_black() {
        let mut session = GameSession::new();

        assert_eq!(
            session.attempt_placement(7, 7, Stone::White),
            Err(PlaceError::OutOfTurn(Stone::White))
        );

        session.attempt_placement(7, 7, Stone::Black).unwrap();
        assert_eq!(session.to_move(), Stone::White);

        assert_eq!(
            session.attempt_placement(7, 8, Stone::Black),
            Err(PlaceError::OutOfTurn(Stone::Black))
        );

        session.attempt_placement(7, 8, Stone::White).unwrap();
        assert_eq!(session.to_move(), Stone::Black);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut session = GameSession::new();
        for (row, col) in [(-1, 0), (0, -1), (15, 0), (0, 15), (100, 100)] {
            assert_eq!(
                session.attempt_placement(row, col, Stone::Black),
                Err(PlaceError::OutOfBounds { row, col })
            );
        }
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_empty_stone_is_never_on_turn() {
        let mut session = GameSession::new();
        assert_eq!(
            session.attempt_placement(3, 3, Stone::Empty),
            Err(PlaceError::OutOfTurn(Stone::Empty))
        );
    }

    #[test]
    fn test_occupied_cell_leaves_state_unchanged() {
        let mut session = GameSession::new();
        session.attempt_placement(7, 7, Stone::Black).unwrap();

        let err = session.attempt_placement(7, 7, Stone::White).unwrap_err();
        assert_eq!(err, PlaceError::Occupied(Pos::new(7, 7)));

        assert_eq!(session.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(session.to_move(), Stone::White, "turn must not advance");
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn test_fifth_in_a_row_wins() {
        let mut session = GameSession::new();
        // Black builds a row; White plays far away
        for i in 0..4 {
            session.attempt_placement(7, i, Stone::Black).unwrap();
            session.attempt_placement(0, 2 * i, Stone::White).unwrap();
        }

        let outcome = session.attempt_placement(7, 4, Stone::Black).unwrap();
        assert_eq!(outcome, MoveOutcome::Won(Stone::Black));
        assert!(session.is_over());

        let expected: Vec<Pos> = (0..5).map(|col| Pos::new(7, col)).collect();
        match session.status() {
            SessionStatus::Won { winner, line } => {
                assert_eq!(winner, Stone::Black);
                assert_eq!(line.to_vec(), expected);
            }
            other => panic!("expected a win, got {:?}", other),
        }
        assert_eq!(session.winning_line().unwrap().to_vec(), expected);
    }

    #[test]
    fn test_finished_game_rejects_everyone() {
        let mut session = GameSession::new();
        for i in 0..4 {
            session.attempt_placement(7, i, Stone::Black).unwrap();
            session.attempt_placement(0, 2 * i, Stone::White).unwrap();
        }
        session.attempt_placement(7, 4, Stone::Black).unwrap();

        // Neither the loser nor the winner may keep playing
        assert_eq!(
            session.attempt_placement(10, 10, Stone::White),
            Err(PlaceError::GameOver)
        );
        assert_eq!(
            session.attempt_placement(10, 10, Stone::Black),
            Err(PlaceError::GameOver)
        );
    }

    #[test]
    fn test_move_count_and_last_move_track_placements() {
        let mut session = GameSession::new();
        session.attempt_placement(7, 7, Stone::Black).unwrap();
        assert_eq!(session.move_count(), 1);
        assert_eq!(session.last_move(), Some(Pos::new(7, 7)));

        session.attempt_placement(8, 8, Stone::White).unwrap();
        assert_eq!(session.move_count(), 2);
        assert_eq!(session.last_move(), Some(Pos::new(8, 8)));
    }

    /// Full-board placement order with no five anywhere: a period-four
    /// column coloring shifted two columns every row keeps every same-color
    /// run at two or less in all four directions.
    fn draw_order() -> Vec<(Pos, Stone)> {
        let mut blacks = Vec::new();
        let mut whites = Vec::new();
        for row in 0..BOARD_SIZE as u32 {
            for col in 0..BOARD_SIZE as u32 {
                let pos = Pos::new(row as u8, col as u8);
                if (col + 2 * row) % 4 < 2 {
                    blacks.push(pos);
                } else {
                    whites.push(pos);
                }
            }
        }
        assert_eq!(blacks.len(), 113);
        assert_eq!(whites.len(), 112);

        let mut order = Vec::with_capacity(TOTAL_CELLS);
        for i in 0..whites.len() {
            order.push((blacks[i], Stone::Black));
            order.push((whites[i], Stone::White));
        }
        order.push((blacks[112], Stone::Black));
        order
    }

    #[test]
    fn test_full_board_without_five_is_a_draw() {
        let mut session = GameSession::new();
        let order = draw_order();
        let last = order.len() - 1;

        for (i, (pos, stone)) in order.into_iter().enumerate() {
            let outcome = session
                .attempt_placement(pos.row.into(), pos.col.into(), stone)
                .unwrap();
            if i == last {
                assert_eq!(outcome, MoveOutcome::Drawn);
            } else {
                assert_eq!(outcome, MoveOutcome::Placed, "game ended early at move {}", i);
            }
        }

        assert_eq!(session.status(), SessionStatus::Drawn);
        assert!(session.is_over());
        assert_eq!(session.move_count(), TOTAL_CELLS as u32);
        assert_eq!(
            session.attempt_placement(0, 0, Stone::White),
            Err(PlaceError::GameOver)
        );
    }
}
