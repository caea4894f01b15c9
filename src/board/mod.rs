//! Board representation for gobang (freestyle five-in-a-row)

use std::fmt;

use thiserror::Error;

pub mod bitboard;
pub mod board;


pub use bitboard::Bitboard;
pub use board::Board;

/// Side length of the square board
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Cell contents: empty, or a stone of one of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// The other player's color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Empty => write!(f, "Empty"),
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

/// Board coordinates, row-major from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Flat cell index in `0..TOTAL_CELLS`
    #[inline]
    pub fn to_index(self) -> usize {
        usize::from(self.row) * BOARD_SIZE + usize::from(self.col)
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Whether signed coordinates land on the board
    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        const SIZE: i32 = BOARD_SIZE as i32;
        (0..SIZE).contains(&row) && (0..SIZE).contains(&col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a placement request was rejected
///
/// `Occupied` is the only variant the board itself produces; the rest come
/// from the session layer validating turn order and game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("cell {0} is already occupied")]
    Occupied(Pos),
    #[error("it is not {0}'s turn")]
    OutOfTurn(Stone),
    #[error("the game is already over")]
    GameOver,
}
