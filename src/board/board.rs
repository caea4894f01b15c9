//! Board state backed by two per-color occupancy sets

use super::bitboard::Bitboard;
use super::{PlaceError, Pos, Stone, TOTAL_CELLS};

/// Game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Stone at the given cell
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        match (self.black.contains(pos), self.white.contains(pos)) {
            (true, _) => Stone::Black,
            (_, true) => Stone::White,
            _ => Stone::Empty,
        }
    }

    /// Whether the cell holds no stone
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone on an empty cell
    ///
    /// The only way the board changes: a cell goes from `Empty` to a player
    /// color, never the other way. Placing `Stone::Empty` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `PlaceError::Occupied` if the cell already holds a stone.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), PlaceError> {
        if !self.is_empty(pos) {
            return Err(PlaceError::Occupied(pos));
        }
        match stone {
            Stone::Black => self.black.insert(pos),
            Stone::White => self.white.insert(pos),
            Stone::Empty => {}
        }
        Ok(())
    }

    /// Stones of both colors together
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
