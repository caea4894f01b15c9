//! Packed occupancy set, one bit per cell

use super::{Pos, TOTAL_CELLS};

/// Words needed for one bit per cell (225 bits fit in 4 x u64)
const WORDS: usize = (TOTAL_CELLS + 63) / 64;

/// Stone positions of a single color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    words: [u64; WORDS],
}

/// Word index and mask addressing one cell
#[inline]
fn slot(pos: Pos) -> (usize, u64) {
    let idx = pos.to_index();
    (idx >> 6, 1u64 << (idx & 63))
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    #[inline]
    pub fn insert(&mut self, pos: Pos) {
        let (word, mask) = slot(pos);
        self.words[word] |= mask;
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        let (word, mask) = slot(pos);
        self.words[word] & mask != 0
    }

    /// Number of stones present
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == [0; WORDS]
    }
}
