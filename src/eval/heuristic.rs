//! Point evaluation for candidate moves
//!
//! Scores what placing a stone on an empty cell would be worth by scanning
//! the four axes through that cell. Each axis contributes one pattern score;
//! a move's value is the sum over the axes, and the selector combines the
//! mover's value with a discounted value for the opponent.

use crate::board::{Board, Pos, Stone};

use super::patterns::PatternScore;

/// Direction vectors for line scanning (4 axes)
/// Each axis is walked in both senses from the pivot cell
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Percentage weight applied to the opponent's gain when combining
/// offense and defense. Below 100 so equal threats resolve to attacking.
pub const DEFENSE_WEIGHT_PERCENT: i32 = 80;

/// Result of scanning one axis from a pivot cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Same-color stones contiguous with the pivot along the axis,
    /// both senses combined. The pivot itself is never counted.
    pub count: u8,
    /// Senses that terminate on an in-bounds empty cell (0, 1 or 2).
    /// An opponent stone or the board edge keeps a sense closed.
    pub open_ends: u8,
}

/// Scan one axis from `pos` for stones of `stone`.
///
/// Walks outward in both senses of `dir`, counting contiguous same-color
/// stones. The first non-matching cell ends a sense: an empty cell marks it
/// open, an opponent stone or the board edge marks it closed. Never reads
/// outside the board and never counts the pivot cell.
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn scan_run(board: &Board, pos: Pos, dir: (i32, i32), stone: Stone) -> Run {
    let (dr, dc) = dir;
    let mut count = 0u8;
    let mut open_ends = 0u8;

    for (sr, sc) in [(-dr, -dc), (dr, dc)] {
        let mut r = i32::from(pos.row) + sr;
        let mut c = i32::from(pos.col) + sc;
        loop {
            if !Pos::is_valid(r, c) {
                break; // Edge: sense stays closed
            }
            match board.get(Pos::new(r as u8, c as u8)) {
                s if s == stone => {
                    count += 1;
                    r += sr;
                    c += sc;
                }
                Stone::Empty => {
                    open_ends += 1;
                    break;
                }
                _ => break, // Opponent stone blocks
            }
        }
    }

    Run { count, open_ends }
}

/// Map a scanned run to its pattern score.
///
/// The pattern is the run plus the prospective stone at the pivot: two
/// neighbors with both ends open read as an open three, and four or more
/// neighbors complete five regardless of the ends.
#[must_use]
pub fn score_run(run: Run) -> i32 {
    match (run.count, run.open_ends) {
        (4.., _) => PatternScore::FIVE,
        (3, 2) => PatternScore::FOUR,
        (3, 1) => PatternScore::BLOCKED_FOUR,
        (2, 2) => PatternScore::THREE,
        (2, 1) => PatternScore::BLOCKED_THREE,
        (1, 2) => PatternScore::TWO,
        (1, 1) => PatternScore::BLOCKED_TWO,
        _ => 0,
    }
}

/// Evaluate what placing `stone` at `pos` would be worth for its owner.
///
/// Sums the pattern scores of all four axes through the cell. Read-only and
/// meaningful for empty cells (the candidate placements); on an empty board
/// every cell evaluates to 0.
#[must_use]
pub fn evaluate_point(board: &Board, pos: Pos, stone: Stone) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&dir| score_run(scan_run(board, pos, dir, stone)))
        .sum()
}

/// Full value of a candidate cell for `stone`: own gain plus 80% of what
/// the opponent would gain there.
///
/// The discount keeps the choice biased toward attacking when a cell is
/// worth the same to both sides. Every pattern score is a multiple of ten,
/// so the integer division is exact.
#[must_use]
pub fn combined_score(board: &Board, pos: Pos, stone: Stone) -> i32 {
    let offense = evaluate_point(board, pos, stone);
    let defense = evaluate_point(board, pos, stone.opponent());
    offense + defense * DEFENSE_WEIGHT_PERCENT / 100
}
