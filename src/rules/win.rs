//! Win detection for freestyle gobang
//!
//! Five or more contiguous same-color stones along any axis win; overlines
//! count. A placement can only complete a line through itself, so the check
//! runs at the cell just played.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check whether the stone at `pos` completes five or more in a row.
///
/// Counts the stone at `pos` plus contiguous same-color stones in both
/// senses of each axis. No allocation; call it right after a placement.
#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn has_five_at(board: &Board, pos: Pos, stone: Stone) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1i32; // the stone at pos

        // Positive sense
        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
            count += 1;
            r += dr;
            c += dc;
        }

        // Negative sense
        let mut r = i32::from(pos.row) - dr;
        let mut c = i32::from(pos.col) - dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
            count += 1;
            r -= dr;
            c -= dc;
        }

        if count >= 5 {
            return true;
        }
    }
    false
}

/// Find five cells of the winning line through `pos`, if one exists.
///
/// Walks each axis backward then forward from `pos` and returns the first
/// five cells of the run, for highlighting. `Some` exactly when
/// [`has_five_at`] is true for the same arguments.
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn find_five_line(board: &Board, pos: Pos, stone: Stone) -> Option<[Pos; 5]> {
    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        let mut r = i32::from(pos.row) - dr;
        let mut c = i32::from(pos.col) - dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
            line.insert(0, Pos::new(r as u8, c as u8));
            r -= dr;
            c -= dc;
        }

        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
            line.push(Pos::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }

        if line.len() >= 5 {
            let mut five = [pos; 5];
            five.copy_from_slice(&line[..5]);
            return Some(five);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for col in 0..5 {
            board.place(Pos::new(7, col), Stone::Black).unwrap();
        }
        assert!(has_five_at(&board, Pos::new(7, 4), Stone::Black));
        assert!(has_five_at(&board, Pos::new(7, 0), Stone::Black));
        assert!(has_five_at(&board, Pos::new(7, 2), Stone::Black));
        assert!(!has_five_at(&board, Pos::new(7, 4), Stone::White));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place(Pos::new(7, col), Stone::Black).unwrap();
        }
        assert!(!has_five_at(&board, Pos::new(7, 3), Stone::Black));
        assert!(find_five_line(&board, Pos::new(7, 3), Stone::Black).is_none());
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for row in 3..8 {
            board.place(Pos::new(row, 9), Stone::White).unwrap();
        }
        assert!(has_five_at(&board, Pos::new(5, 9), Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Pos::new(4 + i, 4 + i), Stone::Black).unwrap();
        }
        assert!(has_five_at(&board, Pos::new(6, 6), Stone::Black));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let mut board = Board::new();
        // From (4, 8) down-left to (8, 4)
        for i in 0..5 {
            board.place(Pos::new(4 + i, 8 - i), Stone::White).unwrap();
        }
        assert!(has_five_at(&board, Pos::new(4, 8), Stone::White));
        assert!(has_five_at(&board, Pos::new(8, 4), Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for col in 2..8 {
            board.place(Pos::new(7, col), Stone::Black).unwrap();
        }
        assert!(has_five_at(&board, Pos::new(7, 5), Stone::Black));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        for col in 0..5 {
            board.place(Pos::new(14, col), Stone::Black).unwrap();
        }
        assert!(has_five_at(&board, Pos::new(14, 4), Stone::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        // Diagonal from (10, 10) into the corner
        for i in 0..5 {
            board.place(Pos::new(10 + i, 10 + i), Stone::White).unwrap();
        }
        assert!(has_five_at(&board, Pos::new(14, 14), Stone::White));
    }

    #[test]
    fn test_fifth_stone_completes_but_fourth_does_not() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place(Pos::new(7, col), Stone::Black).unwrap();
        }
        assert!(!has_five_at(&board, Pos::new(7, 3), Stone::Black));

        board.place(Pos::new(7, 4), Stone::Black).unwrap();
        assert!(has_five_at(&board, Pos::new(7, 4), Stone::Black));
    }

    #[test]
    fn test_interrupted_run_not_win() {
        let mut board = Board::new();
        // B B B B W B
        for col in 0..4 {
            board.place(Pos::new(7, col), Stone::Black).unwrap();
        }
        board.place(Pos::new(7, 4), Stone::White).unwrap();
        board.place(Pos::new(7, 5), Stone::Black).unwrap();
        assert!(!has_five_at(&board, Pos::new(7, 3), Stone::Black));
        assert!(!has_five_at(&board, Pos::new(7, 5), Stone::Black));
    }

    #[test]
    fn test_find_five_line_returns_the_run() {
        let mut board = Board::new();
        for col in 3..8 {
            board.place(Pos::new(9, col), Stone::Black).unwrap();
        }

        let line = find_five_line(&board, Pos::new(9, 5), Stone::Black).unwrap();
        let expected: Vec<Pos> = (3..8).map(|col| Pos::new(9, col)).collect();
        assert_eq!(line.to_vec(), expected);
    }

    #[test]
    fn test_find_five_line_overline_takes_first_five() {
        let mut board = Board::new();
        for col in 2..8 {
            board.place(Pos::new(9, col), Stone::Black).unwrap();
        }

        let line = find_five_line(&board, Pos::new(9, 4), Stone::Black).unwrap();
        let expected: Vec<Pos> = (2..7).map(|col| Pos::new(9, col)).collect();
        assert_eq!(line.to_vec(), expected);
    }

    #[test]
    fn test_find_five_line_agrees_with_has_five_at() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Pos::new(2 + i, 11 - i), Stone::White).unwrap();
        }

        for row in 0..15u8 {
            for col in 0..15u8 {
                let pos = Pos::new(row, col);
                assert_eq!(
                    has_five_at(&board, pos, Stone::White),
                    find_five_line(&board, pos, Stone::White).is_some(),
                    "disagreement at ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_empty_board_no_five() {
        let board = Board::new();
        assert!(!has_five_at(&board, Pos::new(7, 7), Stone::Black));
        assert!(find_five_line(&board, Pos::new(7, 7), Stone::White).is_none());
    }
}
