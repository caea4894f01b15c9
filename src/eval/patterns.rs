//! Pattern scores for point evaluation
//!
//! Weights for the line a prospective stone would complete, keyed by run
//! length and how many ends stay open. Every value is a multiple of ten so
//! the 80% defensive discount stays exact in integer arithmetic.

/// Pattern scores for evaluation
///
/// Names describe the line including the stone being considered: a pivot
/// with three same-color neighbors on an axis reads as a four.
pub struct PatternScore;

impl PatternScore {
    /// Five (or more) in a row - win
    pub const FIVE: i32 = 100_000;
    /// Open four: _OOOO_ (two ways to complete)
    pub const FOUR: i32 = 10_000;
    /// Blocked four: XOOOO_ (one way to complete)
    pub const BLOCKED_FOUR: i32 = 1_000;
    /// Open three: _OOO_ (same weight as a blocked four)
    pub const THREE: i32 = 1_000;
    /// Blocked three: XOOO_
    pub const BLOCKED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const TWO: i32 = 100;
    /// Blocked two: XOO_
    pub const BLOCKED_TWO: i32 = 10;
    /// Open one: _O_ (a lone placement already reads as a two, so the one
    /// tiers never come up in run scoring)
    pub const ONE: i32 = 10;
    /// Blocked one: XO_
    pub const BLOCKED_ONE: i32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        // Strict drops between tiers, with the deliberate shared weights
        assert!(PatternScore::FIVE > PatternScore::FOUR);
        assert!(PatternScore::FOUR > PatternScore::BLOCKED_FOUR);
        assert_eq!(PatternScore::BLOCKED_FOUR, PatternScore::THREE);
        assert!(PatternScore::THREE > PatternScore::BLOCKED_THREE);
        assert_eq!(PatternScore::BLOCKED_THREE, PatternScore::TWO);
        assert!(PatternScore::TWO > PatternScore::BLOCKED_TWO);
        assert_eq!(PatternScore::BLOCKED_TWO, PatternScore::ONE);
        assert!(PatternScore::ONE > PatternScore::BLOCKED_ONE);
        assert!(PatternScore::BLOCKED_ONE > 0);
    }

    #[test]
    fn test_defense_discount_stays_exact() {
        // The selector weights defense at 80%; every score the run scanner
        // can produce must divide exactly.
        for score in [
            PatternScore::FIVE,
            PatternScore::FOUR,
            PatternScore::BLOCKED_FOUR,
            PatternScore::THREE,
            PatternScore::BLOCKED_THREE,
            PatternScore::TWO,
            PatternScore::BLOCKED_TWO,
        ] {
            assert_eq!(
                score * 80 % 100,
                0,
                "score {} does not discount exactly",
                score
            );
        }
    }
}
