//! Pattern scores for renju evaluation
//!
//! Each tier is an order of magnitude (or half of one) above the next so a
//! handful of weaker shapes never outweighs a single stronger one.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i32 = 1_000_000;
    /// Open four: _OOOO_ (two ways to make five)
    pub const OPEN_FOUR: i32 = 100_000;
    /// Four with one open end: XOOOO_
    pub const FOUR: i32 = 10_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 5_000;
    /// Three with one open end: XOOO_
    pub const THREE: i32 = 500;
    /// Two with at least one open end
    pub const TWO: i32 = 50;
}

/// Opponent shapes weigh 6/5 of our own so that, other things equal, the
/// engine prefers breaking the opponent's line to extending its own.
pub const DEFENSE_NUMERATOR: i32 = 6;
pub const DEFENSE_DENOMINATOR: i32 = 5;

/// Score a run of `length` stones with `open_ends` empty flanks (0..=2).
///
/// Runs that cannot grow (both ends blocked) are worthless unless they are
/// already five long.
pub fn shape_score(length: u32, open_ends: u32) -> i32 {
    match (length, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (_, 0) => 0,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, _) => PatternScore::FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, _) => PatternScore::THREE,
        (2, _) => PatternScore::TWO,
        _ => 0,
    }
}
