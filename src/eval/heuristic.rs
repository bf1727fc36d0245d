//! Heuristic evaluation function for renju board positions
//!
//! Leaf heuristic for the minimax search. It is never asked about terminal
//! positions: the search detects five-in-a-row itself before reaching a leaf.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::patterns::{shape_score, DEFENSE_DENOMINATOR, DEFENSE_NUMERATOR};

/// Evaluations are clamped below the search's win score
pub const MAX_EVAL: i32 = 500_000_000;

/// Evaluate the board from the perspective of `color`.
///
/// Sums a tier reward over every stone of `color` and every direction, then
/// subtracts the opponent's sum scaled up by the defense weight. Positive
/// values favor `color`.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let mine = i64::from(evaluate_patterns(board, color));
    let theirs = i64::from(evaluate_patterns(board, color.opponent()));
    let score = mine - theirs * i64::from(DEFENSE_NUMERATOR) / i64::from(DEFENSE_DENOMINATOR);
    score.clamp(i64::from(-MAX_EVAL), i64::from(MAX_EVAL)) as i32
}

/// Pattern total for one color.
///
/// Every stone contributes for the run it sits in, so a run of four adds
/// its tier four times. That keeps the sum monotonic in line length.
fn evaluate_patterns(board: &Board, color: Stone) -> i32 {
    board
        .stones(color)
        .flat_map(|pos| DIRECTIONS.iter().map(move |&dir| (pos, dir)))
        .fold(0i32, |total, (pos, dir)| {
            let (length, open_ends) = line_shape(board, pos, dir, color);
            total.saturating_add(shape_score(length, open_ends))
        })
}

/// Length of the run through `pos` and how many of its two flanks are empty
fn line_shape(board: &Board, pos: Pos, dir: (i32, i32), color: Stone) -> (u32, u32) {
    let mut length = 1;
    let mut open_ends = 0;
    for sign in [1, -1] {
        let mut k = 1;
        loop {
            match board.pos_at_offset(pos, dir, sign * k).map(|p| board.get(p)) {
                Some(s) if s == color => {
                    length += 1;
                    k += 1;
                }
                Some(Stone::Empty) => {
                    open_ends += 1;
                    break;
                }
                _ => break,
            }
        }
    }
    (length, open_ends)
}
