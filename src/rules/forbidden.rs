//! Renju forbidden moves for Black
//!
//! Black may not play a move that creates, in the order tested:
//! 1. an overline (six or more in a row),
//! 2. two or more open threes (`_XXX_`) at once,
//! 3. two or more open fours (`_XXXX_`) at once.
//!
//! White has no restrictions. All checks evaluate a tentative Black stone on
//! an empty cell without modifying the board.

use std::fmt;

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::pattern::LineWindow;

/// Why a Black move is forbidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForbiddenKind {
    Overline,
    DoubleThree,
    DoubleFour,
}

impl fmt::Display for ForbiddenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ForbiddenKind::Overline => "overline",
            ForbiddenKind::DoubleThree => "double three",
            ForbiddenKind::DoubleFour => "double four",
        };
        f.write_str(name)
    }
}

/// Run of six or more through `pos` if Black played there
pub fn is_overline(board: &Board, pos: Pos) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| board.run_length(pos, dir, Stone::Black) >= 6)
}

/// Number of directions in which `color` at `pos` shows an open three
pub fn count_open_threes(board: &Board, pos: Pos, color: Stone) -> usize {
    DIRECTIONS
        .iter()
        .filter(|&&dir| LineWindow::with_stone_at(board, pos, dir, color).has_open_three())
        .count()
}

/// Number of directions in which `color` at `pos` shows an open four
pub fn count_open_fours(board: &Board, pos: Pos, color: Stone) -> usize {
    DIRECTIONS
        .iter()
        .filter(|&&dir| LineWindow::with_stone_at(board, pos, dir, color).has_open_four())
        .count()
}

/// Classify a Black move on an empty cell.
///
/// Returns `None` for legal moves and for occupied cells; occupancy is a
/// separate error that callers check first.
pub fn forbidden_kind(board: &Board, pos: Pos) -> Option<ForbiddenKind> {
    if !board.is_empty(pos) {
        return None;
    }
    if is_overline(board, pos) {
        return Some(ForbiddenKind::Overline);
    }
    if count_open_threes(board, pos, Stone::Black) >= 2 {
        return Some(ForbiddenKind::DoubleThree);
    }
    if count_open_fours(board, pos, Stone::Black) >= 2 {
        return Some(ForbiddenKind::DoubleFour);
    }
    None
}

/// Check if Black is forbidden from playing at `pos`
#[inline]
pub fn is_forbidden(board: &Board, pos: Pos) -> bool {
    forbidden_kind(board, pos).is_some()
}

/// A move is legal if the cell is empty and, for Black, not forbidden
#[inline]
pub fn is_legal(board: &Board, pos: Pos, stone: Stone) -> bool {
    board.is_empty(pos) && (stone != Stone::Black || !is_forbidden(board, pos))
}
