//! Win and draw detection
//!
//! A line of five or more wins for either color. Overlines never arise for
//! Black in legal play because they are forbidden before they are placed.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::forbidden::is_legal;

/// Game outcome after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Ongoing,
    Win(Stone),
    Draw,
}

impl Verdict {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Verdict::Ongoing
    }
}

/// Check if `color` has five or more in a row anywhere
pub fn check_win(board: &Board, color: Stone) -> bool {
    board
        .stones(color)
        .any(|pos| has_five_at(board, pos, color))
}

/// Fast five-in-a-row check through a single cell.
///
/// Only scans the 4 lines through `pos`. `pos` counts as `color` whether or
/// not the stone is actually there, so this doubles as "would this win".
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| board.run_length(pos, dir, color) >= 5)
}

/// Cells of the first winning line found for `color`, in line order
pub fn winning_line(board: &Board, color: Stone) -> Option<Vec<Pos>> {
    for pos in board.stones(color) {
        for &dir in &DIRECTIONS {
            // Only start from the first stone of a run
            if board
                .pos_at_offset(pos, dir, -1)
                .is_some_and(|p| board.get(p) == color)
            {
                continue;
            }
            let mut line = vec![pos];
            let mut k = 1;
            while let Some(p) = board.pos_at_offset(pos, dir, k) {
                if board.get(p) != color {
                    break;
                }
                line.push(p);
                k += 1;
            }
            if line.len() >= 5 {
                return Some(line);
            }
        }
    }
    None
}

/// Legal empty cells where `color` would complete five, row-major
pub fn winning_moves(board: &Board, color: Stone) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&pos| has_five_at(board, pos, color) && is_legal(board, pos, color))
        .collect()
}

/// First legal winning cell for `color`, if any
pub fn find_winning_move(board: &Board, color: Stone) -> Option<Pos> {
    board
        .empty_cells()
        .find(|&pos| has_five_at(board, pos, color) && is_legal(board, pos, color))
}

/// Outcome after `last_mover` has played
pub fn verdict(board: &Board, last_mover: Stone) -> Verdict {
    if check_win(board, last_mover) {
        Verdict::Win(last_mover)
    } else if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    }
}
