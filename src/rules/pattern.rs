//! Fixed-width line windows for shape matching
//!
//! A window is the 9 cells centered on a position along one direction,
//! reduced to a three-symbol alphabet from one player's point of view.
//! Opponent stones and off-board cells are both `Blocked`, so a run that
//! touches the edge can never look open.

use crate::board::{Board, Pos, Stone};

/// Cell as seen by the player whose shapes are being matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Mine,
    Empty,
    Blocked,
}

/// Cells on each side of the center
pub const WINDOW_RADIUS: i32 = 4;
pub const WINDOW_LEN: usize = 2 * WINDOW_RADIUS as usize + 1;

/// `_XXX_`
pub const OPEN_THREE: [Cell; 5] = [Cell::Empty, Cell::Mine, Cell::Mine, Cell::Mine, Cell::Empty];
/// `_XXXX_`
pub const OPEN_FOUR: [Cell; 6] = [
    Cell::Empty,
    Cell::Mine,
    Cell::Mine,
    Cell::Mine,
    Cell::Mine,
    Cell::Empty,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    cells: [Cell; WINDOW_LEN],
}

impl LineWindow {
    /// Window around `pos` with `color` assumed to stand on `pos`.
    ///
    /// The center is never read from the board, which is what lets rule
    /// checks evaluate a tentative stone without touching the board.
    pub fn with_stone_at(board: &Board, pos: Pos, dir: (i32, i32), color: Stone) -> Self {
        let mut cells = [Cell::Blocked; WINDOW_LEN];
        for (slot, k) in cells.iter_mut().zip(-WINDOW_RADIUS..=WINDOW_RADIUS) {
            if k == 0 {
                *slot = Cell::Mine;
                continue;
            }
            *slot = match board.pos_at_offset(pos, dir, k).map(|p| board.get(p)) {
                Some(s) if s == color => Cell::Mine,
                Some(Stone::Empty) => Cell::Empty,
                _ => Cell::Blocked,
            };
        }
        Self { cells }
    }

    pub const fn from_cells(cells: [Cell; WINDOW_LEN]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; WINDOW_LEN] {
        &self.cells
    }

    /// True if `pattern` occurs anywhere as a contiguous sub-slice
    #[inline]
    pub fn contains(&self, pattern: &[Cell]) -> bool {
        self.cells.windows(pattern.len()).any(|w| w == pattern)
    }

    #[inline]
    pub fn has_open_three(&self) -> bool {
        self.contains(&OPEN_THREE)
    }

    #[inline]
    pub fn has_open_four(&self) -> bool {
        self.contains(&OPEN_FOUR)
    }
}
