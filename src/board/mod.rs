//! Board representation for renju

pub mod bitboard;
pub mod board;
pub mod zobrist;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Move};

/// Standard renju board size (15x15)
pub const DEFAULT_SIZE: usize = 15;
/// Smallest board on which five-in-a-row is still playable
pub const MIN_SIZE: usize = 5;
/// Largest board the bitboards can hold
pub const MAX_SIZE: usize = 16;
pub const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE; // 256

/// Line directions as (row delta, col delta). The opposite sign of each is
/// scanned in the same pass, so these four cover all eight rays.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Text symbol used by the terminal front-end
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build from UI coordinates, where `x` is the column and `y` the row.
    #[inline]
    pub const fn from_xy(x: u8, y: u8) -> Self {
        Self { row: y, col: x }
    }

    /// Step `k` cells along a direction. Returns raw coordinates so callers
    /// can bounds-check against their board.
    #[inline]
    pub fn offset(self, (dr, dc): (i32, i32), k: i32) -> (i32, i32) {
        (i32::from(self.row) + dr * k, i32::from(self.col) + dc * k)
    }

    /// Chebyshev distance between two cells
    #[inline]
    pub fn distance(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering, which is also the tie-break order for move lists.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
