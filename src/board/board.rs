//! Board structure with apply/undo history

use std::fmt;

use crate::error::GameError;

use super::bitboard::Bitboard;
use super::zobrist::ZOBRIST;
use super::{Pos, Stone, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};

/// A stone placement. The color is the player who acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

/// Game board.
///
/// Search explores positions by calling [`Board::apply`] and [`Board::undo`]
/// in strict LIFO pairs on a single board instead of cloning it per node.
/// Every cell write also updates the Zobrist fingerprint returned by
/// [`Board::hash`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    black: Bitboard,
    white: Bitboard,
    hash: u64,
    history: Vec<Move>,
}

impl Board {
    /// Standard 15x15 board
    pub fn new() -> Self {
        Self::blank(DEFAULT_SIZE)
    }

    /// Board of a given side length (5..=16).
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GameError::UnsupportedSize(size));
        }
        Ok(Self::blank(size))
    }

    fn blank(size: usize) -> Self {
        Self {
            size,
            black: Bitboard::new(),
            white: Bitboard::new(),
            hash: 0,
            history: Vec::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check raw coordinates against the board edges
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        usize::from(pos.row) < self.size && usize::from(pos.col) < self.size
    }

    /// Convert raw coordinates to a position if they are on the board
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        if self.in_bounds(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Row-major cell index. Off-board positions are a caller bug.
    #[inline]
    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position {} is off a {}x{} board",
            pos,
            self.size,
            self.size
        );
        usize::from(pos.row) * self.size + usize::from(pos.col)
    }

    #[inline]
    fn pos_of(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as u8, (idx % self.size) as u8)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Put a stone on an empty cell without recording history.
    /// Used for fixtures and for tentative placements that are removed
    /// again before returning.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        assert!(self.is_empty(pos), "cell {pos} is already occupied");
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => return,
        }
        self.hash ^= ZOBRIST.key(idx, stone);
    }

    /// Clear a cell
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let stone = self.get(pos);
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
        self.hash ^= ZOBRIST.key(idx, stone);
    }

    /// Play a move and remember it for [`Board::undo`].
    #[inline]
    pub fn apply(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(stone != Stone::Empty, "cannot apply an empty stone");
        self.place_stone(pos, stone);
        self.history.push(Move { pos, stone });
    }

    /// Take back the most recent applied move
    #[inline]
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.remove_stone(mv.pos);
        Some(mv)
    }

    /// Most recent applied move
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Applied moves, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Length of the contiguous run of `color` through `pos` along `dir`,
    /// scanning both signs. `pos` itself counts once whatever it holds, so a
    /// lone stone yields 1 and an empty `pos` answers "what if `color`
    /// played here".
    pub fn run_length(&self, pos: Pos, dir: (i32, i32), color: Stone) -> u32 {
        let mut count = 1;
        for sign in [1, -1] {
            let mut k = 1;
            while let Some(p) = self.pos_at_offset(pos, dir, sign * k) {
                if self.get(p) != color {
                    break;
                }
                count += 1;
                k += 1;
            }
        }
        count
    }

    #[inline]
    pub fn pos_at_offset(&self, pos: Pos, dir: (i32, i32), k: i32) -> Option<Pos> {
        let (r, c) = pos.offset(dir, k);
        self.pos_at(r, c)
    }

    /// Positions of all stones of a color, row-major
    pub fn stones(&self, color: Stone) -> impl Iterator<Item = Pos> + '_ {
        let bits = match color {
            Stone::Black => Some(self.black),
            Stone::White => Some(self.white),
            Stone::Empty => None,
        };
        bits.into_iter()
            .flat_map(|b| b.iter_ones())
            .map(move |idx| self.pos_of(idx))
    }

    /// Every cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let n = self.size as u8;
        (0..n).flat_map(move |r| (0..n).map(move |c| Pos::new(r, c)))
    }

    /// Empty cells, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells().filter(move |&p| self.is_empty(p))
    }

    /// True if any stone lies within Chebyshev distance `radius` of `pos`
    pub fn has_neighbor(&self, pos: Pos, radius: i32) -> bool {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;
                if let Some(p) = self.pos_at(r, c) {
                    if !self.is_empty(p) {
                        return true;
                    }
                }
            }
        }
        false
    }

    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn count(&self, color: Stone) -> u32 {
        match color {
            Stone::Black => self.black.count(),
            Stone::White => self.white.count(),
            Stone::Empty => (self.size * self.size) as u32 - self.stone_count(),
        }
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Center cell, (7, 7) on the standard board
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Zobrist fingerprint of the stones on the board
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Remove every stone and forget history
    pub fn clear(&mut self) {
        *self = Self::blank(self.size);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{c:3}")?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{r:3}")?;
            for c in 0..self.size {
                let pos = Pos::new(r as u8, c as u8);
                write!(f, "  {}", self.get(pos).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
