//! Zobrist keys for board fingerprinting
//!
//! The board keeps an incrementally updated XOR hash so that search code (and
//! tests) can cheaply prove that a sequence of apply/undo pairs left the
//! position untouched.

use super::{Stone, MAX_CELLS};

/// Random keys for every (cell, color) combination, generated at compile time
/// from a fixed seed so hashes are reproducible across runs.
pub struct ZobristTable {
    black: [u64; MAX_CELLS],
    white: [u64; MAX_CELLS],
}

impl ZobristTable {
    const fn generate() -> Self {
        // Knuth's MMIX LCG, fixed seed
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut black = [0u64; MAX_CELLS];
        let mut white = [0u64; MAX_CELLS];
        let mut i = 0;
        while i < MAX_CELLS {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            black[i] = seed ^ (seed >> 29);
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            white[i] = seed ^ (seed >> 29);
            i += 1;
        }
        Self { black, white }
    }

    /// Key for a stone at a cell index. Empty has no key.
    #[inline]
    pub fn key(&self, idx: usize, stone: Stone) -> u64 {
        match stone {
            Stone::Black => self.black[idx],
            Stone::White => self.white[idx],
            Stone::Empty => 0,
        }
    }
}

pub static ZOBRIST: ZobristTable = ZobristTable::generate();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_distinct_per_color() {
        for idx in 0..MAX_CELLS {
            assert_ne!(ZOBRIST.key(idx, Stone::Black), ZOBRIST.key(idx, Stone::White));
        }
        assert_eq!(ZOBRIST.key(10, Stone::Empty), 0);
    }

    #[test]
    fn test_keys_not_repeated() {
        let mut keys: Vec<u64> = (0..MAX_CELLS)
            .flat_map(|i| [ZOBRIST.key(i, Stone::Black), ZOBRIST.key(i, Stone::White)])
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MAX_CELLS * 2);
    }
}
