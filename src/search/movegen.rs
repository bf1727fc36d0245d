//! Candidate move generation
//!
//! Produces the moves worth searching: empty cells near existing stones,
//! minus Black's forbidden points, ordered by a cheap line-length heuristic
//! and capped to a breadth limit.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::rules::is_forbidden;

/// Only cells within this Chebyshev distance of a stone are considered
pub const NEIGHBOR_RADIUS: i32 = 2;

/// Weight of a run by its length after the hypothetical placement.
/// Index 5 covers five and longer.
const RUN_WEIGHTS: [i32; 6] = [0, 1, 10, 100, 1_000, 100_000];

/// Ordering score for playing `pos`: what the mover builds there plus what
/// the opponent would have built there.
pub fn score_move(board: &Board, pos: Pos, color: Stone) -> i32 {
    let opponent = color.opponent();
    DIRECTIONS
        .iter()
        .map(|&dir| {
            let attack = board.run_length(pos, dir, color).min(5) as usize;
            let block = board.run_length(pos, dir, opponent).min(5) as usize;
            RUN_WEIGHTS[attack] + RUN_WEIGHTS[block]
        })
        .sum()
}

/// Candidate moves with their ordering scores, best first.
///
/// Ties keep row-major order, so the list is fully deterministic. An empty
/// board yields no candidates; the caller decides the opening move.
pub fn scored_candidates(board: &Board, color: Stone, limit: usize) -> Vec<(Pos, i32)> {
    let mut moves: Vec<(Pos, i32)> = board
        .empty_cells()
        .filter(|&pos| board.has_neighbor(pos, NEIGHBOR_RADIUS))
        .filter(|&pos| color != Stone::Black || !is_forbidden(board, pos))
        .map(|pos| (pos, score_move(board, pos, color)))
        .collect();

    // Stable sort keeps the row-major order among equal scores
    moves.sort_by(|a, b| b.1.cmp(&a.1));
    moves.truncate(limit);
    moves
}

/// Candidate moves, best first, at most `limit` of them
pub fn candidates(board: &Board, color: Stone, limit: usize) -> Vec<Pos> {
    scored_candidates(board, color, limit)
        .into_iter()
        .map(|(pos, _)| pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_candidates() {
        let board = Board::new();
        assert!(candidates(&board, Stone::Black, 20).is_empty());
    }

    #[test]
    fn test_candidates_within_radius() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let moves = candidates(&board, Stone::White, usize::MAX);
        // 5x5 square minus the occupied center
        assert_eq!(moves.len(), 24);
        assert!(moves.iter().all(|m| m.distance(Pos::new(7, 7)) <= 2));
        assert!(!moves.contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_radius_clipped_at_corner() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        assert_eq!(candidates(&board, Stone::Black, usize::MAX).len(), 8);
    }

    #[test]
    fn test_limit_truncates() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert_eq!(candidates(&board, Stone::White, 10).len(), 10);
    }

    #[test]
    fn test_winning_cell_ranked_first() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(7, c), Stone::White);
        }
        board.place_stone(Pos::new(7, 2), Stone::Black);
        let moves = candidates(&board, Stone::White, 5);
        assert_eq!(moves[0], Pos::new(7, 7));
    }

    #[test]
    fn test_block_ranked_high_for_defender() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(7, c), Stone::White);
        }
        board.place_stone(Pos::new(7, 2), Stone::Black);
        // Black has nothing of its own; stopping the five dominates
        let moves = candidates(&board, Stone::Black, 3);
        assert_eq!(moves[0], Pos::new(7, 7));
    }

    #[test]
    fn test_ties_in_row_major_order() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let scored = scored_candidates(&board, Stone::White, usize::MAX);
        for pair in scored.windows(2) {
            let ((p1, s1), (p2, s2)) = (pair[0], pair[1]);
            assert!(s1 > s2 || (s1 == s2 && p1 < p2), "{p1} {s1} / {p2} {s2}");
        }
    }

    #[test]
    fn test_deterministic() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);
        board.place_stone(Pos::new(6, 8), Stone::Black);
        let first = candidates(&board, Stone::White, 15);
        let second = candidates(&board, Stone::White, 15);
        assert_eq!(first, second);
    }

    #[test]
    fn test_black_forbidden_excluded() {
        let mut board = Board::new();
        for (r, c) in [(7, 6), (7, 8), (6, 7), (8, 7)] {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        let black = candidates(&board, Stone::Black, usize::MAX);
        assert!(!black.contains(&Pos::new(7, 7)));
        let white = candidates(&board, Stone::White, usize::MAX);
        assert!(white.contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_score_move_prefers_longer_lines() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::Black);
        let extend = score_move(&board, Pos::new(7, 9), Stone::Black);
        let side = score_move(&board, Pos::new(9, 9), Stone::Black);
        assert!(extend > side);
    }
}
