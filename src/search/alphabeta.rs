//! Depth-limited negamax with alpha-beta pruning
//!
//! Candidates come from the move generator, so the branching factor is the
//! configured breadth. Terminal positions are detected right after a move is
//! applied; the leaf heuristic only sees non-terminal positions.
//!
//! # Example
//!
//! ```
//! use renju::board::{Board, Pos, Stone};
//! use renju::search::Searcher;
//!
//! let mut board = Board::new();
//! board.apply(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new(12);
//! let result = searcher.search(&mut board, Stone::White, 2);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::has_five_at;

use super::movegen::candidates;

/// Score of a win found at the root; deeper wins score less
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Negamax score of the best move for the side to move
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
}

/// Alpha-beta searcher over a mutable board
pub struct Searcher {
    breadth: usize,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher that expands at most `breadth` candidates per node
    #[must_use]
    pub fn new(breadth: usize) -> Self {
        Self { breadth, nodes: 0 }
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `depth` plies ahead for `color`.
    ///
    /// Equal scores keep the earliest candidate in generation order. The
    /// board is restored before returning. `best_move` is `None` only when
    /// the generator has nothing to offer.
    pub fn search(&mut self, board: &mut Board, color: Stone, depth: u8) -> SearchResult {
        self.nodes = 0;
        let before = board.hash();

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let depth = depth.max(1);

        for mv in candidates(board, color, self.breadth) {
            let score = self.score_move(board, mv, color, depth, 0, alpha, INF);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        debug_assert_eq!(board.hash(), before, "alpha-beta left the board modified");
        log::trace!(
            "alpha-beta depth {depth}: {best_move:?} score {best_score}, {} nodes",
            self.nodes
        );

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth,
            nodes: self.nodes,
        }
    }

    /// Value of `color` playing `mv` at `ply`, with `depth` plies left
    /// including this one
    #[allow(clippy::too_many_arguments)]
    fn score_move(
        &mut self,
        board: &mut Board,
        mv: Pos,
        color: Stone,
        depth: u8,
        ply: i32,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        board.apply(mv, color);
        let score = if has_five_at(board, mv, color) {
            WIN_SCORE - ply
        } else {
            -self.negamax(board, color.opponent(), depth - 1, ply + 1, -beta, -alpha)
        };
        board.undo();
        score
    }

    fn negamax(
        &mut self,
        board: &mut Board,
        color: Stone,
        depth: u8,
        ply: i32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate(board, color);
        }

        let moves = candidates(board, color, self.breadth);
        if moves.is_empty() {
            // Full board is a draw; otherwise nothing is left to try here
            return if board.is_full() { 0 } else { evaluate(board, color) };
        }

        let mut best = -INF;
        for mv in moves {
            let score = self.score_move(board, mv, color, depth, ply, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, stones: &[(u8, u8)], color: Stone) {
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), color);
        }
    }

    #[test]
    fn test_empty_generator_gives_no_move() {
        let mut board = Board::new();
        let mut searcher = Searcher::new(12);
        let result = searcher.search(&mut board, Stone::Black, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::White);
        place_all(&mut board, &[(7, 2), (8, 8), (9, 9)], Stone::Black);

        let mut searcher = Searcher::new(12);
        let result = searcher.search(&mut board, Stone::White, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_four() {
        // White to move; Black threatens five at (7,9)
        let mut board = Board::new();
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7), (7, 8)], Stone::Black);
        place_all(&mut board, &[(7, 4), (6, 6)], Stone::White);

        let mut searcher = Searcher::new(12);
        let result = searcher.search(&mut board, Stone::White, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 9)));
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (8, 8)], Stone::Black);
        place_all(&mut board, &[(7, 8)], Stone::White);
        let snapshot = board.clone();

        let mut searcher = Searcher::new(10);
        let result = searcher.search(&mut board, Stone::White, 3);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_deterministic() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (6, 8)], Stone::Black);
        place_all(&mut board, &[(8, 8)], Stone::White);

        let mut searcher = Searcher::new(10);
        let first = searcher.search(&mut board, Stone::White, 2);
        let second = searcher.search(&mut board, Stone::White, 2);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_quicker_win_preferred() {
        // Both an immediate five and slower wins exist; the five scores highest
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6), (7, 7)], Stone::White);
        place_all(&mut board, &[(0, 0), (0, 2)], Stone::Black);

        let mut searcher = Searcher::new(12);
        let result = searcher.search(&mut board, Stone::White, 3);
        assert_eq!(result.score, WIN_SCORE);
        let mv = result.best_move.unwrap();
        assert!(mv == Pos::new(7, 3) || mv == Pos::new(7, 8));
    }
}
