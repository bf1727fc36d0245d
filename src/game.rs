//! Game session: one board, whose turn it is, and the result so far
//!
//! [`Game`] is what a front end drives. The free functions below offer the
//! same operations on a bare [`Board`] with `(x, y)` coordinates, where `x`
//! is the column and `y` the row.

use crate::board::{Board, Move, Pos, Stone};
use crate::config::{Difficulty, SearchConfig};
use crate::engine::{AIEngine, Decision};
use crate::error::GameError;
use crate::rules::{self, forbidden_kind, verdict, winning_line, Verdict};

pub use crate::rules::check_win;

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Stone,
    verdict: Verdict,
}

impl Game {
    /// New game on a `size`×`size` board, Black to move
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::with_size(size)?,
            turn: Stone::Black,
            verdict: Verdict::Ongoing,
        })
    }

    /// Clear the board and start over at the same size
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Stone::Black;
        self.verdict = Verdict::Ongoing;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.board.last_move()
    }

    /// Play `pos` for the side to move
    pub fn play(&mut self, pos: Pos) -> Result<Verdict, GameError> {
        if self.verdict.is_over() {
            return Err(GameError::GameOver);
        }
        self.verdict = place(&mut self.board, pos, self.turn)?;
        self.turn = self.turn.opponent();
        Ok(self.verdict)
    }

    /// Let the engine play for the side to move.
    ///
    /// A draw decision ends the game without placing a stone.
    pub fn engine_move(
        &mut self,
        engine: &mut AIEngine,
        config: SearchConfig,
    ) -> Result<Decision, GameError> {
        if self.verdict.is_over() {
            return Err(GameError::GameOver);
        }
        let decision = engine.choose_move(&mut self.board, self.turn, config);
        match &decision {
            Decision::Move(result) => {
                self.play(result.best_move)?;
            }
            Decision::Draw => self.verdict = Verdict::Draw,
        }
        Ok(decision)
    }

    /// Take back the last stone. Reopens a finished game.
    pub fn undo_last(&mut self) -> Option<Move> {
        let mv = self.board.undo()?;
        self.turn = mv.stone;
        self.verdict = Verdict::Ongoing;
        Some(mv)
    }

    /// Whether the side to move may not play `pos`. Always false on White's turn.
    pub fn is_forbidden(&self, pos: Pos) -> bool {
        self.turn == Stone::Black
            && self.board.contains(pos)
            && rules::is_forbidden(&self.board, pos)
    }

    /// Cells to mark as forbidden for the side to move, row-major
    pub fn forbidden_cells(&self) -> Vec<Pos> {
        if self.turn != Stone::Black || self.verdict.is_over() {
            return Vec::new();
        }
        self.board
            .empty_cells()
            .filter(|&pos| rules::is_forbidden(&self.board, pos))
            .collect()
    }

    /// Stones of the winning line, once somebody has won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        match self.verdict {
            Verdict::Win(color) => winning_line(&self.board, color),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board: Board::new(),
            turn: Stone::Black,
            verdict: Verdict::Ongoing,
        }
    }
}

/// Validate and apply one move, returning the resulting verdict
fn place(board: &mut Board, pos: Pos, color: Stone) -> Result<Verdict, GameError> {
    if !board.contains(pos) {
        return Err(GameError::OutOfBounds(pos));
    }
    if !board.is_empty(pos) {
        return Err(GameError::CellOccupied(pos));
    }
    if color == Stone::Black {
        if let Some(kind) = forbidden_kind(board, pos) {
            return Err(GameError::ForbiddenMove { pos, kind });
        }
    }
    board.apply(pos, color);
    Ok(verdict(board, color))
}

/// Empty board of the given size
pub fn new_game(size: usize) -> Result<Board, GameError> {
    Board::with_size(size)
}

/// Apply a human move at column `x`, row `y`.
///
/// The board is left untouched when the move is rejected.
pub fn apply_human_move(board: &mut Board, x: u8, y: u8, color: Stone) -> Result<Verdict, GameError> {
    place(board, Pos::from_xy(x, y), color)
}

/// Render-time check for column `x`, row `y`. False on White's turn and
/// outside the board.
pub fn is_forbidden(board: &Board, x: u8, y: u8, to_move: Stone) -> bool {
    let pos = Pos::from_xy(x, y);
    to_move == Stone::Black && board.contains(pos) && rules::is_forbidden(board, pos)
}

/// One engine decision for `me` at the given difficulty
pub fn choose_move(board: &mut Board, me: Stone, opp: Stone, difficulty: Difficulty) -> Decision {
    debug_assert_eq!(opp, me.opponent(), "players must have opposite colors");
    AIEngine::new().choose_move(board, me, SearchConfig::from(difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchType;
    use crate::rules::ForbiddenKind;

    fn play_all(game: &mut Game, moves: &[(u8, u8)]) {
        for &(r, c) in moves {
            game.play(Pos::new(r, c)).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(15).unwrap();
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.verdict(), Verdict::Ongoing);
        assert!(game.board().is_board_empty());
        assert_eq!(game.last_move(), None);
        assert!(matches!(Game::new(20), Err(GameError::UnsupportedSize(20))));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::default();
        game.play(Pos::new(7, 7)).unwrap();
        assert_eq!(game.turn(), Stone::White);
        game.play(Pos::new(7, 8)).unwrap();
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(
            game.last_move(),
            Some(Move { pos: Pos::new(7, 8), stone: Stone::White })
        );
    }

    #[test]
    fn test_occupied_rejected_without_change() {
        let mut game = Game::default();
        game.play(Pos::new(7, 7)).unwrap();
        let before = game.board().clone();
        assert_eq!(
            game.play(Pos::new(7, 7)),
            Err(GameError::CellOccupied(Pos::new(7, 7)))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), Stone::White);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::new(9).unwrap();
        assert_eq!(
            game.play(Pos::new(9, 0)),
            Err(GameError::OutOfBounds(Pos::new(9, 0)))
        );
    }

    #[test]
    fn test_forbidden_move_rejected() {
        let mut game = Game::default();
        // Black builds two open twos crossing at (7,7)
        play_all(
            &mut game,
            &[(7, 6), (0, 0), (7, 8), (0, 2), (6, 7), (0, 4), (8, 7), (0, 6)],
        );
        assert_eq!(game.turn(), Stone::Black);
        assert!(game.is_forbidden(Pos::new(7, 7)));
        assert!(game.forbidden_cells().contains(&Pos::new(7, 7)));
        assert_eq!(
            game.play(Pos::new(7, 7)),
            Err(GameError::ForbiddenMove {
                pos: Pos::new(7, 7),
                kind: ForbiddenKind::DoubleThree,
            })
        );
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn test_forbidden_only_on_blacks_turn() {
        let mut game = Game::default();
        play_all(
            &mut game,
            &[(7, 6), (0, 0), (7, 8), (0, 2), (6, 7), (0, 4), (8, 7)],
        );
        assert_eq!(game.turn(), Stone::White);
        assert!(!game.is_forbidden(Pos::new(7, 7)));
        assert!(game.forbidden_cells().is_empty());
        game.play(Pos::new(7, 7)).unwrap();
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::default();
        play_all(
            &mut game,
            &[(7, 3), (8, 3), (7, 4), (8, 4), (7, 5), (8, 5), (7, 6), (8, 6)],
        );
        assert_eq!(game.play(Pos::new(7, 7)), Ok(Verdict::Win(Stone::Black)));
        assert_eq!(game.verdict(), Verdict::Win(Stone::Black));
        assert_eq!(
            game.winning_line(),
            Some((3..8).map(|c| Pos::new(7, c)).collect())
        );
        assert_eq!(game.play(Pos::new(0, 0)), Err(GameError::GameOver));
    }

    #[test]
    fn test_undo_reopens_game() {
        let mut game = Game::default();
        play_all(
            &mut game,
            &[(7, 3), (8, 3), (7, 4), (8, 4), (7, 5), (8, 5), (7, 6), (8, 6), (7, 7)],
        );
        assert!(game.verdict().is_over());

        let undone = game.undo_last().unwrap();
        assert_eq!(undone.pos, Pos::new(7, 7));
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.verdict(), Verdict::Ongoing);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_undo_empty() {
        let mut game = Game::default();
        assert_eq!(game.undo_last(), None);
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(11).unwrap();
        play_all(&mut game, &[(5, 5), (5, 6)]);
        game.reset();
        assert!(game.board().is_board_empty());
        assert_eq!(game.board().size(), 11);
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn test_engine_move_opening() {
        let mut game = Game::default();
        let mut engine = AIEngine::new();
        let decision = game.engine_move(&mut engine, SearchConfig::STANDARD).unwrap();
        match decision {
            Decision::Move(result) => assert_eq!(result.search_type, SearchType::Opening),
            Decision::Draw => panic!("unexpected draw"),
        }
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(game.turn(), Stone::White);
    }

    #[test]
    fn test_engine_move_after_game_over() {
        let mut game = Game::default();
        play_all(
            &mut game,
            &[(7, 3), (8, 3), (7, 4), (8, 4), (7, 5), (8, 5), (7, 6), (8, 6), (7, 7)],
        );
        let mut engine = AIEngine::new();
        assert_eq!(
            game.engine_move(&mut engine, SearchConfig::STANDARD),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_free_functions() {
        let mut board = new_game(15).unwrap();
        // x is the column, y the row
        assert_eq!(
            apply_human_move(&mut board, 3, 5, Stone::Black),
            Ok(Verdict::Ongoing)
        );
        assert_eq!(board.get(Pos::new(5, 3)), Stone::Black);
        assert_eq!(
            apply_human_move(&mut board, 3, 5, Stone::White),
            Err(GameError::CellOccupied(Pos::new(5, 3)))
        );
        assert!(!check_win(&board, Stone::Black));
        assert!(!is_forbidden(&board, 20, 20, Stone::Black));
    }

    #[test]
    fn test_free_is_forbidden_by_turn() {
        let mut board = new_game(15).unwrap();
        for (x, y) in [(6, 7), (8, 7), (7, 6), (7, 8)] {
            apply_human_move(&mut board, x, y, Stone::Black).unwrap();
        }
        assert!(is_forbidden(&board, 7, 7, Stone::Black));
        assert!(!is_forbidden(&board, 7, 7, Stone::White));
    }

    #[test]
    fn test_free_choose_move() {
        let mut board = new_game(15).unwrap();
        let decision = choose_move(&mut board, Stone::Black, Stone::White, Difficulty::Standard);
        assert_eq!(decision.best_move(), Some(Pos::new(7, 7)));
    }
}
