//! Move selection: an ordered chain of strategies
//!
//! Each strategy tries to produce a move and the first one that succeeds
//! decides. The default chain is:
//!
//! 1. **Opening**: empty board, play the centre
//! 2. **Win now**: a legal cell that completes five
//! 3. **Block now**: the opponent's five cell, if we may play it
//! 4. **Forced win**: threat-space search for our own winning sequence
//! 5. **Forced-win defense**: pre-empt the opponent's winning sequence
//! 6. **Deep search**: alpha-beta over the candidate list
//!
//! If even the deep search has nothing to play the game is a draw.
//!
//! # Example
//!
//! ```
//! use renju::board::{Board, Pos, Stone};
//! use renju::config::SearchConfig;
//! use renju::engine::{AIEngine, Decision, SearchType};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//!
//! match engine.choose_move(&mut board, Stone::Black, SearchConfig::STANDARD) {
//!     Decision::Move(result) => {
//!         assert_eq!(result.best_move, Pos::new(7, 7));
//!         assert_eq!(result.search_type, SearchType::Opening);
//!     }
//!     Decision::Draw => unreachable!(),
//! }
//! ```

use std::fmt;
use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::config::SearchConfig;
use crate::rules::{find_winning_move, is_legal};
use crate::search::{Searcher, ThreatSearcher, WIN_SCORE};

/// Which strategy produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    /// Centre of an empty board
    Opening,
    /// Completes five
    ImmediateWin,
    /// Occupies the opponent's five cell
    Block,
    /// First move of a forced winning sequence
    ForcedWin,
    /// First move of the opponent's forced win, taken pre-emptively
    ForcedWinDefense,
    /// Regular alpha-beta search result
    AlphaBeta,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchType::Opening => "opening",
            SearchType::ImmediateWin => "win now",
            SearchType::Block => "block now",
            SearchType::ForcedWin => "forced win",
            SearchType::ForcedWinDefense => "forced-win defense",
            SearchType::AlphaBeta => "deep search",
        };
        f.write_str(name)
    }
}

/// Result of a move search with statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Score reported by the deciding strategy, from the mover's side
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes searched over all strategies tried
    pub nodes: u64,
}

/// Outcome of asking the engine for a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Move(MoveResult),
    /// No candidate move is left
    Draw,
}

impl Decision {
    #[inline]
    pub fn best_move(&self) -> Option<Pos> {
        match self {
            Decision::Move(result) => Some(result.best_move),
            Decision::Draw => None,
        }
    }
}

/// A move offered by one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub pos: Pos,
    pub score: i32,
}

/// State shared by the strategies during one decision
pub struct SearchContext<'a> {
    pub board: &'a mut Board,
    pub me: Stone,
    pub config: SearchConfig,
    /// Running node count, added to by every strategy that searches
    pub nodes: u64,
}

impl SearchContext<'_> {
    #[inline]
    pub fn opponent(&self) -> Stone {
        self.me.opponent()
    }
}

/// One tier of the move selection policy.
///
/// A strategy may mutate the board while it works but must leave it exactly
/// as it found it.
pub trait MoveStrategy {
    fn kind(&self) -> SearchType;
    fn propose(&mut self, ctx: &mut SearchContext<'_>) -> Option<Proposal>;
}

pub struct Opening;

impl MoveStrategy for Opening {
    fn kind(&self) -> SearchType {
        SearchType::Opening
    }

    fn propose(&mut self, ctx: &mut SearchContext<'_>) -> Option<Proposal> {
        ctx.board.is_board_empty().then(|| Proposal {
            pos: ctx.board.center(),
            score: 0,
        })
    }
}

pub struct WinNow;

impl MoveStrategy for WinNow {
    fn kind(&self) -> SearchType {
        SearchType::ImmediateWin
    }

    fn propose(&mut self, ctx: &mut SearchContext<'_>) -> Option<Proposal> {
        find_winning_move(ctx.board, ctx.me).map(|pos| Proposal {
            pos,
            score: WIN_SCORE,
        })
    }
}

pub struct BlockNow;

impl MoveStrategy for BlockNow {
    fn kind(&self) -> SearchType {
        SearchType::Block
    }

    fn propose(&mut self, ctx: &mut SearchContext<'_>) -> Option<Proposal> {
        find_winning_move(ctx.board, ctx.opponent())
            .filter(|&pos| is_legal(ctx.board, pos, ctx.me))
            .map(|pos| Proposal { pos, score: 0 })
    }
}

pub struct ForcedWin;

impl MoveStrategy for ForcedWin {
    fn kind(&self) -> SearchType {
        SearchType::ForcedWin
    }

    fn propose(&mut self, ctx: &mut SearchContext<'_>) -> Option<Proposal> {
        let mut searcher = ThreatSearcher::new(ctx.config.breadth);
        let found = searcher.forced_win(ctx.board, ctx.me, ctx.config.threat_budget);
        ctx.nodes += searcher.nodes();
        found.map(|pos| Proposal {
            pos,
            score: WIN_SCORE - 1,
        })
    }
}

pub struct ForcedWinDefense;

impl MoveStrategy for ForcedWinDefense {
    fn kind(&self) -> SearchType {
        SearchType::ForcedWinDefense
    }

    fn propose(&mut self, ctx: &mut SearchContext<'_>) -> Option<Proposal> {
        let opponent = ctx.opponent();
        let mut searcher = ThreatSearcher::new(ctx.config.breadth);
        let found = searcher.forced_win(ctx.board, opponent, ctx.config.threat_budget);
        ctx.nodes += searcher.nodes();
        found
            .filter(|&pos| is_legal(ctx.board, pos, ctx.me))
            .map(|pos| Proposal { pos, score: 0 })
    }
}

pub struct DeepSearch;

impl MoveStrategy for DeepSearch {
    fn kind(&self) -> SearchType {
        SearchType::AlphaBeta
    }

    fn propose(&mut self, ctx: &mut SearchContext<'_>) -> Option<Proposal> {
        let mut searcher = Searcher::new(ctx.config.breadth);
        let result = searcher.search(ctx.board, ctx.me, ctx.config.depth);
        ctx.nodes += result.nodes;
        result.best_move.map(|pos| Proposal {
            pos,
            score: result.score,
        })
    }
}

/// Main AI engine: runs the strategy chain for each decision.
///
/// The engine holds no position state between calls; the same board and
/// configuration always yield the same decision.
pub struct AIEngine {
    strategies: Vec<Box<dyn MoveStrategy>>,
}

impl AIEngine {
    /// Engine with the default strategy chain
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(Opening),
            Box::new(WinNow),
            Box::new(BlockNow),
            Box::new(ForcedWin),
            Box::new(ForcedWinDefense),
            Box::new(DeepSearch),
        ])
    }

    /// Engine with a custom chain, tried in order
    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn MoveStrategy>>) -> Self {
        Self { strategies }
    }

    /// Tiers in the order they are tried
    pub fn tiers(&self) -> Vec<SearchType> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Pick a move for `me`.
    ///
    /// The board is borrowed mutably for apply/undo during the search and is
    /// bit-identical on return. A zero breadth is raised to one so an open
    /// board is never reported as a draw.
    pub fn choose_move(&mut self, board: &mut Board, me: Stone, config: SearchConfig) -> Decision {
        let start = Instant::now();
        let before = board.hash();
        let mut ctx = SearchContext {
            board,
            me,
            config: SearchConfig {
                breadth: config.breadth.max(1),
                ..config
            },
            nodes: 0,
        };

        let mut decision = Decision::Draw;
        for strategy in self.strategies.iter_mut() {
            let kind = strategy.kind();
            let proposal = strategy.propose(&mut ctx);
            debug!("{me} {kind}: {proposal:?}");
            if let Some(Proposal { pos, score }) = proposal {
                decision = Decision::Move(MoveResult {
                    best_move: pos,
                    score,
                    search_type: kind,
                    time_ms: start.elapsed().as_millis() as u64,
                    nodes: ctx.nodes,
                });
                break;
            }
        }

        debug_assert_eq!(ctx.board.hash(), before, "search left the board modified");
        match &decision {
            Decision::Move(result) => info!(
                "{me} plays {} by {} (score {}, {} nodes, {}ms)",
                result.best_move, result.search_type, result.score, result.nodes, result.time_ms
            ),
            Decision::Draw => info!("{me} has no legal move left: draw"),
        }
        decision
    }

    /// Get the best move for the given position, or `None` on a draw
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, me: Stone, config: SearchConfig) -> Option<Pos> {
        self.choose_move(board, me, config).best_move()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
