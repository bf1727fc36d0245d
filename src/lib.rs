//! Renju engine: five in a row with forbidden moves for Black
//!
//! Rules:
//! - Board of 15x15 by default (5..=16 supported)
//! - Five or more in a row wins; a full board without one is a draw
//! - Black may not play an overline, a double three or a double four
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and Zobrist hashing
//! - [`rules`]: Win detection and forbidden-move classification
//! - [`eval`]: Static evaluation of line shapes
//! - [`search`]: Candidate generation, threat search and alpha-beta
//! - [`engine`]: Strategy chain that turns a position into a decision
//! - [`game`]: Session state and the `(x, y)` front-end API
//! - [`config`]: Difficulty presets, optionally read from `Renju.toml`
//!
//! # Quick Start
//!
//! ```
//! use renju::{AIEngine, Board, Decision, Pos, SearchConfig, Stone};
//!
//! let mut board = Board::new();
//! board.apply(Pos::new(7, 7), Stone::Black);
//!
//! let mut engine = AIEngine::new();
//! if let Decision::Move(result) = engine.choose_move(&mut board, Stone::White, SearchConfig::STANDARD) {
//!     board.apply(result.best_move, Stone::White);
//!     println!("engine plays {} by {}", result.best_move, result.search_type);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Centre of an empty board
//! 2. Immediate five
//! 3. Block the opponent's five
//! 4. Forced win by threat-space search
//! 5. Pre-empt the opponent's forced win
//! 6. Alpha-beta search

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, DEFAULT_SIZE};
pub use config::{Difficulty, EngineConfig, SearchConfig};
pub use engine::{AIEngine, Decision, MoveResult, SearchType};
pub use error::{ConfigError, GameError};
pub use game::{apply_human_move, check_win, choose_move, is_forbidden, new_game, Game};
pub use rules::{ForbiddenKind, Verdict};
