//! Search module for the renju engine
//!
//! Contains:
//! - Candidate generation with breadth capping
//! - Threat-space search for forced wins (fours and open threes)
//! - Alpha-beta negamax over the candidate lists

pub mod alphabeta;
pub mod movegen;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher, WIN_SCORE};
pub use movegen::{candidates, score_move, scored_candidates, NEIGHBOR_RADIUS};
pub use threat::{makes_four, ThreatSearcher};
