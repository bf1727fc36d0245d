//! Evaluation module for renju positions
//!
//! This module provides pattern scoring for board positions:
//! - Line shapes (twos, threes, fours, fives) with open-end tiers
//! - Defensive weighting of the opponent's shapes

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{shape_score, PatternScore};
