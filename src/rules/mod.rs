//! Game rules for renju
//!
//! This module implements the rule set:
//! - Win conditions (five or more in a row, draw on a full board)
//! - Forbidden moves for Black (overline, double three, double four)
//! - Line windows used to recognise open threes and fours

pub mod forbidden;
pub mod pattern;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{
    count_open_fours, count_open_threes, forbidden_kind, is_forbidden, is_legal, is_overline,
    ForbiddenKind,
};
pub use pattern::{Cell, LineWindow, OPEN_FOUR, OPEN_THREE};
pub use win::{
    check_win, find_winning_move, has_five_at, verdict, winning_line, winning_moves, Verdict,
};
