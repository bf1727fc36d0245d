//! Threat-space search for forced wins
//!
//! The attacker only plays forcing moves: fours, which leave the defender a
//! single reply, and live threes, which leave the few cells that stop the
//! open four. A move counts as a
//! forced win when every defender reply still loses within the remaining
//! budget. Mixing both kinds of threat covers VCF and VCT sequences.
//!
//! `None` means "not found within budget", never "no forced win exists".

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::rules::pattern::WINDOW_RADIUS;
use crate::rules::{count_open_threes, find_winning_move, has_five_at, is_legal, winning_moves};

use super::movegen::candidates;

/// Hard cap on attacker nodes per call
const NODE_LIMIT: u64 = 20_000;

/// Forcing strength of an attacker move, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Threat {
    Five,
    Four,
    Three,
}

/// How the defender can answer a threat
enum Defense {
    /// Every cell is a loss: a double four, or blocks the defender may not play
    Unstoppable,
    /// The defender can ignore a three and make a four of its own
    CounterFour,
    /// The defender must play one of these
    Forced(Vec<Pos>),
}

/// Threat searcher for VCF/VCT sequences
pub struct ThreatSearcher {
    /// Maximum attacker moves considered per node
    breadth: usize,
    /// Node counter for statistics
    nodes: u64,
}

impl ThreatSearcher {
    pub fn new(breadth: usize) -> Self {
        Self { breadth, nodes: 0 }
    }

    /// Attacker nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// First move of a forced win for `color`, assuming `color` moves next.
    ///
    /// `budget` bounds the number of attacker moves in the sequence. The
    /// board is mutated during the search and restored before returning.
    pub fn forced_win(&mut self, board: &mut Board, color: Stone, budget: u8) -> Option<Pos> {
        self.nodes = 0;
        let before = board.hash();
        let found = self.attack(board, color, budget);
        debug_assert_eq!(board.hash(), before, "threat search left the board modified");
        log::trace!("threat search for {color}: {found:?} after {} nodes", self.nodes);
        found
    }

    /// OR node: some attacker move must win
    fn attack(&mut self, board: &mut Board, color: Stone, budget: u8) -> Option<Pos> {
        if budget == 0 || self.nodes >= NODE_LIMIT {
            return None;
        }
        self.nodes += 1;

        for (pos, threat) in self.threat_moves(board, color, budget) {
            if threat == Threat::Five {
                return Some(pos);
            }
            board.apply(pos, color);
            let wins = self.defense_fails(board, pos, color, budget);
            board.undo();
            if wins {
                return Some(pos);
            }
        }
        None
    }

    /// AND node: every defender reply to the threat at `pos` must lose
    fn defense_fails(&mut self, board: &mut Board, pos: Pos, color: Stone, budget: u8) -> bool {
        let defender = color.opponent();
        if find_winning_move(board, defender).is_some() {
            return false;
        }

        let replies = match defenses(board, pos, color) {
            Defense::Unstoppable => return true,
            Defense::CounterFour => return false,
            Defense::Forced(replies) => replies,
        };

        for reply in replies {
            board.apply(reply, defender);
            let still_wins = self.attack(board, color, budget - 1).is_some();
            board.undo();
            if !still_wins {
                return false;
            }
        }
        true
    }

    /// Forcing moves for `color`, fives first, then fours, then threes.
    ///
    /// A three needs a four after it, so threes are only tried while at
    /// least two attacker moves remain.
    fn threat_moves(&self, board: &mut Board, color: Stone, budget: u8) -> Vec<(Pos, Threat)> {
        let allow_three = budget >= 2;
        let mut threats: Vec<(Pos, Threat)> = candidates(board, color, usize::MAX)
            .into_iter()
            .filter_map(|pos| classify(board, pos, color, allow_three).map(|threat| (pos, threat)))
            .collect();
        threats.sort_by_key(|&(_, threat)| threat);
        threats.truncate(self.breadth);
        threats
    }
}

fn classify(board: &mut Board, pos: Pos, color: Stone, allow_three: bool) -> Option<Threat> {
    if has_five_at(board, pos, color) {
        Some(Threat::Five)
    } else if makes_four(board, pos, color) {
        Some(Threat::Four)
    } else if allow_three && makes_live_three(board, pos, color) {
        Some(Threat::Three)
    } else {
        None
    }
}

/// Would `color` at `pos` leave a legal cell that completes five
pub fn makes_four(board: &mut Board, pos: Pos, color: Stone) -> bool {
    board.apply(pos, color);
    let four = DIRECTIONS
        .iter()
        .any(|&dir| !five_cells(board, pos, dir, color).is_empty());
    board.undo();
    four
}

/// Would `color` at `pos` threaten an open four next move.
///
/// The window signature is only a prefilter: a three hemmed in so that no
/// follow-up gives two completion cells is not a threat.
fn makes_live_three(board: &mut Board, pos: Pos, color: Stone) -> bool {
    if count_open_threes(board, pos, color) == 0 {
        return false;
    }
    board.apply(pos, color);
    let live = !open_four_moves(board, pos, color).is_empty();
    board.undo();
    live
}

/// Legal empty cells on the line through `pos` along `dir` where `color`
/// completes five
fn five_cells(board: &Board, pos: Pos, dir: (i32, i32), color: Stone) -> Vec<Pos> {
    (-WINDOW_RADIUS..=WINDOW_RADIUS)
        .filter_map(|k| board.pos_at_offset(pos, dir, k))
        .filter(|&cell| {
            board.is_empty(cell)
                && has_five_at(board, cell, color)
                && is_legal(board, cell, color)
        })
        .collect()
}

/// Cells near `pos` where `color` would make an open four, each paired with
/// its completion cells
fn open_four_moves(board: &mut Board, pos: Pos, color: Stone) -> Vec<(Pos, Vec<Pos>)> {
    let mut moves = Vec::new();
    for &dir in &DIRECTIONS {
        for k in -WINDOW_RADIUS..=WINDOW_RADIUS {
            let Some(cell) = board.pos_at_offset(pos, dir, k) else {
                continue;
            };
            if !is_legal(board, cell, color) {
                continue;
            }
            board.apply(cell, color);
            let fives = five_cells(board, cell, dir, color);
            board.undo();
            if fives.len() >= 2 {
                moves.push((cell, fives));
            }
        }
    }
    moves
}

/// Replies available to the defender after `color` played the threat at `pos`
fn defenses(board: &mut Board, pos: Pos, color: Stone) -> Defense {
    let defender = color.opponent();
    let fives = winning_moves(board, color);
    match fives.as_slice() {
        [] => {
            if has_four_move(board, defender) {
                return Defense::CounterFour;
            }
            let kills = three_kills(board, pos, color);
            if kills.is_empty() {
                Defense::Unstoppable
            } else {
                Defense::Forced(kills)
            }
        }
        [block] if is_legal(board, *block, defender) => Defense::Forced(vec![*block]),
        _ => Defense::Unstoppable,
    }
}

fn has_four_move(board: &mut Board, color: Stone) -> bool {
    candidates(board, color, usize::MAX)
        .into_iter()
        .any(|pos| makes_four(board, pos, color))
}

/// Legal defender cells after which `color` has no open four through `pos`,
/// in row-major order.
///
/// Only an open-four cell or one of its completion cells can take the open
/// four away. Any other reply lets the attacker make it, and with no four of
/// its own the defender cannot answer that.
fn three_kills(board: &mut Board, pos: Pos, color: Stone) -> Vec<Pos> {
    let defender = color.opponent();
    let mut cells: Vec<Pos> = open_four_moves(board, pos, color)
        .into_iter()
        .flat_map(|(cell, fives)| std::iter::once(cell).chain(fives))
        .collect();
    cells.sort_by_key(|cell| (cell.row, cell.col));
    cells.dedup();

    let mut kills = Vec::new();
    for cell in cells {
        if !is_legal(board, cell, defender) {
            continue;
        }
        board.apply(cell, defender);
        let killed = open_four_moves(board, pos, color).is_empty();
        board.undo();
        if killed {
            kills.push(cell);
        }
    }
    kills
}
