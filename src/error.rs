//! Error types for the renju engine

use thiserror::Error;

use crate::board::Pos;
use crate::rules::ForbiddenKind;

/// Errors reported to the caller of the game API.
///
/// `CellOccupied` and `ForbiddenMove` are recoverable: the caller re-prompts.
/// `OutOfBounds` means the caller passed coordinates it never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Pos),
    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),
    #[error("move at {pos} is forbidden for Black ({kind})")]
    ForbiddenMove { pos: Pos, kind: ForbiddenKind },
    #[error("unsupported board size {0} (expected 5..=16)")]
    UnsupportedSize(usize),
    #[error("the game is already over")]
    GameOver,
}

/// Errors raised while loading engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown difficulty '{0}' (expected 'standard' or 'advanced')")]
    UnknownDifficulty(String),
    #[error("invalid search limits: {0}")]
    InvalidSearch(&'static str),
}
