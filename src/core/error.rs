//! Error types.
//!
//! Every rejection leaves the prior snapshot untouched: transitions are
//! all-or-nothing, so an `Err` never carries a partially updated game.

use thiserror::Error;

use super::player::{Actor, Player};
use crate::geometry::Coord;

/// Rejection from the pure transition function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("{actor} has {available} resources left but the claim costs {cost}")]
    InsufficientResources { actor: Actor, cost: u32, available: u32 },
    #[error("no cell at {0}")]
    InvalidCoordinate(Coord),
}

/// Rejection from the guarded submission path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game already over")]
    GameAlreadyOver,
    #[error("not your turn: expected {expected}, got {submitted}")]
    NotYourTurn { expected: Player, submitted: Player },
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Failure while folding an action log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("action {index} rejected: {source}")]
pub struct ReplayError {
    /// Position of the rejected action in the log.
    pub index: usize,
    pub source: MoveError,
}

/// A snapshot that breaks a state invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("game is over but the last action was not a pass")]
    OverWithoutPass,
    #[error("game is over but the turn is still delegated")]
    OverWhileDelegated,
    #[error("mediator score weight for {0} must be positive")]
    NonPositiveWeight(Actor),
    #[error("board has {0} cells, at least 2 required")]
    BoardTooSmall(usize),
    #[error("cell {0} is missing from the board")]
    MissingCell(Coord),
    #[error("cell {0} is not part of the board shape")]
    UnexpectedCell(Coord),
    #[error("cell {0} appears more than once")]
    DuplicateCell(Coord),
}

/// Failure to encode or decode a game snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Codec(#[from] bincode::Error),
    #[error("decoded snapshot is invalid: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// A distribution rejected before sampling.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DistributionError {
    #[error("board dimensions must be positive")]
    NonPositiveDimensions,
    #[error("board has {0} cells, at least 2 required")]
    TooFewCells(u64),
    #[error("board has {cells} cells, limit is {limit}")]
    TooManyCells { cells: u64, limit: u64 },
    #[error("{what} range is inverted: min {min} > max {max}")]
    InvertedRange { what: &'static str, min: i64, max: i64 },
    #[error("bias probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error("encoded snapshot is {size} bytes, limit is {limit}")]
    SnapshotTooLarge { size: u64, limit: u64 },
    #[error("failed to encode snapshot: {0}")]
    Encoding(String),
}
