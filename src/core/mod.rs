//! Core types: actors, players, actions, RNG, game state, errors.
//!
//! Everything the rules engine, sampler, and scoring share lives here.

pub mod player;
pub mod rng;
pub mod action;
pub mod state;
pub mod error;

pub use player::{Actor, ActorMap, Player};
pub use rng::GameRng;
pub use action::{Action, ActionRecord};
pub use state::{Board, Cell, CellEntry, Game, Occupier};
pub use error::{
    DistributionError, InvariantViolation, MoveError, ReplayError, RuleError, SnapshotError,
};
