//! # hexclaim
//!
//! Rules engine for a two-actor territory-claiming board game.
//!
//! Red and blue alternately spend a private resource budget to claim or
//! re-claim cells on a procedurally generated board. Either actor may
//! delegate their turn to a neutral mediator, who then makes exactly one
//! action on their behalf. The game ends after two consecutive passes.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `transition` borrows a snapshot and returns a
//!    new one or a rejection. No hidden state, so action logs fold.
//!
//! 2. **Persistent Snapshots**: boards are `im` maps, so cloning a game
//!    is O(1) and a claim shares every untouched cell.
//!
//! 3. **Injected Randomness**: board generation takes a seedable
//!    `GameRng`; the same seed reproduces the same game.
//!
//! 4. **Guards at the Edge**: turn order and termination are checked by
//!    `submit`, not by the transition itself.
//!
//! ## Modules
//!
//! - `core`: Actors, players, actions, RNG, game state, errors
//! - `geometry`: Rectangular and hex coordinates, planar embedding, adjacency
//! - `distribution`: Declarative game distributions and the sampler
//! - `rules`: `RulesEngine` trait, transition, guarded submit, replay
//! - `scoring`: Actor and mediator score views

pub mod core;
pub mod geometry;
pub mod distribution;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Actor, ActorMap, Board, Cell, Game, GameRng, Occupier, Player,
    DistributionError, InvariantViolation, MoveError, ReplayError, RuleError, SnapshotError,
};

pub use crate::geometry::{BoardShape, Coord, Point, Topology};

pub use crate::distribution::{
    create, create_checked, BoardDistribution, DistributionLimits, GameDistribution, MediatorBias,
    ResourceDistribution,
};

pub use crate::rules::{
    history, outcome, replay, replay_log, submit, transition, whose_move, GameResult, RulesConfig,
    RulesEngine, TerritoryRules,
};

pub use crate::scoring::{leader, mediator_score, score, score_for};
