//! The rules engine: the single authoritative transition function.
//!
//! - `engine`: the `RulesEngine` trait, the `TerritoryRules` implementation,
//!   and the pure `transition` function
//! - `config`: the claim cost model
//! - `guard`: caller-side turn and termination checks (`submit`)
//! - `replay`: folding an action log back into a game
//!
//! The pure transition never checks who submitted an action or whether
//! the game is over. `submit` layers those checks on top for callers that
//! want them.

pub mod config;
pub mod engine;
pub mod guard;
pub mod replay;

pub use config::RulesConfig;
pub use engine::{outcome, transition, GameResult, RulesEngine, TerritoryRules};
pub use guard::{submit, submit_with, whose_move};
pub use replay::{history, replay, replay_log, replay_log_with, replay_with};
