//! Procedural generation of starting games.
//!
//! A `GameDistribution` declares how resources, cell worths, and the
//! mediator's bias are drawn. `create` samples one game from it using an
//! injected `GameRng`; it never rejects. Callers that accept
//! distributions from outside validate them first with
//! `DistributionLimits`, or go through `create_checked`.

pub mod config;
pub mod sampler;

pub use config::{
    BoardDistribution, DistributionLimits, GameDistribution, MediatorBias, ResourceDistribution,
};
pub use sampler::{create, create_checked};
