//! Claim cost configuration.

use serde::{Deserialize, Serialize};

/// Prices for claiming cells.
///
/// Only the presence of an occupier matters for pricing, never its
/// identity: re-claiming your own cell costs the same as taking one from
/// the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    /// Cost of claiming an unoccupied cell (default: 1).
    pub claim_cost: u32,

    /// Cost of claiming a cell that already has an occupier (default: 3).
    pub reclaim_cost: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            claim_cost: 1,
            reclaim_cost: 3,
        }
    }
}

impl RulesConfig {
    /// Set the cost of claiming an unoccupied cell.
    #[must_use]
    pub fn with_claim_cost(mut self, cost: u32) -> Self {
        self.claim_cost = cost;
        self
    }

    /// Set the cost of claiming an occupied cell.
    #[must_use]
    pub fn with_reclaim_cost(mut self, cost: u32) -> Self {
        self.reclaim_cost = cost;
        self
    }

    /// Price of a claim given whether the target is occupied.
    #[must_use]
    pub fn cost(&self, occupied: bool) -> u32 {
        if occupied {
            self.reclaim_cost
        } else {
            self.claim_cost
        }
    }
}
