//! Reconstructing games from action logs.
//!
//! A game at step `k` is `fold(transition, start, actions[0..k])`. The
//! transition keeps no state between calls, so replaying a prefix of a
//! log always lands on the same snapshot. A "rewind to turn k" view is
//! just `replay(start, &actions[..k])`.

use super::engine::{RulesEngine, TerritoryRules};
use super::guard::submit_with;
use crate::core::{Action, ActionRecord, Game, MoveError, ReplayError};

/// Fold the pure transition over `actions` under `rules`.
pub fn replay_with<R: RulesEngine + ?Sized>(
    rules: &R,
    start: &Game,
    actions: &[Action],
) -> Result<Game, ReplayError> {
    actions
        .iter()
        .enumerate()
        .try_fold(start.clone(), |game, (index, action)| {
            rules.apply(&game, action).map_err(|err| ReplayError {
                index,
                source: MoveError::Rule(err),
            })
        })
}

/// Fold the pure transition over `actions` under the default rules.
pub fn replay(start: &Game, actions: &[Action]) -> Result<Game, ReplayError> {
    replay_with(&TerritoryRules::default(), start, actions)
}

/// Fold the guarded `submit` over a log of `(player, action)` records.
pub fn replay_log_with<R: RulesEngine + ?Sized>(
    rules: &R,
    start: &Game,
    records: &[ActionRecord],
) -> Result<Game, ReplayError> {
    records
        .iter()
        .enumerate()
        .try_fold(start.clone(), |game, (index, record)| {
            submit_with(rules, &game, record.player, &record.action)
                .map_err(|source| ReplayError { index, source })
        })
}

/// Fold the guarded `submit` over `records` under the default rules.
pub fn replay_log(start: &Game, records: &[ActionRecord]) -> Result<Game, ReplayError> {
    replay_log_with(&TerritoryRules::default(), start, records)
}

/// Every snapshot from `start` through the last action, `actions.len() + 1` in all.
pub fn history(start: &Game, actions: &[Action]) -> Result<Vec<Game>, ReplayError> {
    let rules = TerritoryRules::default();
    let mut snapshots = Vec::with_capacity(actions.len() + 1);
    snapshots.push(start.clone());
    for (index, action) in actions.iter().enumerate() {
        let last = &snapshots[snapshots.len() - 1];
        let next = rules.apply(last, action).map_err(|err| ReplayError {
            index,
            source: MoveError::Rule(err),
        })?;
        snapshots.push(next);
    }
    Ok(snapshots)
}
