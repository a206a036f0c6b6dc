//! Caller-side checks around the pure transition.
//!
//! The transition function accepts any action in any state. A game
//! server wants two more checks before applying a move: the game must
//! still be running, and the submitting player must be the one whose
//! move it is. `submit` performs both, then applies the action.

use tracing::trace;

use super::engine::{RulesEngine, TerritoryRules};
use crate::core::{Action, Game, MoveError, Player};

/// Who must submit the next action.
///
/// The mediator when the current actor has delegated, otherwise the
/// current actor.
#[must_use]
pub fn whose_move(game: &Game) -> Player {
    game.whose_move()
}

/// Check turn and termination, then apply `action` under `rules`.
pub fn submit_with<R: RulesEngine + ?Sized>(
    rules: &R,
    game: &Game,
    player: Player,
    action: &Action,
) -> Result<Game, MoveError> {
    if game.is_over {
        trace!(%player, ?action, "move after game over");
        return Err(MoveError::GameAlreadyOver);
    }
    let expected = whose_move(game);
    if player != expected {
        trace!(%player, %expected, ?action, "move out of turn");
        return Err(MoveError::NotYourTurn {
            expected,
            submitted: player,
        });
    }
    Ok(rules.apply(game, action)?)
}

/// Check turn and termination, then apply `action` under the default rules.
pub fn submit(game: &Game, player: Player, action: &Action) -> Result<Game, MoveError> {
    submit_with(&TerritoryRules::default(), game, player, action)
}
