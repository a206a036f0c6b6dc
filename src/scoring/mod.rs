//! Scoring.
//!
//! Each actor scores the worth-to-them of every cell they own. The
//! mediator's displayed totals additionally apply the game's mediator
//! weights; that view never feeds back into resources, costs, or the
//! game result.
//!
//! Totals saturate at the `i64` bounds rather than overflow, so extreme
//! worth ranges clamp instead of wrapping.

use crate::core::{Actor, ActorMap, Game, Player};

/// Weights used when a game carries no mediator bias.
const NEUTRAL_WEIGHTS: ActorMap<i64> = ActorMap::new(1, 1);

/// Sum of `worth[actor]` over every cell `actor` owns.
///
/// ```
/// use hexclaim::core::GameRng;
/// use hexclaim::distribution::{create, GameDistribution};
/// use hexclaim::scoring::score;
///
/// // Classic board: every cell worth 1, one starting cell each.
/// let game = create(&GameDistribution::classic(), &mut GameRng::new(1));
/// let scores = score(&game);
/// assert_eq!((scores.red, scores.blue), (1, 1));
/// ```
#[must_use]
pub fn score(game: &Game) -> ActorMap<i64> {
    let mut scores = ActorMap::with_value(0i64);
    for (_, cell) in game.cells.iter() {
        if let Some(occupier) = cell.occupier {
            let total = &mut scores[occupier.actor];
            *total = total.saturating_add(cell.worth[occupier.actor]);
        }
    }
    scores
}

/// Scores as the mediator sees them: `score` times the mediator weights.
#[must_use]
pub fn mediator_score(game: &Game) -> ActorMap<i64> {
    let weights = game.mediator_score_weights.unwrap_or(NEUTRAL_WEIGHTS);
    score(game).map(|actor, s| s.saturating_mul(weights[actor]))
}

/// Scores as displayed to `player`.
#[must_use]
pub fn score_for(game: &Game, player: Player) -> ActorMap<i64> {
    match player {
        Player::Red | Player::Blue => score(game),
        Player::Mediator => mediator_score(game),
    }
}

/// The actor with the higher raw score, or `None` on a tie.
#[must_use]
pub fn leader(game: &Game) -> Option<Actor> {
    let scores = score(game);
    match scores.red.cmp(&scores.blue) {
        std::cmp::Ordering::Greater => Some(Actor::Red),
        std::cmp::Ordering::Less => Some(Actor::Blue),
        std::cmp::Ordering::Equal => None,
    }
}
