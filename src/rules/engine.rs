//! Rules engine trait and the territory rules.
//!
//! Games implement `RulesEngine` to define:
//! - How an action turns one snapshot into the next
//! - What a claim costs
//! - When the game is over and who won
//!
//! Transitions are pure: they borrow the current snapshot and return a new
//! one, or reject the action and leave nothing changed. This makes them
//! safe to fold over an action log.

use tracing::{debug, trace};

use super::config::RulesConfig;
use crate::core::{Action, Actor, Game, Occupier, RuleError};
use crate::geometry::Coord;
use crate::scoring::leader;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One actor ended with the higher score.
    Winner(Actor),
    /// Both actors ended level.
    Draw,
}

impl GameResult {
    /// Check if an actor won.
    #[must_use]
    pub fn is_winner(&self, actor: Actor) -> bool {
        match self {
            GameResult::Winner(a) => *a == actor,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply`: Must be total over `Action` and all-or-nothing
/// - `apply`: Must not check who submitted the action or whether the game
///   is over; `submit` does that
/// - `is_terminal`: Return `None` while the game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Produce the snapshot that follows `action`, or reject it.
    fn apply(&self, game: &Game, action: &Action) -> Result<Game, RuleError>;

    /// Check if the game is over.
    fn is_terminal(&self, game: &Game) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Price the current actor would pay to claim `coord`.
    fn claim_cost(&self, game: &Game, coord: Coord) -> Result<u32, RuleError> {
        let cell = game.cell(coord).ok_or(RuleError::InvalidCoordinate(coord))?;
        Ok(self.config().cost(cell.is_occupied()))
    }

    /// Enumerate the actions a caller may offer for the next move.
    ///
    /// Empty once the game is over. Releases are only offered for cells
    /// the current actor owns, even though `apply` accepts any release.
    fn legal_actions(&self, game: &Game) -> Vec<Action> {
        if game.is_over {
            return Vec::new();
        }

        let actor = game.current_actor;
        let available = game.remaining_resources[actor];
        let mut actions = vec![Action::Pass];
        if !game.current_actor_delegated {
            actions.push(Action::DelegateToMediator);
        }

        for (coord, cell) in game.cells.iter() {
            if self.config().cost(cell.is_occupied()) <= available {
                actions.push(Action::claim(coord));
            }
            if cell.is_owned_by(actor) {
                actions.push(Action::release(coord));
            }
        }

        actions
    }
}

/// The territory-claiming rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerritoryRules {
    config: RulesConfig,
}

impl TerritoryRules {
    /// Create rules with a custom cost model.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    fn pass(game: &Game) -> Game {
        Game {
            current_actor: game.current_actor.other(),
            current_actor_delegated: false,
            last_actor_passed: true,
            is_over: game.last_actor_passed,
            ..game.clone()
        }
    }

    fn claim(&self, game: &Game, coord: Coord) -> Result<Game, RuleError> {
        let actor = game.current_actor;
        let cost = self.claim_cost(game, coord)?;
        let available = game.remaining_resources[actor];
        let remaining = available
            .checked_sub(cost)
            .ok_or(RuleError::InsufficientResources { actor, cost, available })?;

        let occupier = Occupier {
            actor,
            mediated: game.current_actor_delegated,
        };
        let cells = game
            .cells
            .with_occupier(coord, Some(occupier))
            .ok_or(RuleError::InvalidCoordinate(coord))?;

        let mut next = Game {
            cells,
            current_actor: actor.other(),
            current_actor_delegated: false,
            last_actor_passed: false,
            ..game.clone()
        };
        next.remaining_resources[actor] = remaining;
        Ok(next)
    }

    fn release(game: &Game, coord: Coord) -> Result<Game, RuleError> {
        let cells = game
            .cells
            .with_occupier(coord, None)
            .ok_or(RuleError::InvalidCoordinate(coord))?;

        Ok(Game {
            cells,
            current_actor_delegated: false,
            ..game.clone()
        })
    }

    fn delegate(game: &Game) -> Game {
        Game {
            current_actor_delegated: true,
            ..game.clone()
        }
    }
}

impl RulesEngine for TerritoryRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn apply(&self, game: &Game, action: &Action) -> Result<Game, RuleError> {
        let result = match *action {
            Action::Pass => Ok(Self::pass(game)),
            Action::Claim { coord } => self.claim(game, coord),
            Action::Release { coord } => Self::release(game, coord),
            Action::DelegateToMediator => Ok(Self::delegate(game)),
        };

        match &result {
            Ok(next) => debug!(
                ?action,
                actor = %game.current_actor,
                mediated = game.current_actor_delegated,
                next_actor = %next.current_actor,
                is_over = next.is_over,
                "applied action"
            ),
            Err(err) => trace!(?action, actor = %game.current_actor, %err, "rejected action"),
        }
        result
    }

    fn is_terminal(&self, game: &Game) -> Option<GameResult> {
        if !game.is_over {
            return None;
        }
        Some(leader(game).map_or(GameResult::Draw, GameResult::Winner))
    }
}

/// Apply `action` to `game` under the default territory rules.
///
/// ```
/// use hexclaim::core::{Action, Actor, ActorMap, Board, Cell, Game};
/// use hexclaim::geometry::Coord;
/// use hexclaim::rules::transition;
///
/// let cells = Board::from_cells([
///     (Coord::new(0, 0), Cell::new(ActorMap::new(1, 1))),
///     (Coord::new(0, 1), Cell::new(ActorMap::new(1, 1))),
/// ]).unwrap();
/// let game = Game::new(cells, ActorMap::with_value(20));
///
/// let next = transition(&game, &Action::claim(Coord::new(0, 1))).unwrap();
/// assert_eq!(next.remaining_resources.red, 19);
/// assert_eq!(next.current_actor, Actor::Blue);
/// ```
pub fn transition(game: &Game, action: &Action) -> Result<Game, RuleError> {
    TerritoryRules::default().apply(game, action)
}

/// The result of `game` under the default rules, or `None` while it runs.
#[must_use]
pub fn outcome(game: &Game) -> Option<GameResult> {
    TerritoryRules::default().is_terminal(game)
}
