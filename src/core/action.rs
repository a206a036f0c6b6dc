//! Actions a player may submit.
//!
//! A closed sum type with one variant per action and only the fields each
//! needs. The rules engine matches over it exhaustively.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::geometry::Coord;

/// A single game action.
///
/// ## Example
///
/// ```
/// use hexclaim::core::Action;
/// use hexclaim::geometry::Coord;
///
/// let claim = Action::claim(Coord::new(1, 2));
/// assert_eq!(claim.target(), Some(Coord::new(1, 2)));
/// assert_eq!(Action::Pass.target(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Take ownership of a cell.
    Claim { coord: Coord },
    /// Clear a cell's occupier.
    Release { coord: Coord },
    /// End the turn without acting.
    Pass,
    /// Authorize the mediator to make the next action.
    DelegateToMediator,
}

impl Action {
    /// Claim the cell at `coord`.
    #[must_use]
    pub const fn claim(coord: Coord) -> Self {
        Action::Claim { coord }
    }

    /// Release the cell at `coord`.
    #[must_use]
    pub const fn release(coord: Coord) -> Self {
        Action::Release { coord }
    }

    /// The cell this action targets, if any.
    #[must_use]
    pub const fn target(&self) -> Option<Coord> {
        match self {
            Action::Claim { coord } | Action::Release { coord } => Some(*coord),
            Action::Pass | Action::DelegateToMediator => None,
        }
    }

    /// Whether this action hands the turn to the other actor on success.
    #[must_use]
    pub const fn ends_turn(&self) -> bool {
        matches!(self, Action::Claim { .. } | Action::Pass)
    }
}

/// A submitted action together with who submitted it.
///
/// Used for action logs: replaying a log through the guarded path
/// reconstructs the game at any point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who submitted the action.
    pub player: Player,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: Action) -> Self {
        Self { player, action }
    }
}
