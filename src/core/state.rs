//! Game state: cells, board, and the game aggregate.
//!
//! ## Board
//!
//! A sparse, coordinate-indexed collection of cells. Hex boards are
//! irregular per row, so cells live in an `im::OrdMap` keyed by `Coord`
//! rather than in nested arrays. The map is persistent: cloning a game is
//! O(1) and replacing one cell shares the rest of the structure.
//!
//! ## Game
//!
//! The root entity. Topology is fixed at creation; afterwards only cell
//! occupiers, resources, and turn flags change, and only through the
//! rules engine.
//!
//! ## Persisted shape
//!
//! `Game` serializes with camelCase field names. The board serializes as
//! a list of `{coord, worth, occupier}` entries. Deserializing a `Game`
//! from any format runs `check_invariants`.

use im::OrdMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{InvariantViolation, SnapshotError};
use super::player::{Actor, ActorMap, Player};
use crate::geometry::{BoardShape, Coord, Topology};

/// Who owns a cell and whether the claim was made by the mediator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupier {
    pub actor: Actor,
    pub mediated: bool,
}

impl Occupier {
    /// An occupier claimed directly by `actor`.
    #[must_use]
    pub const fn direct(actor: Actor) -> Self {
        Self {
            actor,
            mediated: false,
        }
    }
}

/// A single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Value this cell yields to whichever actor ends the game owning it.
    pub worth: ActorMap<i64>,

    /// Current owner, if any.
    pub occupier: Option<Occupier>,
}

impl Cell {
    /// An unoccupied cell with the given worth.
    #[must_use]
    pub const fn new(worth: ActorMap<i64>) -> Self {
        Self {
            worth,
            occupier: None,
        }
    }

    /// Whether anyone owns this cell.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupier.is_some()
    }

    /// Whether `actor` owns this cell.
    #[must_use]
    pub fn is_owned_by(&self, actor: Actor) -> bool {
        self.occupier.is_some_and(|o| o.actor == actor)
    }
}

/// Serialized form of one board entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellEntry {
    pub coord: Coord,
    pub worth: ActorMap<i64>,
    pub occupier: Option<Occupier>,
}

/// Coordinate-indexed collection of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<CellEntry>", try_from = "Vec<CellEntry>")]
pub struct Board {
    cells: OrdMap<Coord, Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from `(coord, cell)` pairs.
    ///
    /// Fails if a coordinate appears twice.
    pub fn from_cells(
        cells: impl IntoIterator<Item = (Coord, Cell)>,
    ) -> Result<Self, InvariantViolation> {
        let mut map = OrdMap::new();
        for (coord, cell) in cells {
            if map.insert(coord, cell).is_some() {
                return Err(InvariantViolation::DuplicateCell(coord));
            }
        }
        Ok(Self { cells: map })
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Whether `coord` is part of the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Iterate over `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells.iter().map(|(c, cell)| (*c, cell))
    }

    /// Iterate over coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.keys().copied()
    }

    /// A new board with the occupier at `coord` replaced.
    ///
    /// Returns `None` if `coord` is not on the board.
    #[must_use]
    pub fn with_occupier(&self, coord: Coord, occupier: Option<Occupier>) -> Option<Self> {
        let cell = self.cells.get(&coord)?;
        let updated = Cell { occupier, ..*cell };
        Some(Self {
            cells: self.cells.update(coord, updated),
        })
    }
}

impl From<Board> for Vec<CellEntry> {
    fn from(board: Board) -> Self {
        board
            .iter()
            .map(|(coord, cell)| CellEntry {
                coord,
                worth: cell.worth,
                occupier: cell.occupier,
            })
            .collect()
    }
}

impl TryFrom<Vec<CellEntry>> for Board {
    type Error = InvariantViolation;

    fn try_from(entries: Vec<CellEntry>) -> Result<Self, Self::Error> {
        Board::from_cells(entries.into_iter().map(|e| {
            (
                e.coord,
                Cell {
                    worth: e.worth,
                    occupier: e.occupier,
                },
            )
        }))
    }
}

/// The game aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GameRecord")]
pub struct Game {
    /// Board cells. Topology is fixed after creation.
    pub cells: Board,

    /// Budget each actor has left for claims.
    pub remaining_resources: ActorMap<u32>,

    /// Whose turn it is, independent of who physically acts.
    pub current_actor: Actor,

    /// The mediator may make the next action on `current_actor`'s behalf.
    pub current_actor_delegated: bool,

    /// The immediately preceding action was a pass.
    pub last_actor_passed: bool,

    /// Two passes happened back to back.
    pub is_over: bool,

    /// Multipliers for the mediator's view of the scores only.
    #[serde(default)]
    pub mediator_score_weights: Option<ActorMap<i64>>,
}

/// Unchecked persisted form of a `Game`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameRecord {
    cells: Board,
    remaining_resources: ActorMap<u32>,
    current_actor: Actor,
    current_actor_delegated: bool,
    last_actor_passed: bool,
    is_over: bool,
    #[serde(default)]
    mediator_score_weights: Option<ActorMap<i64>>,
}

impl TryFrom<GameRecord> for Game {
    type Error = InvariantViolation;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Self {
            cells: record.cells,
            remaining_resources: record.remaining_resources,
            current_actor: record.current_actor,
            current_actor_delegated: record.current_actor_delegated,
            last_actor_passed: record.last_actor_passed,
            is_over: record.is_over,
            mediator_score_weights: record.mediator_score_weights,
        };
        game.check_invariants()?;
        Ok(game)
    }
}

impl Game {
    /// A fresh game: red to move, all flags cleared, no mediator bias.
    #[must_use]
    pub fn new(cells: Board, remaining_resources: ActorMap<u32>) -> Self {
        Self {
            cells,
            remaining_resources,
            current_actor: Actor::Red,
            current_actor_delegated: false,
            last_actor_passed: false,
            is_over: false,
            mediator_score_weights: None,
        }
    }

    /// Set the mediator's score weights.
    #[must_use]
    pub fn with_mediator_weights(mut self, weights: ActorMap<i64>) -> Self {
        self.mediator_score_weights = Some(weights);
        self
    }

    /// Get the cell at `coord`.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord)
    }

    /// Who must submit the next action: the mediator when delegated,
    /// otherwise the current actor.
    #[must_use]
    pub fn whose_move(&self) -> Player {
        if self.current_actor_delegated {
            Player::Mediator
        } else {
            self.current_actor.into()
        }
    }

    /// Neighbors of `coord` under `topology` that are on this board.
    #[must_use]
    pub fn adjacent(&self, coord: Coord, topology: Topology) -> SmallVec<[Coord; 6]> {
        topology
            .neighbors(coord)
            .into_iter()
            .filter(|c| self.cells.contains(*c))
            .collect()
    }

    /// Coordinates owned by `actor`, in row-major order.
    #[must_use]
    pub fn occupied_by(&self, actor: Actor) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_owned_by(actor))
            .map(|(coord, _)| coord)
            .collect()
    }

    // === Validation ===

    /// Check the invariants a snapshot must satisfy.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.cells.len() < 2 {
            return Err(InvariantViolation::BoardTooSmall(self.cells.len()));
        }
        if self.is_over && !self.last_actor_passed {
            return Err(InvariantViolation::OverWithoutPass);
        }
        if self.is_over && self.current_actor_delegated {
            return Err(InvariantViolation::OverWhileDelegated);
        }
        if let Some(weights) = self.mediator_score_weights {
            for (actor, &w) in weights.iter() {
                if w <= 0 {
                    return Err(InvariantViolation::NonPositiveWeight(actor));
                }
            }
        }
        Ok(())
    }

    /// Check that the board holds exactly the coordinates of `shape`.
    pub fn check_topology(&self, shape: &BoardShape) -> Result<(), InvariantViolation> {
        let expected: FxHashSet<Coord> = shape.coords().into_iter().collect();
        if let Some(extra) = self.cells.coords().find(|c| !expected.contains(c)) {
            return Err(InvariantViolation::UnexpectedCell(extra));
        }
        if let Some(missing) = shape.coords().into_iter().find(|c| !self.cells.contains(*c)) {
            return Err(InvariantViolation::MissingCell(missing));
        }
        Ok(())
    }

    // === Snapshots ===

    /// Encode a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Size in bytes of the encoded snapshot.
    pub fn snapshot_size(&self) -> Result<u64, SnapshotError> {
        Ok(bincode::serialized_size(self)?)
    }

    /// Decode a binary snapshot and check its invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let record: GameRecord = bincode::deserialize(bytes)?;
        Ok(Game::try_from(record)?)
    }
}
