//! Declarative distribution specs and caller-side limits.

use serde::{Deserialize, Serialize};

use crate::core::{DistributionError, Game};
use crate::geometry::BoardShape;

/// How each actor's starting resource pool is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ResourceDistribution {
    /// Both actors start with `value`.
    Exact { value: u32 },
    /// Each actor independently draws from `[min, max]`.
    Uniform { min: u32, max: u32 },
}

/// Board shape plus the i.i.d. uniform worth range for every cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BoardDistribution {
    /// Rectangular `width` x `height` grid.
    IidUniformGrid {
        width: u32,
        height: u32,
        min: i64,
        max: i64,
    },
    /// Regular hexagon of side `side_length`.
    IidUniformHexGrid {
        #[serde(rename = "sideLength")]
        side_length: u32,
        min: i64,
        max: i64,
    },
}

impl BoardDistribution {
    /// The board shape this distribution generates.
    #[must_use]
    pub fn shape(&self) -> BoardShape {
        match *self {
            BoardDistribution::IidUniformGrid { width, height, .. } => {
                BoardShape::Grid { width, height }
            }
            BoardDistribution::IidUniformHexGrid { side_length, .. } => {
                BoardShape::HexGrid { side_length }
            }
        }
    }

    /// Inclusive `(min, max)` range each cell worth is drawn from.
    #[must_use]
    pub fn worth_range(&self) -> (i64, i64) {
        match *self {
            BoardDistribution::IidUniformGrid { min, max, .. }
            | BoardDistribution::IidUniformHexGrid { min, max, .. } => (min, max),
        }
    }
}

/// How the mediator's perceived scoring is biased.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MediatorBias {
    /// One side is doubled: red with probability `p`, otherwise blue.
    ProbSymmetric2x { p: f64 },
}

/// Everything needed to sample a starting game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDistribution {
    pub resources: ResourceDistribution,
    pub board: BoardDistribution,
    #[serde(default)]
    pub mediator_bias: Option<MediatorBias>,
}

impl Default for GameDistribution {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameDistribution {
    /// A distribution without mediator bias.
    #[must_use]
    pub fn new(resources: ResourceDistribution, board: BoardDistribution) -> Self {
        Self {
            resources,
            board,
            mediator_bias: None,
        }
    }

    /// The classic board: 7x7 grid, every cell worth 1 to both actors,
    /// 20 resources each.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(
            ResourceDistribution::Exact { value: 20 },
            BoardDistribution::IidUniformGrid {
                width: 7,
                height: 7,
                min: 1,
                max: 1,
            },
        )
    }

    /// A hex board of side `side_length` with worths in `[min, max]`.
    #[must_use]
    pub fn hex(side_length: u32, min: i64, max: i64, resources: ResourceDistribution) -> Self {
        Self::new(
            resources,
            BoardDistribution::IidUniformHexGrid { side_length, min, max },
        )
    }

    /// Add a mediator bias.
    #[must_use]
    pub fn with_mediator_bias(mut self, bias: MediatorBias) -> Self {
        self.mediator_bias = Some(bias);
        self
    }
}

/// Caller-side limits checked before and after sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionLimits {
    /// Largest accepted board, in cells.
    pub max_cells: u64,

    /// Largest accepted encoded snapshot, in bytes.
    pub max_snapshot_bytes: u64,
}

impl Default for DistributionLimits {
    fn default() -> Self {
        Self {
            max_cells: 2_000,
            max_snapshot_bytes: 1 << 20,
        }
    }
}

impl DistributionLimits {
    /// Set the maximum board size.
    #[must_use]
    pub fn with_max_cells(mut self, max_cells: u64) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Set the maximum snapshot size.
    #[must_use]
    pub fn with_max_snapshot_bytes(mut self, bytes: u64) -> Self {
        self.max_snapshot_bytes = bytes;
        self
    }

    /// Reject distributions the sampler must never see.
    pub fn validate(&self, distribution: &GameDistribution) -> Result<(), DistributionError> {
        if let ResourceDistribution::Uniform { min, max } = distribution.resources {
            if min > max {
                return Err(DistributionError::InvertedRange {
                    what: "resource",
                    min: i64::from(min),
                    max: i64::from(max),
                });
            }
        }

        let board = &distribution.board;
        let has_zero_dimension = match *board {
            BoardDistribution::IidUniformGrid { width, height, .. } => width == 0 || height == 0,
            BoardDistribution::IidUniformHexGrid { side_length, .. } => side_length == 0,
        };
        if has_zero_dimension {
            return Err(DistributionError::NonPositiveDimensions);
        }

        let cells = board.shape().cell_count();
        if cells < 2 {
            return Err(DistributionError::TooFewCells(cells));
        }
        if cells > self.max_cells {
            return Err(DistributionError::TooManyCells {
                cells,
                limit: self.max_cells,
            });
        }

        let (min, max) = board.worth_range();
        if min > max {
            return Err(DistributionError::InvertedRange { what: "worth", min, max });
        }

        if let Some(MediatorBias::ProbSymmetric2x { p }) = distribution.mediator_bias {
            if !(0.0..=1.0).contains(&p) {
                return Err(DistributionError::InvalidProbability(p));
            }
        }

        Ok(())
    }

    /// Reject a generated game whose encoded snapshot is too large to store.
    pub fn check_snapshot(&self, game: &Game) -> Result<(), DistributionError> {
        let size = game
            .snapshot_size()
            .map_err(|e| DistributionError::Encoding(e.to_string()))?;
        if size > self.max_snapshot_bytes {
            return Err(DistributionError::SnapshotTooLarge {
                size,
                limit: self.max_snapshot_bytes,
            });
        }
        Ok(())
    }
}
