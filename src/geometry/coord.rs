//! Logical cell coordinates and their planar embedding.

use serde::{Deserialize, Serialize};

/// Half of √3, the vertical spacing between hex rows.
const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Logical coordinate of a cell.
///
/// Row/column for rectangular boards, axial `(i, j)` indices for hex boards.
/// Ordered row-major so boards iterate in a stable order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub i: i32,
    pub j: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Offset this coordinate by `(di, dj)`, or `None` if either axis
    /// leaves the `i32` range.
    #[must_use]
    pub const fn offset(self, di: i32, dj: i32) -> Option<Self> {
        match (self.i.checked_add(di), self.j.checked_add(dj)) {
            (Some(i), Some(j)) => Some(Self { i, j }),
            _ => None,
        }
    }

    /// Planar position of a hex cell: `x = -i/2 + j`, `y = i·√3/2`.
    #[must_use]
    pub fn hex_to_planar(self) -> Point {
        Point {
            x: -f64::from(self.i) / 2.0 + f64::from(self.j),
            y: f64::from(self.i) * HALF_SQRT_3,
        }
    }

    /// Planar position of a rectangular cell: column is `x`, row is `y`.
    #[must_use]
    pub fn rect_to_planar(self) -> Point {
        Point {
            x: f64::from(self.j),
            y: f64::from(self.i),
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((i, j): (i32, i32)) -> Self {
        Self::new(i, j)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// A point in the plane, used by presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
