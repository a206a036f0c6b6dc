//! Coordinate generation and adjacency for supported board shapes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{Coord, Point};

/// Hex axial neighbor offsets.
const HEX_OFFSETS: [(i32, i32); 6] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (-1, -1)];

/// Rectangular (von Neumann) neighbor offsets.
const RECT_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Adjacency relation of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Topology {
    Rectangular,
    Hexagonal,
}

impl Topology {
    /// Neighbor candidates of `coord`, not filtered against any board.
    #[must_use]
    pub fn neighbors(self, coord: Coord) -> SmallVec<[Coord; 6]> {
        match self {
            Topology::Rectangular => rect_neighbors(coord).into_iter().collect(),
            Topology::Hexagonal => hex_neighbors(coord),
        }
    }

    /// Planar embedding of `coord` under this topology.
    #[must_use]
    pub fn to_planar(self, coord: Coord) -> Point {
        match self {
            Topology::Rectangular => coord.rect_to_planar(),
            Topology::Hexagonal => coord.hex_to_planar(),
        }
    }
}

/// A concrete board shape with its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BoardShape {
    /// `height` rows of `width` cells.
    Grid { width: u32, height: u32 },
    /// Regular hexagon with `side_length` cells per side.
    HexGrid {
        #[serde(rename = "sideLength")]
        side_length: u32,
    },
}

impl BoardShape {
    /// The adjacency relation this shape uses.
    #[must_use]
    pub fn topology(&self) -> Topology {
        match self {
            BoardShape::Grid { .. } => Topology::Rectangular,
            BoardShape::HexGrid { .. } => Topology::Hexagonal,
        }
    }

    /// All coordinates of the shape, in row-major order.
    #[must_use]
    pub fn coords(&self) -> Vec<Coord> {
        match *self {
            BoardShape::Grid { width, height } => rect_coords(width, height).collect(),
            BoardShape::HexGrid { side_length } => hex_coords(side_length).collect(),
        }
    }

    /// Number of cells, computed without generating coordinates.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        match *self {
            BoardShape::Grid { width, height } => u64::from(width) * u64::from(height),
            BoardShape::HexGrid { side_length } => hex_cell_count(side_length),
        }
    }

    /// Whether `coord` lies inside the shape.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        match *self {
            BoardShape::Grid { width, height } => {
                coord.i >= 0
                    && coord.j >= 0
                    && i64::from(coord.i) < i64::from(height)
                    && i64::from(coord.j) < i64::from(width)
            }
            BoardShape::HexGrid { side_length } => {
                let s = i64::from(side_length);
                let (i, j) = (i64::from(coord.i), i64::from(coord.j));
                if s == 0 || i < 0 || i > 2 * s - 2 {
                    return false;
                }
                let (lo, hi) = hex_row_range(i, s);
                (lo..=hi).contains(&j)
            }
        }
    }
}

/// Valid `j` range of hex row `i` on a board of side `s`.
fn hex_row_range(i: i64, s: i64) -> (i64, i64) {
    if i < s {
        (0, s - 1 + i)
    } else {
        (i - s + 1, 2 * s - 2)
    }
}

/// Coordinates `(i, j)` for `0 <= i < height`, `0 <= j < width`.
pub fn rect_coords(width: u32, height: u32) -> impl Iterator<Item = Coord> {
    let (w, h) = (to_i32(width), to_i32(height));
    (0..h).flat_map(move |i| (0..w).map(move |j| Coord::new(i, j)))
}

/// Axial coordinates of a regular hexagon with side length `side`.
///
/// Rows run `i` in `[0, 2s-2]`; row `i` spans `j` in `[0, s-1+i]` for
/// `i < s`, else `[i-s+1, 2s-2]`.
pub fn hex_coords(side: u32) -> impl Iterator<Item = Coord> {
    let s = i64::from(side);
    (0..(2 * s - 1).max(0)).flat_map(move |i| {
        let (lo, hi) = hex_row_range(i, s);
        (lo..=hi).map(move |j| Coord::new(narrow(i), narrow(j)))
    })
}

/// Number of cells in a hexagon of side `s`: `3s² - 3s + 1` (0 for `s = 0`).
///
/// Saturates at `u64::MAX` for sides whose count does not fit.
#[must_use]
pub fn hex_cell_count(side: u32) -> u64 {
    if side == 0 {
        return 0;
    }
    let s = u128::from(side);
    u64::try_from(3 * s * s - 3 * s + 1).unwrap_or(u64::MAX)
}

/// The axial neighbors of `coord`: `(i±1, j)`, `(i, j±1)`, `(i+1, j+1)`,
/// `(i-1, j-1)`.
///
/// Neighbors outside the `i32` range are skipped, so cells on the edge of
/// the coordinate space have fewer than six.
#[must_use]
pub fn hex_neighbors(coord: Coord) -> SmallVec<[Coord; 6]> {
    HEX_OFFSETS
        .iter()
        .filter_map(|&(di, dj)| coord.offset(di, dj))
        .collect()
}

/// The orthogonal neighbors of `coord`, skipping any outside the `i32` range.
#[must_use]
pub fn rect_neighbors(coord: Coord) -> SmallVec<[Coord; 4]> {
    RECT_OFFSETS
        .iter()
        .filter_map(|&(di, dj)| coord.offset(di, dj))
        .collect()
}

fn to_i32(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn narrow(n: i64) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
