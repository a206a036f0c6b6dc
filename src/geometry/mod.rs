//! Board geometry: coordinates, planar embedding, and adjacency.
//!
//! Two topologies are supported:
//! - **Rectangular**: `(i, j)` with `0 <= i < height`, `0 <= j < width`.
//! - **Hexagonal**: axial coordinates trimmed to a regular hexagon of
//!   side length `s`, giving `3s² - 3s + 1` cells.
//!
//! Everything here is a pure, total function. Neighbor queries do not
//! filter out-of-range coordinates; intersect with the board's cells.

pub mod coord;
pub mod topology;

pub use coord::{Coord, Point};
pub use topology::{
    hex_cell_count, hex_coords, hex_neighbors, rect_coords, rect_neighbors, BoardShape, Topology,
};
