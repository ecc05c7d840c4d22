//! This module holds the types and data structures of the hexagonal grid:
//! the axial coordinate system, the six unit directions, ring and spiral
//! enumeration, and the value-keyed [HexMap] container.
//!
//! ## Coordinate Systems
//!
//! Two coordinate systems are in play:
//!
//! ### Axial Coordinates
//!
//! Axial coordinates define positions on the hexagonal plane. The system is
//! the [axial coordinate system described by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial),
//! over pointy-topped cells.
//!
//! A TL;DR: each cell is addressed by two integer components `(q, r)`. The
//! `q` axis runs east and the `r` axis runs southeast, so a cell's six
//! neighbors are reached by the unit offsets of [Direction]:
//!
//! ```text
//!     NW      NE
//!       \    /
//!  W --- (q,r) --- E
//!       /    \
//!     SW      SE
//! ```
//!
//! Axial coordinates are a two-component view of [cube
//! coordinates](https://www.redblobgames.com/grids/hexagons/#coordinates-cube):
//! the third cube component `s` always equals `-q - r`, putting every cell
//! on the plane `q + r + s = 0`. Storing only `q` and `r` keeps that
//! constraint true by construction, and [AxialPoint::s] recomputes the
//! derived component whenever cube math wants it (distance, for example, is
//! simplest expressed over cube deltas).
//!
//! ### Cartesian (Row/Column) Coordinates
//!
//! The second system is the rectangular index space that grids are rendered
//! into: `(col, row)` slots, with `row` increasing downward and `col` to the
//! right. Successive hex rows each drift half a cell sideways, so the
//! mapping folds that drift back in:
//!
//! - `row = r`
//! - `col = q + floor(r / 2)`
//!
//! which keeps the left edge of the rendered grid straight. A renderer still
//! shifts every odd `row` by half a cell to reconstruct the lattice; that
//! shift is the renderer's job, this module only fixes which rows are the
//! odd ones. The division is floor division (not truncation), which is what
//! makes the conversion exactly invertible for negative rows; see
//! [AxialPoint::to_cartesian] and [AxialPoint::from_cartesian].
//!
//! The materialized rectangle of a [HexMap] (via [HexMap::to_rect]) lives in
//! this space.

mod data_structure;
mod ring;
mod unit;

pub use self::{data_structure::*, ring::*, unit::*};
