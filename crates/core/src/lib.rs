//! Hexmap is a hexagonal-grid coordinate library: axial coordinates with the
//! six unit directions, exact conversion to and from a rectangular row/column
//! index space, deterministic ring and spiral enumeration, and a value-keyed
//! [HexMap] container tying it all together. Rendering is out of scope; this
//! crate stops at the point where a grid has been materialized into rows and
//! columns.
//!
//! ```
//! use hexmap::{AxialPoint, HexMap};
//!
//! // Lay a flat run of items out in a spiral around the origin
//! let map: HexMap<u32> = HexMap::from_spiral(AxialPoint::ORIGIN, 1..=7);
//! assert_eq!(map.get(AxialPoint::ORIGIN), Some(&1));
//!
//! // Materialize a dense row/column grid for rendering
//! let rows = map.to_rect();
//! assert_eq!(rows.len(), 3);
//! ```
//!
//! See the [hex] module documentation for a description of the coordinate
//! systems.

pub mod hex;
pub mod rect;
mod util;

pub use crate::{
    hex::{
        ring_len, spiral_len, AxialPoint, AxialPointIndexMap, AxialVector,
        CartesianPoint, Direction, HexMap, Ring, Spiral,
    },
    rect::Rect,
};
