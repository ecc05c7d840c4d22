//! The value-keyed container over the hex plane, plus the type alias naming
//! its backing store. Everything here is generic over the stored value type.

use crate::{
    hex::{AxialPoint, CartesianPoint},
    rect::Rect,
};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// An insertion-ordered map of axial points to some `T`. Fnv is a good
/// hasher for tiny fixed-size keys like points. The ordered map carries some
/// extra memory overhead, but the container's iteration contract depends on
/// the ordering.
pub type AxialPointIndexMap<T> = IndexMap<AxialPoint, T, FnvBuildHasher>;

/// A value-keyed associative container over the hex plane.
///
/// Keys are [AxialPoint]s compared structurally: two separately constructed
/// points with equal components address the same entry. Absent cells are
/// simply not present; there is no stored "empty" marker, so lookups return
/// `Option` and never fail. Iteration follows insertion order, which means a
/// map built by [HexMap::from_spiral] iterates its values in spiral order.
///
/// Bulk construction comes in two forms: [HexMap::from_rect] places a
/// rectangular array of optional values row by row, and
/// [HexMap::from_spiral] zips a flat sequence of values with the spiral
/// enumeration of the plane. [HexMap::to_rect] goes the other way,
/// materializing the minimal bounding rectangle around every stored cell.
///
/// ## Serialization
///
/// Maps serialize their cells as a sequence of `(point, value)` pairs rather
/// than as a keyed object, because composite keys don't survive formats like
/// JSON. Deserializing the sequence rebuilds the same map, insertion order
/// included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexMap<T> {
    // serde can't infer bounds for a generic field behind a `with` module, so
    // spell out the ones the pairs encoding needs
    #[serde(
        with = "crate::util::serde_axial_point_map_to_pairs",
        bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
    )]
    cells: AxialPointIndexMap<T>,
}

impl<T> HexMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of populated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Look up the value at a point. `None` for any cell that was never
    /// inserted.
    pub fn get(&self, pos: AxialPoint) -> Option<&T> {
        self.cells.get(&pos)
    }

    /// Mutable version of [Self::get]
    pub fn get_mut(&mut self, pos: AxialPoint) -> Option<&mut T> {
        self.cells.get_mut(&pos)
    }

    pub fn contains_key(&self, pos: AxialPoint) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Insert a value at a point, returning the value it displaced if the
    /// cell was already populated. Last write wins; overwriting keeps the
    /// cell's original position in the iteration order.
    pub fn insert(&mut self, pos: AxialPoint, value: T) -> Option<T> {
        self.cells.insert(pos, value)
    }

    /// Iterate over `(point, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (AxialPoint, &T)> + '_ {
        self.cells.iter().map(|(pos, value)| (*pos, value))
    }

    /// Iterate over populated points in insertion order
    pub fn keys(&self) -> impl Iterator<Item = AxialPoint> + '_ {
        self.cells.keys().copied()
    }

    /// Iterate over stored values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.values()
    }

    /// The values present at the six cells adjacent to a point, in
    /// [Direction::ALL](crate::Direction::ALL) order. Unpopulated neighbors
    /// are skipped, so this yields between zero and six values.
    pub fn neighbors(&self, pos: AxialPoint) -> impl Iterator<Item = &T> + '_ {
        pos.adjacents()
            .filter_map(move |adjacent| self.cells.get(&adjacent))
    }

    /// The values present on the ring at `radius` around a center, in the
    /// ring's walk order, skipping unpopulated cells
    pub fn ring_values(
        &self,
        center: AxialPoint,
        radius: u32,
    ) -> impl Iterator<Item = &T> + '_ {
        center.ring(radius).filter_map(move |pos| self.cells.get(&pos))
    }

    /// Build a map from a rectangular array of optional values. The cell at
    /// row index `i`, column index `j` of the array lands at the hex
    /// position of cartesian `(origin.col + j, origin.row + i)`. Rows may be
    /// ragged (shorter rows just contribute fewer cells) and `None` cells
    /// contribute nothing.
    pub fn from_rect(origin: CartesianPoint, rows: Rect<T>) -> Self {
        let mut cells = AxialPointIndexMap::default();
        let row_count = rows.len();
        for (row_idx, row) in rows.into_iter().enumerate() {
            for (col_idx, value) in row.into_iter().enumerate() {
                if let Some(value) = value {
                    let cartesian = CartesianPoint::new(
                        origin.col + col_idx as i32,
                        origin.row + row_idx as i32,
                    );
                    cells.insert(AxialPoint::from_cartesian(cartesian), value);
                }
            }
        }
        debug!(
            "Built hex map of {} cells from a {}-row rect at {}",
            cells.len(),
            row_count,
            origin
        );
        Self { cells }
    }

    /// Build a map by zipping values with the spiral enumeration of the
    /// plane: the first value lands on `center`, the next six fill ring 1 in
    /// walk order, and so on. This is how a flat sequence of items with no
    /// inherent 2-D structure acquires a deterministic layout.
    pub fn from_spiral(
        center: AxialPoint,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        let map: Self = center.spiral().zip(values).collect();
        debug!(
            "Built hex map of {} cells spiraling out from {}",
            map.len(),
            center
        );
        map
    }

    /// The inclusive `(min, max)` corners of the minimal cartesian rectangle
    /// covering every populated cell, or `None` for an empty map. This is
    /// the rectangle [Self::to_rect] materializes. Renderers can use
    /// `min.row`'s parity to decide which output rows to indent, since
    /// materialized row 0 corresponds to logical row `min.row`.
    pub fn cartesian_bounds(&self) -> Option<(CartesianPoint, CartesianPoint)> {
        let mut keys = self.cells.keys();
        let first = keys.next()?.to_cartesian();
        let (mut min, mut max) = (first, first);
        for pos in keys {
            let cartesian = pos.to_cartesian();
            min.col = min.col.min(cartesian.col);
            min.row = min.row.min(cartesian.row);
            max.col = max.col.max(cartesian.col);
            max.row = max.row.max(cartesian.row);
        }
        Some((min, max))
    }

    /// Materialize this map into a dense rectangular array, cloning the
    /// stored values. Two passes: compute the bounding rectangle over every
    /// populated cell, then fill it, emitting `None` for unpopulated cells.
    /// The output is normalized so its row 0 / column 0 sit at the bounding
    /// rectangle's top-left corner, wherever the cells were on the plane. An
    /// empty map produces an empty (zero-row) array.
    pub fn to_rect(&self) -> Rect<T>
    where
        T: Clone,
    {
        let (min, max) = match self.cartesian_bounds() {
            Some(bounds) => bounds,
            None => return Vec::new(),
        };
        let mut rows = Vec::with_capacity((max.row - min.row + 1) as usize);
        for row in min.row..=max.row {
            let mut cells =
                Vec::with_capacity((max.col - min.col + 1) as usize);
            for col in min.col..=max.col {
                let pos =
                    AxialPoint::from_cartesian(CartesianPoint::new(col, row));
                cells.push(self.get(pos).cloned());
            }
            rows.push(cells);
        }
        rows
    }

    /// Consuming version of [Self::to_rect]: moves the stored values into
    /// the materialized array instead of cloning them
    pub fn into_rect(mut self) -> Rect<T> {
        let (min, max) = match self.cartesian_bounds() {
            Some(bounds) => bounds,
            None => return Vec::new(),
        };
        let mut rows = Vec::with_capacity((max.row - min.row + 1) as usize);
        for row in min.row..=max.row {
            let mut cells =
                Vec::with_capacity((max.col - min.col + 1) as usize);
            for col in min.col..=max.col {
                let pos =
                    AxialPoint::from_cartesian(CartesianPoint::new(col, row));
                // Iteration order of what's left doesn't matter, so the
                // cheaper removal is fine
                cells.push(self.cells.swap_remove(&pos));
            }
            rows.push(cells);
        }
        rows
    }
}

impl<T> Default for HexMap<T> {
    fn default() -> Self {
        Self {
            cells: AxialPointIndexMap::default(),
        }
    }
}

impl<T> FromIterator<(AxialPoint, T)> for HexMap<T> {
    fn from_iter<I: IntoIterator<Item = (AxialPoint, T)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
