//! This sub-module contains the basic unit types of the axial coordinate
//! system. See the parent module documentation for more info on the
//! coordinate systems.

use crate::hex::ring::{Ring, Spiral};
use anyhow::anyhow;
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::{EnumIter, IntoEnumIterator};

/// A point in the axial coordinate system, referring to one whole hex cell.
/// Only `q` and `r` are stored; the third cube component `s` is derived as
/// `-q - r` whenever it's needed, so every possible `(q, r)` pair is a valid
/// point and the cube constraint `q + r + s == 0` can't be violated by
/// construction.
///
/// Points are plain values: all arithmetic returns new points. Equality and
/// hashing are structural over `(q, r)`, which is what lets points be used
/// directly as map keys.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", q, r, "self.s()")]
pub struct AxialPoint {
    q: i32,
    r: i32,
}

impl AxialPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new point from its two stored components. `s` is derived,
    /// so this is total: any pair of integers names a cell.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a point from a full cube triple. Returns an error if the
    /// components don't sum to zero, i.e. the triple doesn't name a cell on
    /// the hex plane. Useful when ingesting cube coordinates from an
    /// external source; within this crate the two-component constructor is
    /// all that's needed.
    pub fn from_cube(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        if q + r + s != 0 {
            Err(anyhow!(
                "invalid cube point ({}, {}, {}); must be on the plane q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::new(q, r))
        }
    }

    /// The `q` component, increasing toward the east
    pub const fn q(self) -> i32 {
        self.q
    }

    /// The `r` component, increasing toward the southeast
    pub const fn r(self) -> i32 {
        self.r
    }

    /// The derived cube component, always `-q - r`. Recomputed on the fly so
    /// it can never drift out of sync with the stored components.
    pub const fn s(self) -> i32 {
        -(self.q + self.r)
    }

    /// This point as a full `(q, r, s)` cube triple. The returned components
    /// always sum to zero.
    pub const fn to_cube(self) -> (i32, i32, i32) {
        (self.q, self.r, self.s())
    }

    /// Calculate the distance between two points, i.e. the number of cell
    /// hops it takes to get from one to the other. 0 when the points are
    /// equal, 1 for adjacent cells, and so on.
    pub fn distance_to(self, other: AxialPoint) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Max of the absolute cube deltas; the s delta is -(dq + dr) since
        // the components always sum to zero
        let delta = self - other;
        delta
            .q
            .unsigned_abs()
            .max(delta.r.unsigned_abs())
            .max((delta.q + delta.r).unsigned_abs())
    }

    /// Get the location of the cell adjacent to this one in the given
    /// direction
    pub fn adjacent(self, direction: Direction) -> AxialPoint {
        self + direction.to_vector()
    }

    /// Get an iterator of the six cells directly adjacent to this one, in
    /// [Direction::ALL] order
    pub fn adjacents(self) -> impl Iterator<Item = AxialPoint> {
        Direction::iter().map(move |direction| self.adjacent(direction))
    }

    /// The adjacent point to the east
    pub fn east(self) -> AxialPoint {
        self.adjacent(Direction::East)
    }

    /// The adjacent point to the northeast
    pub fn north_east(self) -> AxialPoint {
        self.adjacent(Direction::NorthEast)
    }

    /// The adjacent point to the northwest
    pub fn north_west(self) -> AxialPoint {
        self.adjacent(Direction::NorthWest)
    }

    /// The adjacent point to the west
    pub fn west(self) -> AxialPoint {
        self.adjacent(Direction::West)
    }

    /// The adjacent point to the southwest
    pub fn south_west(self) -> AxialPoint {
        self.adjacent(Direction::SouthWest)
    }

    /// The adjacent point to the southeast
    pub fn south_east(self) -> AxialPoint {
        self.adjacent(Direction::SouthEast)
    }

    /// All points at exactly `radius` hops from this one, as an iterator in
    /// the fixed walk order. See [Ring] for the order's definition.
    pub fn ring(self, radius: u32) -> Ring {
        Ring::new(self, radius)
    }

    /// Enumerate the whole plane outward from this point: ring 0 (just this
    /// point), then ring 1, ring 2, and so on, each in walk order. The
    /// iterator is infinite; bound it with [Iterator::take]. See [Spiral].
    pub fn spiral(self) -> Spiral {
        Spiral::new(self)
    }

    /// Project this point into the rectangular row/column space used for
    /// grid-style rendering. Rows map straight from `r`; columns fold the
    /// half-cell drift of successive rows back into a straight edge.
    pub fn to_cartesian(self) -> CartesianPoint {
        // div_euclid is floor division for a positive divisor. Truncating
        // division would shift negative odd rows the wrong way and break the
        // round trip with from_cartesian.
        CartesianPoint::new(self.q + self.r.div_euclid(2), self.r)
    }

    /// Map a rectangular row/column position back onto the hex plane. This
    /// is the exact inverse of [Self::to_cartesian].
    pub fn from_cartesian(point: CartesianPoint) -> AxialPoint {
        AxialPoint::new(point.col - point.row.div_euclid(2), point.row)
    }
}

// point + vector = point
impl ops::Add<AxialVector> for AxialPoint {
    type Output = AxialPoint;

    fn add(self, vector: AxialVector) -> AxialPoint {
        AxialPoint::new(self.q + vector.q, self.r + vector.r)
    }
}

// point - point = vector
impl ops::Sub for AxialPoint {
    type Output = AxialVector;

    fn sub(self, other: AxialPoint) -> AxialVector {
        AxialVector::new(self.q - other.q, self.r - other.r)
    }
}

impl From<AxialPoint> for CartesianPoint {
    fn from(point: AxialPoint) -> Self {
        point.to_cartesian()
    }
}

impl From<CartesianPoint> for AxialPoint {
    fn from(point: CartesianPoint) -> Self {
        AxialPoint::from_cartesian(point)
    }
}

/// A displacement between two points on the hex plane. Unlike points,
/// vectors are unconstrained: any `(q, r)` displacement is meaningful, and
/// summing, negating, or scaling one still names a displacement, so that
/// arithmetic is all derived.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", q, r)]
pub struct AxialVector {
    pub q: i32,
    pub r: i32,
}

impl AxialVector {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

/// A position in the rectangular row/column index space that hex grids are
/// rendered into. `row` increases downward and `col` to the right. A
/// renderer draws each cell at its `(col, row)` slot and shifts odd rows
/// sideways by half a cell to recover the hex lattice; which rows are the
/// odd ones is fixed by the conversion (`row = r`), not by the renderer.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", col, row)]
pub struct CartesianPoint {
    pub col: i32,
    pub row: i32,
}

impl CartesianPoint {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// The six directions in which a cell borders its neighbors. Variants are
/// declared in the fixed rotation order that every ordered walk in this
/// crate follows, starting from east and passing the northern side first;
/// the discriminant of each variant is therefore also its index in
/// [Direction::ALL].
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All six directions in rotation order, starting from east. This is the
    /// order that neighbor queries and ring walks emit in, and it matches
    /// the [EnumIter] iteration order.
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Get a vector offset that would move a point one cell in this
    /// direction
    pub fn to_vector(self) -> AxialVector {
        match self {
            Self::East => AxialVector::new(1, 0),
            Self::NorthEast => AxialVector::new(1, -1),
            Self::NorthWest => AxialVector::new(0, -1),
            Self::West => AxialVector::new(-1, 0),
            Self::SouthWest => AxialVector::new(-1, 1),
            Self::SouthEast => AxialVector::new(0, 1),
        }
    }

    /// Get the direction pointing the opposite way, i.e. half a turn around
    /// the rotation order
    pub fn opposite(self) -> Self {
        // Variants are declared in ALL's order, so the discriminant doubles
        // as the rotation index
        Self::ALL[(self as usize + 3) % 6]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_test::{assert_tokens, Token};
    use std::collections::HashSet;

    #[test]
    fn test_distance_to() {
        let p0 = AxialPoint::ORIGIN;
        let p1 = AxialPoint::new(-1, 1);
        let p2 = AxialPoint::new(2, -1);
        let p3 = AxialPoint::new(2, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p1.distance_to(p1), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p1.distance_to(p0), 1);

        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p2.distance_to(p0), 2);

        assert_eq!(p0.distance_to(p3), 3);
        assert_eq!(p3.distance_to(p0), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p1.distance_to(p3), 4);
        assert_eq!(p2.distance_to(p3), 2);
    }

    #[test]
    fn test_cube_components() {
        assert_eq!(AxialPoint::ORIGIN.to_cube(), (0, 0, 0));
        assert_eq!(AxialPoint::new(2, -3).to_cube(), (2, -3, 1));
        assert_eq!(AxialPoint::new(-4, 1).s(), 3);

        let (q, r, s) = AxialPoint::new(17, -5).to_cube();
        assert_eq!(q + r + s, 0);
    }

    #[test]
    fn test_from_cube() {
        assert_eq!(
            AxialPoint::from_cube(2, -3, 1).unwrap(),
            AxialPoint::new(2, -3)
        );
        assert_eq!(AxialPoint::from_cube(0, 0, 0).unwrap(), AxialPoint::ORIGIN);
        assert!(AxialPoint::from_cube(1, 1, 1).is_err());
    }

    #[test]
    fn test_direction_vectors() {
        assert_eq!(Direction::East.to_vector(), AxialVector::new(1, 0));
        assert_eq!(Direction::NorthEast.to_vector(), AxialVector::new(1, -1));
        assert_eq!(Direction::NorthWest.to_vector(), AxialVector::new(0, -1));
        assert_eq!(Direction::West.to_vector(), AxialVector::new(-1, 0));
        assert_eq!(Direction::SouthWest.to_vector(), AxialVector::new(-1, 1));
        assert_eq!(Direction::SouthEast.to_vector(), AxialVector::new(0, 1));

        // All six offsets are distinct and cancel out around the compass
        let offsets: HashSet<AxialVector> =
            Direction::iter().map(Direction::to_vector).collect();
        assert_eq!(offsets.len(), 6);
        let sum = Direction::iter()
            .map(Direction::to_vector)
            .fold(AxialVector::new(0, 0), |acc, offset| acc + offset);
        assert_eq!(sum, AxialVector::new(0, 0));
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::NorthWest.opposite(), Direction::SouthEast);
        for direction in Direction::iter() {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(
                direction.opposite().to_vector(),
                -direction.to_vector()
            );
        }
    }

    #[test]
    fn test_adjacents() {
        let center = AxialPoint::new(2, 1);
        let expected = vec![
            AxialPoint::new(3, 1), // east
            AxialPoint::new(3, 0), // northeast
            AxialPoint::new(2, 0), // northwest
            AxialPoint::new(1, 1), // west
            AxialPoint::new(1, 2), // southwest
            AxialPoint::new(2, 2), // southeast
        ];
        assert_eq!(center.adjacents().collect::<Vec<_>>(), expected);

        assert_eq!(center.east(), expected[0]);
        assert_eq!(center.north_east(), expected[1]);
        assert_eq!(center.north_west(), expected[2]);
        assert_eq!(center.west(), expected[3]);
        assert_eq!(center.south_west(), expected[4]);
        assert_eq!(center.south_east(), expected[5]);
    }

    #[test]
    fn test_arithmetic() {
        let point = AxialPoint::new(1, 2);
        assert_eq!(point + AxialVector::new(3, 4), AxialPoint::new(4, 6));
        assert_eq!(AxialPoint::new(4, 6) - point, AxialVector::new(3, 4));
        assert_eq!(AxialVector::new(1, -1) * 3, AxialVector::new(3, -3));
    }

    #[test]
    fn test_to_cartesian() {
        assert_eq!(
            AxialPoint::ORIGIN.to_cartesian(),
            CartesianPoint::new(0, 0)
        );
        assert_eq!(
            AxialPoint::new(-1, -2).to_cartesian(),
            CartesianPoint::new(-2, -2)
        );
        assert_eq!(
            AxialPoint::new(0, 2).to_cartesian(),
            CartesianPoint::new(1, 2)
        );
        assert_eq!(
            AxialPoint::new(2, -1).to_cartesian(),
            CartesianPoint::new(1, -1)
        );
        assert_eq!(
            AxialPoint::new(-2, 3).to_cartesian(),
            CartesianPoint::new(-1, 3)
        );
        // Floor division, not truncation: row -1 shifts left
        assert_eq!(
            AxialPoint::new(0, -1).to_cartesian(),
            CartesianPoint::new(-1, -1)
        );
    }

    #[test]
    fn test_from_cartesian() {
        assert_eq!(
            AxialPoint::from_cartesian(CartesianPoint::new(-2, -2)),
            AxialPoint::new(-1, -2)
        );
        assert_eq!(
            AxialPoint::from_cartesian(CartesianPoint::new(1, 2)),
            AxialPoint::new(0, 2)
        );
        assert_eq!(
            AxialPoint::from_cartesian(CartesianPoint::new(1, -1)),
            AxialPoint::new(2, -1)
        );
    }

    #[test]
    fn test_cartesian_round_trip() {
        for q in -50..=50 {
            for r in -50..=50 {
                let point = AxialPoint::new(q, r);
                assert_eq!(
                    AxialPoint::from_cartesian(point.to_cartesian()),
                    point,
                    "axial round trip failed for {point}"
                );
                let cartesian = CartesianPoint::new(q, r);
                assert_eq!(
                    AxialPoint::from_cartesian(cartesian).to_cartesian(),
                    cartesian,
                    "cartesian round trip failed for {cartesian}"
                );
            }
        }
    }

    #[test]
    fn test_serialize() {
        assert_tokens(
            &AxialPoint::new(2, -1),
            &[
                Token::Struct {
                    name: "AxialPoint",
                    len: 2,
                },
                Token::Str("q"),
                Token::I32(2),
                Token::Str("r"),
                Token::I32(-1),
                Token::StructEnd,
            ],
        );
        assert_tokens(
            &AxialVector::new(-3, 2),
            &[
                Token::Struct {
                    name: "AxialVector",
                    len: 2,
                },
                Token::Str("q"),
                Token::I32(-3),
                Token::Str("r"),
                Token::I32(2),
                Token::StructEnd,
            ],
        );
        assert_tokens(
            &CartesianPoint::new(4, -6),
            &[
                Token::Struct {
                    name: "CartesianPoint",
                    len: 2,
                },
                Token::Str("col"),
                Token::I32(4),
                Token::Str("row"),
                Token::I32(-6),
                Token::StructEnd,
            ],
        );
        assert_tokens(
            &Direction::NorthWest,
            &[Token::UnitVariant {
                name: "Direction",
                variant: "north_west",
            }],
        );
    }

    proptest! {
        #[test]
        fn prop_cartesian_round_trip(
            q in -100_000i32..100_000,
            r in -100_000i32..100_000,
        ) {
            let point = AxialPoint::new(q, r);
            prop_assert_eq!(
                AxialPoint::from_cartesian(point.to_cartesian()),
                point
            );
        }

        #[test]
        fn prop_cube_sum_zero(q in any::<i16>(), r in any::<i16>()) {
            let (q, r, s) =
                AxialPoint::new(q as i32, r as i32).to_cube();
            prop_assert_eq!(q + r + s, 0);
        }

        #[test]
        fn prop_distance_is_metric(
            aq in -100i32..100, ar in -100i32..100,
            bq in -100i32..100, br in -100i32..100,
            cq in -100i32..100, cr in -100i32..100,
        ) {
            let a = AxialPoint::new(aq, ar);
            let b = AxialPoint::new(bq, br);
            let c = AxialPoint::new(cq, cr);
            prop_assert_eq!(a.distance_to(a), 0);
            prop_assert_eq!(a.distance_to(b), b.distance_to(a));
            prop_assert!(
                a.distance_to(c) <= a.distance_to(b) + b.distance_to(c)
            );
        }
    }
}
