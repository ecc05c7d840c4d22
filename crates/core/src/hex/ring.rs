//! Ring and spiral enumeration over the hex plane. Everything here is
//! deterministic: a ring is emitted in one fixed walk order, and a spiral is
//! the concatenation of rings of increasing radius, so the i-th point of a
//! spiral is the same in every run. Layout code depends on that stability to
//! assign a flat sequence of values to 2-D cells.

use crate::hex::{AxialPoint, Direction};

/// The number of points on the ring at the given radius: 1 for radius 0
/// (just the center), otherwise 6 per radius step
pub fn ring_len(radius: u32) -> usize {
    if radius == 0 {
        1
    } else {
        6 * radius as usize
    }
}

/// The total number of points in a spiral through the given radius, i.e. the
/// center plus every full ring up to and including `radius`
pub fn spiral_len(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 points (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r points for every ring after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let radius = radius as usize;
    3 * radius * radius + 3 * radius + 1
}

/// An iterator over all points at an exact distance from a center point.
///
/// The walk starts at the reference corner `center + SouthWest * radius` and
/// traverses the hexagon's six edges, each `radius` steps long, stepping in
/// the directions of [Direction::ALL] in order. Every point is emitted
/// before the step away from it, so the final step of the last edge lands
/// back on the corner without re-emitting it. The order is part of this
/// type's contract: spiral layouts assign sequence positions to cells based
/// on it, and an equally valid but differently ordered walk would scramble
/// them.
///
/// A radius of 0 yields exactly the center.
#[derive(Clone, Debug)]
pub struct Ring {
    center: AxialPoint,
    radius: u32,
    /// The point the next call to `next` will emit
    next: AxialPoint,
    /// Index into [Direction::ALL] of the edge currently being walked
    edge: usize,
    /// Steps already taken along the current edge
    step: u32,
    /// Points left to emit
    remaining: usize,
}

impl Ring {
    pub(super) fn new(center: AxialPoint, radius: u32) -> Self {
        let corner = center + Direction::SouthWest.to_vector() * radius as i32;
        Self {
            center,
            radius,
            next: corner,
            edge: 0,
            step: 0,
            remaining: ring_len(radius),
        }
    }
}

impl Iterator for Ring {
    type Item = AxialPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let point = self.next;
        debug_assert_eq!(
            self.center.distance_to(point),
            self.radius,
            "ring walk around {} left the radius-{} ring at {}",
            self.center,
            self.radius,
            point
        );

        self.remaining -= 1;
        if self.remaining > 0 {
            // Advance along the current edge, turning onto the next edge
            // every `radius` steps. Skipped after the last point so `edge`
            // never runs off the end of the direction table.
            self.next = point.adjacent(Direction::ALL[self.edge]);
            self.step += 1;
            if self.step == self.radius {
                self.step = 0;
                self.edge += 1;
            }
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Ring {}

/// An iterator spiraling outward from a center point: ring 0 (the center
/// itself), then every point of ring 1, ring 2, and so on, each ring in
/// [Ring]'s walk order.
///
/// The iterator is infinite, so callers bound it with [Iterator::take].
/// `take(n)` is always a prefix of `take(n + 1)`, which is what keeps spiral
/// layouts stable as items are appended to the end of a sequence.
#[derive(Clone, Debug)]
pub struct Spiral {
    center: AxialPoint,
    radius: u32,
    ring: Ring,
}

impl Spiral {
    pub(super) fn new(center: AxialPoint) -> Self {
        Self {
            center,
            radius: 0,
            ring: Ring::new(center, 0),
        }
    }
}

impl Iterator for Spiral {
    type Item = AxialPoint;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(point) = self.ring.next() {
                return Some(point);
            }
            // Current ring exhausted, move outward
            self.radius += 1;
            self.ring = Ring::new(self.center, self.radius);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
