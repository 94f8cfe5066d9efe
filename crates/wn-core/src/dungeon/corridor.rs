//! Corridor carving
//!
//! Each newly accepted room is joined to its immediate predecessor by an
//! L-shaped corridor between their centers; which leg is carved first is
//! a coin flip.

use std::collections::HashSet;

use super::point::Point;
use crate::LevelRng;

/// Axis a corridor segment runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Mark every cell from min(start, end) to max(start, end) inclusive.
///
/// A zero-length span still marks its single endpoint cell.
fn carve_span(floor: &mut HashSet<Point>, start: i32, end: i32, constant: i32, axis: Axis) {
    for t in start.min(end)..=start.max(end) {
        let point = match axis {
            Axis::X => Point::new(t, constant),
            Axis::Y => Point::new(constant, t),
        };
        floor.insert(point);
    }
}

/// Carve an L-shaped corridor from `from` to `to`
pub(crate) fn carve_corridor(
    floor: &mut HashSet<Point>,
    from: Point,
    to: Point,
    rng: &mut LevelRng,
) {
    if rng.coin_flip() {
        // Horizontal leg at from's row, then vertical leg at to's column
        carve_span(floor, from.x, to.x, from.y, Axis::X);
        carve_span(floor, from.y, to.y, to.x, Axis::Y);
    } else {
        // Vertical leg at from's column, then horizontal leg at to's row
        carve_span(floor, from.y, to.y, from.x, Axis::Y);
        carve_span(floor, from.x, to.x, to.y, Axis::X);
    }
}
