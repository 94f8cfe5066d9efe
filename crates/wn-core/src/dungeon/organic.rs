//! Organic room shapes
//!
//! An organic room is the interior of a random polygon threaded through
//! four thin border strips of the room rectangle, instead of the full
//! rectangle. Sampling the outline near the borders keeps the shape
//! roughly room-sized while breaking up the straight walls.

use std::collections::HashSet;

use glam::{Vec2, vec2};

use super::point::Point;
use super::room::Room;
use crate::LevelRng;

/// Fraction of the room size used as the strip thickness unit
const UNIT_DIVISOR: f32 = 8.0;

/// Vertices sampled per border strip
const STRIP_MIN_POINTS: i32 = 1;
const STRIP_MAX_POINTS: i32 = 2;

/// A thin band along one edge of the inset room rectangle
struct Strip {
    min: Vec2,
    max: Vec2,
    /// Runs horizontally: sort its samples by x rather than y
    horizontal: bool,
}

/// The four border strips in outline order: top, right, bottom, left.
///
/// Each strip is one unit thick, where a unit is an eighth of the room
/// size per axis, and hugs the rectangle obtained by insetting the room
/// by one unit on every side.
fn border_strips(room: &Room) -> [Strip; 4] {
    let pos = vec2(room.x as f32, room.y as f32);
    let size = vec2(room.width as f32, room.height as f32);
    let unit = size / UNIT_DIVISOR;
    let min = pos + unit;
    let max = pos + size - unit;

    [
        Strip {
            min: vec2(min.x, min.y),
            max: vec2(max.x, min.y + unit.y),
            horizontal: true,
        },
        Strip {
            min: vec2(max.x - unit.x, min.y),
            max: vec2(max.x, max.y),
            horizontal: false,
        },
        Strip {
            min: vec2(min.x, max.y - unit.y),
            max: vec2(max.x, max.y),
            horizontal: true,
        },
        Strip {
            min: vec2(min.x, min.y),
            max: vec2(min.x + unit.x, max.y),
            horizontal: false,
        },
    ]
}

/// Build the room's outline polygon: 1-2 vertices per strip, strips walked
/// top, right, bottom, left with the latter two reversed so the outline
/// winds around the room instead of zig-zagging across it.
pub(crate) fn random_polygon(room: &Room, rng: &mut LevelRng) -> Vec<Vec2> {
    let mut polygon = Vec::new();

    for (index, strip) in border_strips(room).iter().enumerate() {
        let count = rng.range_i32(STRIP_MIN_POINTS, STRIP_MAX_POINTS);
        let mut points: Vec<Vec2> = (0..count)
            .map(|_| {
                vec2(
                    rng.range_f32(strip.min.x, strip.max.x),
                    rng.range_f32(strip.min.y, strip.max.y),
                )
            })
            .collect();

        if strip.horizontal {
            points.sort_by(|a, b| a.x.total_cmp(&b.x));
        } else {
            points.sort_by(|a, b| a.y.total_cmp(&b.y));
        }
        if index > 1 {
            points.reverse();
        }

        polygon.extend(points);
    }

    polygon
}

/// Even-odd ray-crossing containment test.
///
/// Orientation-independent, so the polygon's winding never changes which
/// cells are carved.
pub(crate) fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;

    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) {
            let crossing = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < crossing {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Carve every cell of the room rectangle that falls inside a fresh
/// random outline polygon.
pub(crate) fn carve(room: &Room, rng: &mut LevelRng, floor: &mut HashSet<Point>) {
    let polygon = random_polygon(room, rng);
    for cell in room.cells() {
        if point_in_polygon(vec2(cell.x as f32, cell.y as f32), &polygon) {
            floor.insert(cell);
        }
    }
}
