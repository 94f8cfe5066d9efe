//! Room placement rectangles

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::LevelRng;

/// An axis-aligned room rectangle with integer position and size
///
/// Immutable once accepted: used for placement checks against later
/// candidates and as the seed region for corridor endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Left column of the interior
    pub x: i32,
    /// Top row of the interior
    pub y: i32,
    /// Width in cells
    pub width: i32,
    /// Height in cells
    pub height: i32,
}

impl Room {
    /// Create a new room
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost interior column
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom interior row
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if this room overlaps another
    ///
    /// Borders are exclusive: two rooms sharing an edge do not overlap.
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Center cell, rounded toward the top-left
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if a cell lies inside the room
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// All interior cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let (x0, x1) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (x0..x1).map(move |x| Point::new(x, y)))
    }

    /// Pick a random interior cell
    pub fn random_point(&self, rng: &mut LevelRng) -> Point {
        Point::new(
            rng.range_i32(self.x, self.right() - 1),
            rng.range_i32(self.y, self.bottom() - 1),
        )
    }
}
