//! Generated level data

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::room::Room;

/// The floor layout produced by one generation run
///
/// A cell is floor or absent, never anything else; nothing is removed
/// once carved. The seed is kept so the exact layout can be regenerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    width: i32,
    height: i32,
    seed: u64,
    rooms: Vec<Room>,
    floor: HashSet<Point>,
}

impl Level {
    pub(crate) fn new(
        width: i32,
        height: i32,
        seed: u64,
        rooms: Vec<Room>,
        floor: HashSet<Point>,
    ) -> Self {
        Self {
            width,
            height,
            seed,
            rooms,
            floor,
        }
    }

    /// Level width in cells
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Level height in cells
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Seed of the RNG that produced this level
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Accepted rooms, in acceptance order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All floor cells
    pub fn floor(&self) -> &HashSet<Point> {
        &self.floor
    }

    /// Check if a cell is floor
    pub fn is_floor(&self, point: Point) -> bool {
        self.floor.contains(&point)
    }

    /// Floor cells in row-major order, for stable output
    pub fn sorted_floor(&self) -> Vec<Point> {
        let mut cells: Vec<_> = self.floor.iter().copied().collect();
        cells.sort_by_key(|p| (p.y, p.x));
        cells
    }
}
