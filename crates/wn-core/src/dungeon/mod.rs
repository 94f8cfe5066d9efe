//! Dungeon layout system
//!
//! Produces the sparse floor-cell set for one level: randomly placed
//! rectangular or organic rooms joined by L-shaped corridors.

mod config;
mod corridor;
mod generation;
mod level;
mod organic;
mod point;
mod room;

pub use config::{ConfigError, LevelConfig};
pub use generation::{generate, generate_random, generate_seeded};
pub use level::Level;
pub use point::Point;
pub use room::Room;
