//! Generation configuration and validation
//!
//! All failure modes of the generator are precondition violations, so the
//! configuration is rejected eagerly here instead of letting the sampler
//! produce degenerate geometry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a configuration cannot produce a valid level
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("level size must be positive, got {width}x{height}")]
    EmptyLevel { width: i32, height: i32 },

    #[error("room size must be positive, got {size}")]
    EmptyRoom { size: i32 },

    #[error("room size range is inverted: min {min} exceeds max {max}")]
    InvertedRoomRange { min: i32, max: i32 },

    #[error("rooms up to {max}x{max} cannot fit in a {width}x{height} level")]
    RoomExceedsLevel { max: i32, width: i32, height: i32 },

    #[error("max rooms must be at least 1")]
    NoRooms,
}

/// Parameters for one level generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Level width in cells
    pub level_width: i32,
    /// Level height in cells
    pub level_height: i32,
    /// Smallest room extent, applied to both axes
    pub room_min: i32,
    /// Largest room extent, applied to both axes
    pub room_max: i32,
    /// Upper bound on placement attempts; a rejected candidate still
    /// spends one, so this caps attempts rather than guaranteeing a count
    pub max_rooms: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            level_width: 100,
            level_height: 80,
            room_min: 10,
            room_max: 14,
            max_rooms: 15,
        }
    }
}

impl LevelConfig {
    /// Reject configurations that would make room sampling degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_width < 1 || self.level_height < 1 {
            return Err(ConfigError::EmptyLevel {
                width: self.level_width,
                height: self.level_height,
            });
        }
        if self.room_min < 1 {
            return Err(ConfigError::EmptyRoom {
                size: self.room_min,
            });
        }
        if self.room_min > self.room_max {
            return Err(ConfigError::InvertedRoomRange {
                min: self.room_min,
                max: self.room_max,
            });
        }
        if self.room_max > self.level_width || self.room_max > self.level_height {
            return Err(ConfigError::RoomExceedsLevel {
                max: self.room_max,
                width: self.level_width,
                height: self.level_height,
            });
        }
        if self.max_rooms == 0 {
            return Err(ConfigError::NoRooms);
        }
        Ok(())
    }
}
