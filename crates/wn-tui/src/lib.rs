//! Terminal UI layer for warren
//!
//! Renders generated levels with ratatui and hosts the steering demo
//! agent that chases a movable target marker across the floor.

pub mod app;
pub mod glyphs;
pub mod input;
pub mod widgets;

pub use app::App;
