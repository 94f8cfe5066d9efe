//! wn-core: dungeon layout generation and steering behaviors
//!
//! This crate contains all generation and steering logic with no I/O
//! dependencies. It is designed to be pure and testable: the terminal
//! viewer in `wn-tui` only consumes values produced here.
//!
//! The two halves are independent. [`dungeon`] produces the sparse set of
//! floor cells for one level (rooms joined by corridors), and [`steering`]
//! computes per-tick velocity updates for agents chasing a target.

pub mod dungeon;
pub mod steering;

mod rng;

pub use rng::LevelRng;
