//! Simulation engine for Die to Live.
//!
//! Owns the hecs ECS world, the tower map and the economy, runs systems at
//! a fixed tick rate, and produces `SimSnapshot`s for the presentation layer.

pub mod economy;
pub mod engine;
pub mod progression;
pub mod projectile;
pub mod systems;
pub mod tower;
pub mod world_setup;

pub use dietolive_core as core;
pub use engine::{SimConfig, SimulationEngine};
