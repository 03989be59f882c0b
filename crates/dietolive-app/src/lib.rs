//! Die to Live simulation driver.
//!
//! Runs the headless engine at a fixed 60 Hz step on a dedicated thread,
//! fed by a command channel, and publishes the latest snapshot for any
//! presentation layer to poll.

pub mod autopilot;
pub mod config;
pub mod driver;
pub mod error;
pub mod game_loop;
pub mod state;

pub use dietolive_core as core;
