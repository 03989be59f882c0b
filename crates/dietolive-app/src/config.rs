//! Driver configuration.

use std::time::Duration;

use dietolive_core::constants::TICK_RATE;
use dietolive_sim::SimConfig;

/// Duration of one simulation tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the game loop thread paces the simulation.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub sim: SimConfig,
    /// Wall-clock time between frames; each frame runs as many ticks as
    /// the elapsed time covers.
    pub frame_interval: Duration,
    /// Longest elapsed time a single frame may account for. Anything
    /// beyond it is dropped instead of being caught up.
    pub max_frame_time: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frame_interval: TICK_DURATION,
            max_frame_time: Duration::from_millis(100),
        }
    }
}
