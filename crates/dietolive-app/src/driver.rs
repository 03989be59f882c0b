//! Fixed-step driver.
//!
//! Converts wall-clock frame time into whole 1/60 s ticks. Leftover time
//! carries over to the next frame. While the simulation is paused no ticks
//! run and the accumulator stays empty, so resuming never replays the
//! paused interval.

use std::time::Duration;

use dietolive_core::commands::PlayerCommand;
use dietolive_core::state::SimSnapshot;
use dietolive_sim::SimulationEngine;

use crate::config::{LoopConfig, TICK_DURATION};

/// Result of one `advance` call.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Ticks run this frame.
    pub ticks: u32,
    /// State after the last tick, carrying the events of every tick run.
    pub snapshot: SimSnapshot,
}

pub struct FixedStepDriver {
    engine: SimulationEngine,
    accumulator: Duration,
    max_frame_time: Duration,
}

impl FixedStepDriver {
    pub fn new(config: LoopConfig) -> Self {
        Self {
            engine: SimulationEngine::new(config.sim),
            accumulator: Duration::ZERO,
            max_frame_time: config.max_frame_time,
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.engine.queue_command(command);
    }

    /// Account for `elapsed` wall-clock time, running zero or more ticks.
    pub fn advance(&mut self, elapsed: Duration) -> Frame {
        if self.engine.is_paused() {
            // Build commands and resume still apply while paused.
            self.engine.apply_pending_commands();
            self.accumulator = Duration::ZERO;
            if self.engine.is_paused() {
                return Frame {
                    ticks: 0,
                    snapshot: self.engine.snapshot(),
                };
            }
        }

        self.accumulator += elapsed.min(self.max_frame_time);

        let mut ticks = 0;
        let mut events = Vec::new();
        let mut last = None;
        while self.accumulator >= TICK_DURATION {
            self.accumulator -= TICK_DURATION;
            let mut snapshot = self.engine.tick();
            ticks += 1;
            events.append(&mut snapshot.events);
            last = Some(snapshot);
            if self.engine.is_paused() {
                self.accumulator = Duration::ZERO;
                break;
            }
        }

        let snapshot = match last {
            Some(mut snapshot) => {
                snapshot.events = events;
                snapshot
            }
            None => self.engine.snapshot(),
        };
        Frame { ticks, snapshot }
    }
}
