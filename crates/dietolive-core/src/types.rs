//! Fundamental geometric and simulation types.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{CELL_SIZE, GRID_SIZE, PLAYFIELD_SIZE, TICK_RATE};

/// A cell on the board. `x` grows to the right, `y` grows downward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies on the board.
    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    /// Center of the cell in world units.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 * CELL_SIZE + CELL_SIZE / 2.0,
            self.y as f32 * CELL_SIZE + CELL_SIZE / 2.0,
        )
    }

    /// Cell containing a world-space point. May be out of bounds.
    pub fn containing(point: Vec2) -> Self {
        Self {
            x: (point.x / CELL_SIZE).floor() as i32,
            y: (point.y / CELL_SIZE).floor() as i32,
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Whether a world-space point lies on the playfield.
pub fn on_playfield(point: Vec2) -> bool {
    (0.0..=PLAYFIELD_SIZE).contains(&point.x) && (0.0..=PLAYFIELD_SIZE).contains(&point.y)
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}
