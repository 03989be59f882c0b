//! ECS components for hecs entities.
//!
//! Components are plain data structs with no gameplay methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, EnemyKind};

/// A walking enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Spawn order; stable id and targeting scan order.
    pub serial: u64,
    pub health: i32,
    pub max_health: i32,
    /// Base health lost when this enemy arrives.
    pub damage: i32,
    pub reward: u32,
    /// Current travel per tick.
    pub speed: f32,
    /// Travel per tick without slow.
    pub base_speed: f32,
    /// Ticks of slow left; zero when not slowed.
    pub slow_ticks: u32,
    /// Index of the last waypoint reached.
    pub path_index: usize,
}

/// A short-lived cosmetic dot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub velocity: Vec2,
    /// Ticks left before removal.
    pub life: u32,
    pub effect: EffectKind,
}

/// Position component shared by enemies, projectiles and particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);
