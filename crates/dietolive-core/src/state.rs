//! Simulation snapshot: the complete visible state handed to the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{GridCell, SimTime};

/// Complete simulation state published after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub paused: bool,
    pub economy: EconomyView,
    /// PHASE2 ramp progress in 0..=1 while the ramp runs.
    pub phase2_progress: Option<f32>,
    /// Lane waypoints, spawn first.
    pub lane: Vec<GridCell>,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    /// Events since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// Player-facing counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomyView {
    pub coins: u32,
    pub base_health: i32,
    pub wave: u32,
    /// Enemies of the current wave not spawned yet.
    pub pending_spawns: u32,
    pub click_damage: i32,
    pub click_level: u32,
}

/// A placed tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerView {
    pub cell: GridCell,
    pub kind: TowerKind,
    pub level: u32,
    pub damage: i32,
    pub range: u32,
    pub cooldown: u32,
    pub max_cooldown: u32,
    /// Cost of the next level, `None` at max level.
    pub upgrade_cost: Option<u32>,
    /// Coins returned if sold now.
    pub sell_value: u32,
}

/// A live enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub serial: u64,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub path_index: usize,
    pub slowed: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub source: TowerKind,
}

/// A cosmetic particle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec2,
    pub effect: EffectKind,
    /// Remaining lifetime, for fading.
    pub life: u32,
}
