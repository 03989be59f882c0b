//! Projectile component.
//!
//! Kept in this crate rather than in `dietolive-core` because it holds a
//! hecs entity handle for its target.

use dietolive_core::enums::TowerKind;

/// A shot in flight toward an enemy.
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Creation order; projectiles resolve in this order each tick.
    pub serial: u64,
    /// Weak reference to the target. Revalidated with `World::get` every
    /// tick since another hit, a click or an arrival may have removed it.
    pub target: hecs::Entity,
    pub damage: i32,
    /// Travel per tick.
    pub speed: f32,
    pub source: TowerKind,
    /// Slow applied on hit (ticks); zero for none.
    pub slow_ticks: u32,
}
