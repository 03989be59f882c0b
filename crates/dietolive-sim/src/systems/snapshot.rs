//! Snapshot system: reads the world and engine state into a `SimSnapshot`.
//!
//! Read-only; never modifies the world.

use std::collections::BTreeMap;

use hecs::World;

use dietolive_core::components::{Enemy, Particle, Position};
use dietolive_core::events::SimEvent;
use dietolive_core::path::Path;
use dietolive_core::state::*;
use dietolive_core::types::{GridCell, SimTime};

use crate::economy::Economy;
use crate::progression::Progression;
use crate::projectile::Projectile;
use crate::tower::Tower;

/// Engine state the snapshot is built from.
pub struct SnapshotSource<'a> {
    pub world: &'a World,
    pub time: SimTime,
    pub path: &'a Path,
    pub towers: &'a BTreeMap<GridCell, Tower>,
    pub economy: &'a Economy,
    pub progression: &'a Progression,
}

/// Build a complete snapshot, taking ownership of the pending events.
pub fn build_snapshot(source: SnapshotSource<'_>, events: Vec<SimEvent>) -> SimSnapshot {
    let progression = source.progression;
    SimSnapshot {
        time: source.time,
        phase: progression.phase(),
        paused: progression.is_paused(),
        economy: source
            .economy
            .view(progression.wave(), progression.pending_spawns()),
        phase2_progress: progression.phase2_progress(),
        lane: source.path.waypoints().to_vec(),
        towers: build_towers(source.towers),
        enemies: build_enemies(source.world),
        projectiles: build_projectiles(source.world),
        particles: build_particles(source.world),
        events,
    }
}

fn build_towers(towers: &BTreeMap<GridCell, Tower>) -> Vec<TowerView> {
    towers
        .iter()
        .map(|(cell, tower)| TowerView {
            cell: *cell,
            kind: tower.kind,
            level: tower.level,
            damage: tower.damage,
            range: tower.range,
            cooldown: tower.cooldown,
            max_cooldown: tower.max_cooldown,
            upgrade_cost: tower.upgrade_cost(),
            sell_value: tower.sell_value(),
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, position))| EnemyView {
            serial: enemy.serial,
            kind: enemy.kind,
            position: position.0,
            health: enemy.health,
            max_health: enemy.max_health,
            path_index: enemy.path_index,
            slowed: enemy.slow_ticks > 0,
        })
        .collect();
    enemies.sort_unstable_by_key(|enemy| enemy.serial);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<(u64, ProjectileView)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, position))| {
            (
                projectile.serial,
                ProjectileView {
                    position: position.0,
                    source: projectile.source,
                },
            )
        })
        .collect();
    projectiles.sort_unstable_by_key(|(serial, _)| *serial);
    projectiles.into_iter().map(|(_, view)| view).collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Particle, &Position)>()
        .iter()
        .map(|(_, (particle, position))| ParticleView {
            position: position.0,
            effect: particle.effect,
            life: particle.life,
        })
        .collect()
}
