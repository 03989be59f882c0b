//! Tower targeting and firing.
//!
//! Towers fire in cell order. A tower on cooldown counts down and skips the
//! tick; a ready tower picks the closest live enemy strictly inside its
//! range and launches one projectile at it.

use std::collections::BTreeMap;

use glam::Vec2;
use hecs::{Entity, World};

use dietolive_core::components::{Enemy, Position};
use dietolive_core::types::GridCell;

use crate::tower::Tower;
use crate::world_setup;

/// A live enemy as seen by targeting.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub entity: Entity,
    pub serial: u64,
    pub position: Vec2,
}

/// Live enemies in scan (spawn serial) order.
pub fn candidates(world: &World) -> Vec<Candidate> {
    let mut found: Vec<Candidate> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| enemy.health > 0)
        .map(|(entity, (enemy, position))| Candidate {
            entity,
            serial: enemy.serial,
            position: position.0,
        })
        .collect();
    found.sort_unstable_by_key(|candidate| candidate.serial);
    found
}

/// Closest candidate strictly within `range` of `origin`. On equal
/// distance the first one in scan order wins.
pub fn select_target(origin: Vec2, range: f32, candidates: &[Candidate]) -> Option<Entity> {
    let mut best: Option<(f32, Entity)> = None;
    for candidate in candidates {
        let distance = origin.distance(candidate.position);
        if distance >= range {
            continue;
        }
        if best.map_or(true, |(closest, _)| distance < closest) {
            best = Some((distance, candidate.entity));
        }
    }
    best.map(|(_, entity)| entity)
}

/// Run one tick of fire control for every tower.
pub fn run(
    world: &mut World,
    towers: &mut BTreeMap<GridCell, Tower>,
    next_projectile_serial: &mut u64,
) {
    let targets = candidates(world);

    for (cell, tower) in towers.iter_mut() {
        if tower.cooldown > 0 {
            tower.cooldown -= 1;
            continue;
        }
        let origin = cell.center();
        let Some(target) = select_target(origin, tower.range_units(), &targets) else {
            continue;
        };
        world_setup::spawn_projectile(world, tower, *next_projectile_serial, origin, target);
        *next_projectile_serial += 1;
        tower.cooldown = tower.max_cooldown;
    }
}
