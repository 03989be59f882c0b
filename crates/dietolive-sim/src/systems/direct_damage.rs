//! PHASE2 click damage.

use glam::Vec2;
use hecs::{Entity, World};

use dietolive_core::components::{Enemy, Position};
use dietolive_core::constants::*;
use dietolive_core::enums::EffectKind;

use crate::systems::damage::{self, Ledger};
use crate::world_setup;

/// Hit every live enemy strictly within the click radius of `point`.
///
/// Each hit pays a small coin bonus and throws sparks from the click
/// point; kills are resolved per enemy. A click that hits nothing leaves a
/// puff. Returns the number of enemies hit.
pub fn click_at(world: &mut World, point: Vec2, click_damage: i32, ledger: &mut Ledger<'_>) -> usize {
    let mut hits: Vec<(u64, Entity)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, position))| {
            enemy.health > 0 && position.0.distance(point) < CLICK_RADIUS
        })
        .map(|(entity, (enemy, _))| (enemy.serial, entity))
        .collect();
    hits.sort_unstable_by_key(|(serial, _)| *serial);

    if hits.is_empty() {
        world_setup::spawn_burst(world, ledger.fx_rng, point, EffectKind::Miss, MISS_BURST_PARTICLES);
        return 0;
    }

    for &(_, entity) in &hits {
        ledger.economy.credit(CLICK_HIT_BONUS);
        world_setup::spawn_burst(world, ledger.fx_rng, point, EffectKind::Spark, CLICK_BURST_PARTICLES);
        damage::damage_enemy(world, entity, click_damage, 0, ledger);
    }
    hits.len()
}
