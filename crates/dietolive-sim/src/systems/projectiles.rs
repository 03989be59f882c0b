//! Projectile flight and impact.
//!
//! The target handle is revalidated every tick: a projectile whose enemy is
//! gone or dead is dropped without effect.

use hecs::{Entity, World};

use dietolive_core::components::{Enemy, Position};
use dietolive_core::constants::{HIT_BURST_PARTICLES, PROJECTILE_HIT_RADIUS};
use dietolive_core::enums::EffectKind;
use dietolive_core::types::on_playfield;

use crate::projectile::Projectile;
use crate::systems::damage::{self, Ledger};
use crate::world_setup;

/// Advance every projectile one tick, in firing order.
pub fn run(world: &mut World, ledger: &mut Ledger<'_>, despawn_buffer: &mut Vec<Entity>) {
    let mut in_flight: Vec<(Entity, Projectile)> = world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, projectile)| (entity, projectile.clone()))
        .collect();
    in_flight.sort_unstable_by_key(|(_, projectile)| projectile.serial);

    let hit_radius_sq = PROJECTILE_HIT_RADIUS * PROJECTILE_HIT_RADIUS;

    for (entity, projectile) in in_flight {
        let target_position = match world.query_one_mut::<(&Enemy, &Position)>(projectile.target) {
            Ok((enemy, position)) if enemy.health > 0 => position.0,
            _ => {
                despawn_buffer.push(entity);
                continue;
            }
        };

        let position = match world.get::<&mut Position>(entity) {
            Ok(mut position) => {
                let remaining = target_position - position.0;
                let distance = remaining.length();
                if distance <= projectile.speed {
                    position.0 = target_position;
                } else {
                    position.0 += remaining / distance * projectile.speed;
                }
                position.0
            }
            Err(_) => continue,
        };

        if position.distance_squared(target_position) < hit_radius_sq {
            despawn_buffer.push(entity);
            world_setup::spawn_burst(
                world,
                ledger.fx_rng,
                position,
                EffectKind::Impact(projectile.source),
                HIT_BURST_PARTICLES,
            );
            damage::damage_enemy(
                world,
                projectile.target,
                projectile.damage,
                projectile.slow_ticks,
                ledger,
            );
        } else if !on_playfield(position) {
            despawn_buffer.push(entity);
        }
    }
}
