//! Damage, slow and kill resolution shared by projectiles and clicks.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use dietolive_core::components::{Enemy, Position};
use dietolive_core::constants::{DEATH_BURST_PARTICLES, SLOW_FACTOR};
use dietolive_core::enums::EffectKind;
use dietolive_core::events::SimEvent;

use crate::economy::Economy;
use crate::world_setup;

/// Engine state a combat system may touch besides the world.
pub struct Ledger<'a> {
    pub economy: &'a mut Economy,
    pub events: &'a mut Vec<SimEvent>,
    /// Cosmetic stream; never used for gameplay draws.
    pub fx_rng: &'a mut ChaCha8Rng,
}

/// Slow an enemy to 30 % of its base speed for `ticks`. Re-applying resets
/// the timer rather than stacking. Zero ticks does nothing.
pub fn apply_slow(enemy: &mut Enemy, ticks: u32) {
    if ticks == 0 {
        return;
    }
    enemy.speed = enemy.base_speed * SLOW_FACTOR;
    enemy.slow_ticks = ticks;
}

/// Deal `damage` to `target` and apply `slow_ticks` of slow.
///
/// A kill despawns the enemy on the spot, credits its reward and leaves a
/// blood burst. Returns true on a kill; a missing target returns false.
pub fn damage_enemy(
    world: &mut World,
    target: Entity,
    damage: i32,
    slow_ticks: u32,
    ledger: &mut Ledger<'_>,
) -> bool {
    let (kind, serial, reward, at) = match world.query_one_mut::<(&mut Enemy, &Position)>(target) {
        Ok((enemy, position)) => {
            enemy.health -= damage;
            apply_slow(enemy, slow_ticks);
            if enemy.health > 0 {
                return false;
            }
            (enemy.kind, enemy.serial, enemy.reward, position.0)
        }
        Err(_) => return false,
    };

    let _ = world.despawn(target);
    ledger.economy.credit(reward);
    ledger.events.push(SimEvent::EnemyKilled {
        serial,
        kind,
        reward,
    });
    world_setup::spawn_burst(
        world,
        ledger.fx_rng,
        at,
        EffectKind::Blood,
        DEATH_BURST_PARTICLES,
    );
    log::trace!("enemy #{serial} ({kind:?}) killed, +{reward} coins");
    true
}
