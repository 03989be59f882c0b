//! Wave spawning: releases one enemy every spawn interval while a wave has
//! enemies pending.

use hecs::World;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use dietolive_core::enums::EnemyKind;
use dietolive_core::events::SimEvent;
use dietolive_core::path::Path;

use crate::progression::Progression;
use crate::world_setup;

/// Enemy kind released during `wave`.
///
/// Early waves are all Basic, then Basic/Speedy alternate by wave parity,
/// then Basic/Speedy/Abnormal rotate by wave mod 3. From wave 15 on every
/// spawn is drawn uniformly from all four kinds.
pub fn enemy_kind_for_wave(wave: u32, rng: &mut ChaCha8Rng) -> EnemyKind {
    match wave {
        0..=4 => EnemyKind::Basic,
        5..=9 if wave % 2 == 0 => EnemyKind::Basic,
        5..=9 => EnemyKind::Speedy,
        10..=14 => match wave % 3 {
            0 => EnemyKind::Basic,
            1 => EnemyKind::Speedy,
            _ => EnemyKind::Abnormal,
        },
        _ => *EnemyKind::ALL.choose(rng).unwrap_or(&EnemyKind::Basic),
    }
}

/// Advance the spawn timer and release an enemy when one is due.
pub fn run(
    world: &mut World,
    progression: &mut Progression,
    path: &Path,
    rng: &mut ChaCha8Rng,
    next_enemy_serial: &mut u64,
    events: &mut Vec<SimEvent>,
) {
    if !progression.spawn_due() {
        return;
    }
    let kind = enemy_kind_for_wave(progression.wave(), rng);
    let serial = *next_enemy_serial;
    *next_enemy_serial += 1;
    world_setup::spawn_enemy(world, kind, serial, path.spawn_point());
    events.push(SimEvent::EnemySpawned { serial, kind });
    log::trace!(
        "wave {}: spawned enemy #{serial} ({kind:?}), {} pending",
        progression.wave(),
        progression.pending_spawns()
    );
}
