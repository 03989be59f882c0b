//! Base damage from arriving enemies and what losing the base leads to.

use hecs::{Entity, World};

use dietolive_core::components::{Enemy, Position};
use dietolive_core::constants::{DEATH_BURST_PARTICLES, PHASE2_BASE_HEALTH};
use dietolive_core::enums::EffectKind;
use dietolive_core::events::SimEvent;

use crate::progression::{BaseOutcome, Progression};
use crate::systems::damage::Ledger;
use crate::world_setup;

/// Resolve arrivals in the given order. Each enemy is removed once and its
/// damage is deducted once, whatever its remaining health.
pub fn resolve_arrivals(
    world: &mut World,
    arrivals: &[(u64, Entity)],
    progression: &mut Progression,
    ledger: &mut Ledger<'_>,
) {
    for &(serial, entity) in arrivals {
        let Ok((damage, at)) = world
            .query_one_mut::<(&Enemy, &Position)>(entity)
            .map(|(enemy, position)| (enemy.damage, position.0))
        else {
            continue;
        };
        let _ = world.despawn(entity);
        world_setup::spawn_burst(
            world,
            ledger.fx_rng,
            at,
            EffectKind::Blood,
            DEATH_BURST_PARTICLES,
        );

        let base_health = ledger.economy.damage_base(damage);
        ledger.events.push(SimEvent::BaseHit {
            serial,
            damage,
            base_health,
        });
        if base_health <= 0 {
            base_destroyed(progression, ledger);
        }
    }
}

fn base_destroyed(progression: &mut Progression, ledger: &mut Ledger<'_>) {
    if progression.phase().is_terminal() {
        ledger.economy.set_base_health(0);
        return;
    }
    match progression.base_destroyed() {
        BaseOutcome::Phase2Ramp => {
            ledger.economy.set_base_health(PHASE2_BASE_HEALTH);
            ledger.events.push(SimEvent::Phase2Started {
                wave: progression.wave(),
            });
            log::info!("base destroyed at wave {}, PHASE2 ramp started", progression.wave());
        }
        BaseOutcome::GameOver => {
            ledger.economy.set_base_health(0);
            ledger.events.push(SimEvent::GameOver {
                wave: progression.wave(),
            });
            log::info!("base destroyed at wave {}, game over", progression.wave());
        }
        BaseOutcome::Absorbed => ledger.economy.set_base_health(0),
    }
}
