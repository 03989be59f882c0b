//! Entity spawn factories for the simulation world.
//!
//! Enemies, projectiles and particles are the only ECS entities; towers
//! live in the engine's tower map.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use dietolive_core::components::{Enemy, Particle, Position};
use dietolive_core::constants::*;
use dietolive_core::enums::{EffectKind, EnemyKind};
use dietolive_core::profiles::enemy_profile;

use crate::projectile::Projectile;
use crate::tower::Tower;

/// Spawn a full-health enemy of `kind` at `at` (normally the lane start).
pub fn spawn_enemy(world: &mut World, kind: EnemyKind, serial: u64, at: Vec2) -> Entity {
    let profile = enemy_profile(kind);
    world.spawn((
        Enemy {
            kind,
            serial,
            health: profile.max_health,
            max_health: profile.max_health,
            damage: profile.damage,
            reward: profile.reward,
            speed: profile.speed,
            base_speed: profile.speed,
            slow_ticks: 0,
            path_index: 0,
        },
        Position(at),
    ))
}

/// Spawn a projectile fired by `tower` from `from` toward `target`.
pub fn spawn_projectile(
    world: &mut World,
    tower: &Tower,
    serial: u64,
    from: Vec2,
    target: Entity,
) -> Entity {
    world.spawn((
        Projectile {
            serial,
            target,
            damage: tower.damage,
            speed: PROJECTILE_SPEED,
            source: tower.kind,
            slow_ticks: tower.slow_ticks,
        },
        Position(from),
    ))
}

/// Spawn `count` particles at `at` with random velocity and lifetime.
pub fn spawn_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    at: Vec2,
    effect: EffectKind,
    count: usize,
) {
    for _ in 0..count {
        let velocity = Vec2::new(
            rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
        );
        let life = rng.gen_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX);
        world.spawn((
            Particle {
                velocity,
                life,
                effect,
            },
            Position(at),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn burst_particles_respect_velocity_and_life_bounds() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        spawn_burst(&mut world, &mut rng, Vec2::ZERO, EffectKind::Blood, 50);

        let mut count = 0;
        for (_entity, particle) in world.query_mut::<&Particle>() {
            count += 1;
            assert!(particle.velocity.x.abs() <= PARTICLE_MAX_SPEED);
            assert!(particle.velocity.y.abs() <= PARTICLE_MAX_SPEED);
            assert!((PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX).contains(&particle.life));
        }
        assert_eq!(count, 50);
    }

    #[test]
    fn enemies_spawn_at_full_health_on_the_first_waypoint() {
        let mut world = World::new();
        let entity = spawn_enemy(&mut world, EnemyKind::Charged, 3, Vec2::new(725.0, 375.0));
        let enemy = world.get::<&Enemy>(entity).unwrap();
        assert_eq!(enemy.health, 60);
        assert_eq!(enemy.path_index, 0);
        assert_eq!(enemy.serial, 3);
    }
}
