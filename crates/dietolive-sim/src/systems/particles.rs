//! Cosmetic particle integration.

use hecs::{Entity, World};

use dietolive_core::components::{Particle, Position};
use dietolive_core::constants::PARTICLE_GRAVITY;

/// Move particles, apply gravity, and queue expired ones for removal.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (particle, position)) in world.query_mut::<(&mut Particle, &mut Position)>() {
        position.0 += particle.velocity;
        particle.velocity.y += PARTICLE_GRAVITY;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            despawn_buffer.push(entity);
        }
    }
}
