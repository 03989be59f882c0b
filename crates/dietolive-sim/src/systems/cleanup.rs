//! Cleanup system: removes entities queued for despawn during the tick.

use hecs::{Entity, World};

/// Despawn everything in the buffer, leaving it empty for the next tick.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        // Already gone if queued twice.
        let _ = world.despawn(entity);
    }
}
