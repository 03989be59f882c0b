//! Enemy movement along the lane.
//!
//! Each tick an enemy counts down its slow, then walks `speed` units toward
//! the next waypoint. When the remaining distance is at most `speed` it
//! snaps onto the waypoint and advances its path index. Enemies standing on
//! the final waypoint are reported as arrivals.

use hecs::{Entity, World};

use dietolive_core::components::{Enemy, Position};
use dietolive_core::path::Path;

/// Move every enemy one tick. Arrivals are written to `arrivals` in spawn
/// order.
pub fn run(world: &mut World, path: &Path, arrivals: &mut Vec<(u64, Entity)>) {
    arrivals.clear();
    let last = path.last_index();

    for (entity, (enemy, position)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        tick_slow(enemy);

        if enemy.path_index < last {
            if let Some(waypoint) = path.point(enemy.path_index + 1) {
                let remaining = waypoint - position.0;
                let distance = remaining.length();
                if distance <= enemy.speed {
                    position.0 = waypoint;
                    enemy.path_index += 1;
                } else {
                    position.0 += remaining / distance * enemy.speed;
                }
            }
        }

        if enemy.path_index >= last {
            arrivals.push((enemy.serial, entity));
        }
    }

    arrivals.sort_unstable_by_key(|(serial, _)| *serial);
}

fn tick_slow(enemy: &mut Enemy) {
    if enemy.slow_ticks == 0 {
        return;
    }
    enemy.slow_ticks -= 1;
    if enemy.slow_ticks == 0 {
        enemy.speed = enemy.base_speed;
    }
}
