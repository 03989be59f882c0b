//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine state
//! they need passed in explicitly. They hold no state of their own.

pub mod base;
pub mod cleanup;
pub mod damage;
pub mod direct_damage;
pub mod fire_control;
pub mod movement;
pub mod particles;
pub mod projectiles;
pub mod snapshot;
pub mod wave_spawner;
