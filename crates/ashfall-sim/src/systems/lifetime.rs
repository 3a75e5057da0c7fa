//! Lifetime system: counts down timed entities and removes expired ones.
//!
//! Runs after collision so a projectile that hits and expires in the same
//! tick still lands its hit; destroy is idempotent either way.

use hecs::{Entity, World};

use ashfall_core::components::Lifetime;

use crate::world::ComponentStore;

/// Subtract `dt_ms` from every Lifetime and destroy entities at or below zero.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, dt_ms: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, lifetime) in world.query_mut::<&mut Lifetime>() {
        lifetime.remaining -= dt_ms;
        if lifetime.expired() {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        world.destroy_entity(entity);
    }
}
