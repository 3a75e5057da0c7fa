//! Kinematic integration system.
//!
//! Updates Transform from Velocity each tick: position += velocity * dt.
//! Knockback is integrated separately so AI velocity writes never erase it.

use hecs::World;

use ashfall_core::components::Knockback;
use ashfall_core::constants::KNOCKBACK_EPSILON;
use ashfall_core::types::{Transform, Velocity};

/// Explicit Euler step for all entities with Transform + Velocity.
pub fn run(world: &mut World, dt_ms: f64) {
    let dt = dt_ms / 1000.0;
    for (_entity, (transform, vel)) in world.query_mut::<(&mut Transform, &Velocity)>() {
        transform.x += vel.x * dt;
        transform.y += vel.y * dt;
    }
}

/// Move entities by their accumulated knockback, then decay it exponentially.
pub fn apply_knockback(world: &mut World, dt_ms: f64, decay_per_sec: f64) {
    let dt = dt_ms / 1000.0;
    let retain = (-decay_per_sec * dt).exp();
    for (_entity, (transform, knockback)) in world.query_mut::<(&mut Transform, &mut Knockback)>()
    {
        if knockback.x == 0.0 && knockback.y == 0.0 {
            continue;
        }
        transform.x += knockback.x * dt;
        transform.y += knockback.y * dt;
        knockback.x *= retain;
        knockback.y *= retain;
        if knockback.x.hypot(knockback.y) < KNOCKBACK_EPSILON {
            *knockback = Knockback::default();
        }
    }
}
