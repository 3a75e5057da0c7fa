//! Enemy targeting system: pursuit plus ranged fire.
//!
//! Calls the pure decision function from ashfall-ai for every enemy, applies
//! the resulting velocity and facing, and spawns hostile bolts for enemies
//! whose ranged cooldown has elapsed.

use glam::DVec2;
use hecs::World;

use ashfall_ai::targeting::{evaluate, ChaseContext, RangedCooldown};
use ashfall_core::components::{CombatState, EnemyTag, Health, Stats};
use ashfall_core::types::{Transform, Velocity};

use crate::context::TickContext;
use crate::world_setup::spawn_enemy_projectile;

/// A bolt to spawn once the query borrow is released.
struct FireOrder {
    x: f64,
    y: f64,
    angle: f64,
    damage: f64,
    range: f64,
}

pub fn run(world: &mut World, ctx: &mut TickContext) {
    let player = ctx.player_position();
    let now_ms = ctx.input.now_ms;
    let mut orders: Vec<FireOrder> = Vec::new();

    for (_entity, (_enemy, transform, vel, stats, health, combat)) in world.query_mut::<(
        &EnemyTag,
        &mut Transform,
        &mut Velocity,
        &Stats,
        Option<&Health>,
        Option<&mut CombatState>,
    )>() {
        if health.is_some_and(|h| h.is_dead()) {
            continue;
        }

        let decision = evaluate(&ChaseContext {
            position: DVec2::new(transform.x, transform.y),
            player,
            speed: stats.speed,
            attack_range: stats.attack_range,
            now_ms,
            ranged: combat.as_deref().map(|c| RangedCooldown {
                last_attack_time: c.last_attack_time,
                cooldown: c.cooldown,
            }),
        });

        *vel = decision.velocity;
        transform.rotation = decision.rotation;

        if let (Some(angle), Some(combat)) = (decision.fire_angle, combat) {
            combat.last_attack_time = now_ms;
            orders.push(FireOrder {
                x: transform.x,
                y: transform.y,
                angle,
                damage: stats.damage,
                range: stats.attack_range,
            });
        }
    }

    for order in orders {
        spawn_enemy_projectile(world, order.x, order.y, order.angle, order.damage, order.range);
    }
}
