//! Collision and damage system.
//!
//! Brute-force circle tests, O(attackers x enemies):
//! - player projectiles vs enemies (projectile consumed by its first hit),
//! - player melee hitboxes vs enemies (once per activation per enemy),
//! - hostile projectiles vs the player,
//! - enemy bodies vs the player (contact damage, per-enemy cooldown).
//!
//! Enemies are never destroyed here, only damaged; the death system owns
//! health-based removal. Friendly fire is excluded here: enemy-owned damage
//! never reaches an enemy.

use std::collections::HashSet;

use glam::DVec2;
use hecs::{Entity, World};

use ashfall_core::components::*;
use ashfall_core::config::CombatConfig;
use ashfall_core::enums::Owner;
use ashfall_core::types::{AttackId, Transform, Velocity};

use crate::context::TickContext;
use crate::world::ComponentStore;

/// (activation, target) pairs that already landed. Melee hitboxes persist for
/// several ticks; this keeps them to one hit per enemy per swing.
#[derive(Debug, Default)]
pub struct HitLedger {
    hits: HashSet<(AttackId, Entity)>,
}

impl HitLedger {
    /// Record a hit. Returns false if this activation already hit `target`.
    pub fn record(&mut self, attack_id: AttackId, target: Entity) -> bool {
        self.hits.insert((attack_id, target))
    }

    pub fn contains(&self, attack_id: AttackId, target: Entity) -> bool {
        self.hits.contains(&(attack_id, target))
    }

    /// Forget activations whose hitboxes no longer exist.
    pub fn prune(&mut self, world: &World) {
        if self.hits.is_empty() {
            return;
        }
        let live: HashSet<AttackId> = world
            .query::<&Hitbox>()
            .iter()
            .map(|(_entity, hitbox)| hitbox.attack_id)
            .collect();
        self.hits.retain(|(attack_id, _)| live.contains(attack_id));
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// A damageable enemy snapshot taken before the collision pass.
#[derive(Debug, Clone, Copy)]
struct Target {
    entity: Entity,
    position: DVec2,
    radius: f64,
}

/// Run every collision pass in order.
pub fn run(
    world: &mut World,
    ledger: &mut HitLedger,
    combat: &CombatConfig,
    ctx: &mut TickContext,
    despawn_buffer: &mut Vec<Entity>,
) {
    projectiles_vs_enemies(world, combat, ctx, despawn_buffer);
    hitboxes_vs_enemies(world, ledger, combat, ctx);
    enemy_projectiles_vs_player(world, combat, ctx, despawn_buffer);
    enemy_contact(world, combat, ctx);
}

/// Player projectiles against enemies. Each projectile damages at most one
/// enemy, the first one tested, and is destroyed.
pub fn projectiles_vs_enemies(
    world: &mut World,
    combat: &CombatConfig,
    ctx: &mut TickContext,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let targets = gather_targets(world);

    let projectiles: Vec<(Entity, DVec2, f64, f64, DVec2)> = world
        .query::<(&ProjectileTag, &Transform, &Collider, &Damage, Option<&Velocity>)>()
        .iter()
        .filter(|(_, (_, _, _, damage, _))| damage.owner_id != Owner::Enemy)
        .map(|(entity, (_, t, c, d, v))| {
            let heading = v.map_or(DVec2::ZERO, |v| v.as_vec());
            (entity, t.position(), c.radius, d.value, heading)
        })
        .collect();

    for (projectile, position, radius, damage, heading) in projectiles {
        for target in &targets {
            if !overlaps(position, radius, target.position, target.radius) {
                continue;
            }
            if !is_alive(world, target.entity) {
                continue;
            }
            let push = heading
                .try_normalize()
                .or_else(|| (target.position - position).try_normalize())
                .unwrap_or(DVec2::ZERO);
            apply_hit(world, target.entity, damage, push, combat, ctx);
            despawn_buffer.push(projectile);
            break;
        }
    }

    for entity in despawn_buffer.drain(..) {
        world.destroy_entity(entity);
    }
}

/// Player melee hitboxes against enemies. Hitboxes survive their hits.
pub fn hitboxes_vs_enemies(
    world: &mut World,
    ledger: &mut HitLedger,
    combat: &CombatConfig,
    ctx: &mut TickContext,
) {
    let targets = gather_targets(world);

    let hitboxes: Vec<(AttackId, DVec2, f64, f64)> = world
        .query::<(&Hitbox, &Transform, &Collider, &Damage)>()
        .iter()
        .filter(|(_, (_, _, _, damage))| damage.owner_id != Owner::Enemy)
        .map(|(_, (h, t, c, d))| (h.attack_id, t.position(), c.radius, d.value))
        .collect();

    for (attack_id, position, radius, damage) in hitboxes {
        for target in &targets {
            if ledger.contains(attack_id, target.entity) {
                continue;
            }
            if !overlaps(position, radius, target.position, target.radius) {
                continue;
            }
            if !is_alive(world, target.entity) {
                continue;
            }
            ledger.record(attack_id, target.entity);
            let push = (target.position - position)
                .try_normalize()
                .unwrap_or(DVec2::ZERO);
            apply_hit(world, target.entity, damage, push, combat, ctx);
        }
    }
}

/// Hostile projectiles against the player. Damage and push go to the tick
/// accumulators; the projectile is destroyed.
pub fn enemy_projectiles_vs_player(
    world: &mut World,
    combat: &CombatConfig,
    ctx: &mut TickContext,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let player = ctx.player_position();

    for (entity, (_tag, transform, collider, damage)) in
        world.query::<(&ProjectileTag, &Transform, &Collider, &Damage)>().iter()
    {
        if damage.owner_id != Owner::Enemy {
            continue;
        }
        let position = transform.position();
        if !overlaps(position, collider.radius, player, combat.player_radius) {
            continue;
        }
        ctx.pending_player_damage += damage.value;
        let push = (player - position).try_normalize().unwrap_or(DVec2::ZERO);
        ctx.pending_knockback += push * combat.contact_knockback_force;
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        world.destroy_entity(entity);
    }
}

/// Enemy bodies touching the player. Each enemy hits at most once per its
/// cooldown; all contributions this tick are summed.
pub fn enemy_contact(world: &mut World, combat: &CombatConfig, ctx: &mut TickContext) {
    let player = ctx.player_position();
    let now_ms = ctx.input.now_ms;

    for (_entity, (_enemy, transform, collider, stats, cooldown, health)) in world.query_mut::<(
        &EnemyTag,
        &Transform,
        &Collider,
        &Stats,
        &mut AttackCooldown,
        Option<&Health>,
    )>() {
        if health.is_some_and(|h| h.is_dead()) {
            continue;
        }
        let position = transform.position();
        if !overlaps(position, collider.radius, player, combat.player_radius) {
            continue;
        }
        if now_ms - cooldown.last_hit_time < cooldown.cooldown {
            continue;
        }

        cooldown.last_hit_time = now_ms;
        ctx.pending_player_damage += stats.damage;
        let push = (player - position).try_normalize().unwrap_or(DVec2::ZERO);
        ctx.pending_knockback += push * combat.contact_knockback_force;
    }
}

fn gather_targets(world: &World) -> Vec<Target> {
    world
        .query::<(&EnemyTag, &Transform, &Collider, &Health)>()
        .iter()
        .filter(|(_, (_, _, _, health))| !health.is_dead())
        .map(|(entity, (_, t, c, _))| Target {
            entity,
            position: t.position(),
            radius: c.radius,
        })
        .collect()
}

fn overlaps(a: DVec2, radius_a: f64, b: DVec2, radius_b: f64) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) < reach * reach
}

fn is_alive(world: &World, target: Entity) -> bool {
    world
        .get::<&Health>(target)
        .is_ok_and(|health| !health.is_dead())
}

/// Damage an enemy, push it along `direction`, and start its hit flash.
fn apply_hit(
    world: &mut World,
    target: Entity,
    damage: f64,
    direction: DVec2,
    combat: &CombatConfig,
    ctx: &mut TickContext,
) {
    let Ok(mut health) = world.get::<&mut Health>(target) else {
        return;
    };
    health.current -= damage;
    drop(health);
    ctx.damage_dealt += damage;

    let mass = world.get::<&Mass>(target).map_or(1.0, |m| m.value.max(1.0));
    let impulse = direction * (combat.knockback_force / mass);
    let knockback = match world.get::<&Knockback>(target) {
        Ok(existing) => Knockback {
            x: existing.x + impulse.x,
            y: existing.y + impulse.y,
        },
        Err(_) => Knockback {
            x: impulse.x,
            y: impulse.y,
        },
    };
    world.add_component(target, knockback);
    world.add_component(
        target,
        VisualEffect {
            tint_flash: combat.hit_flash_tint,
            flash_timer: combat.hit_flash_ms,
        },
    );
}
