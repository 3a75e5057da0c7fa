//! Player auto-fire.
//!
//! Every ready weapon in the loadout fires at the nearest living enemy within
//! its reach. Reach is the weapon range, stretched by the siege multiplier,
//! measured to the enemy's edge. A weapon with nothing in reach keeps its
//! cooldown and stays ready.

use glam::DVec2;
use hecs::World;

use ashfall_core::components::{Collider, EnemyTag, Health, Stats};
use ashfall_core::config::CombatConfig;
use ashfall_core::defs::{ItemCatalog, WeaponInstance};
use ashfall_core::enums::Owner;
use ashfall_core::types::{AttackId, Transform};

use crate::context::TickContext;
use crate::weapons::{fire, FireRequest, FireSource};

pub fn run(
    world: &mut World,
    loadout: &mut [WeaponInstance],
    catalog: &ItemCatalog,
    combat: &CombatConfig,
    caster: &Stats,
    attack_ids: &mut AttackId,
    ctx: &mut TickContext,
) {
    if loadout.is_empty() {
        return;
    }

    let pose = ctx.input.player;
    let now_ms = ctx.input.now_ms;
    let origin = pose.position();
    let enemies = living_enemies(world);

    for weapon in loadout.iter_mut() {
        if !weapon.ready(now_ms) {
            continue;
        }

        let reach = if pose.siege {
            weapon.range * combat.siege_range_mult
        } else {
            weapon.range
        };
        let Some(target) = nearest_within(&enemies, origin, reach) else {
            continue;
        };

        weapon.last_fired_ms = now_ms;
        let request = FireRequest {
            weapon: &*weapon,
            source: FireSource {
                x: pose.x,
                y: pose.y,
                rotation: pose.rotation,
                owner: Owner::Player,
                siege: pose.siege,
            },
            caster_damage: caster.damage,
            target: Some(target),
        };
        fire(world, catalog, combat, attack_ids, &request, &mut ctx.events);
    }
}

fn living_enemies(world: &World) -> Vec<(DVec2, f64)> {
    world
        .query::<(&EnemyTag, &Transform, &Health, Option<&Collider>)>()
        .iter()
        .filter(|(_, (_, _, health, _))| !health.is_dead())
        .map(|(_, (_, t, _, c))| (t.position(), c.map_or(0.0, |c| c.radius)))
        .collect()
}

fn nearest_within(enemies: &[(DVec2, f64)], origin: DVec2, reach: f64) -> Option<DVec2> {
    enemies
        .iter()
        .filter(|(position, radius)| origin.distance(*position) <= reach + radius)
        .min_by(|a, b| {
            origin
                .distance_squared(a.0)
                .total_cmp(&origin.distance_squared(b.0))
        })
        .map(|(position, _)| *position)
}
