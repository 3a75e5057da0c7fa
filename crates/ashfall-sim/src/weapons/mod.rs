//! Weapon resolution and firing.
//!
//! `fire` turns an equipped weapon plus a caster pose into projectile or
//! hitbox entities. Only explicitly implemented behaviors produce entities:
//! an unknown item or behavior is logged and yields nothing, so a malformed
//! data table cannot spawn "ghost" projectiles or stop the tick loop.

pub mod behavior;

use glam::DVec2;
use hecs::{Entity, EntityBuilder, World};
use thiserror::Error;
use tracing::{debug, warn};

use ashfall_core::components::{Collider, Damage, Hitbox, Lifetime, ProjectileTag, SpriteConfig};
use ashfall_core::config::CombatConfig;
use ashfall_core::constants::{DEFAULT_SPREAD, RECOIL_IMPULSE};
use ashfall_core::defs::{ItemCatalog, ItemDef, WeaponInstance};
use ashfall_core::enums::{Owner, WeaponBehavior};
use ashfall_core::events::SimEvent;
use ashfall_core::types::{AttackId, Transform, Velocity};

use behavior::BehaviorPlan;

#[derive(Debug, Error, PartialEq)]
pub enum FireError {
    #[error("unknown item id `{0}`")]
    UnknownItem(String),

    #[error("item `{item_id}` has unsupported behavior `{behavior}`")]
    UnsupportedBehavior { item_id: String, behavior: String },

    #[error("item `{item_id}` cannot fire: {reason}")]
    InvalidStats { item_id: String, reason: String },
}

/// Where a shot originates and who fired it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireSource {
    pub x: f64,
    pub y: f64,
    /// Aim used when no target is given.
    pub rotation: f64,
    pub owner: Owner,
    pub siege: bool,
}

/// One activation of a weapon.
#[derive(Debug, Clone, Copy)]
pub struct FireRequest<'a> {
    pub weapon: &'a WeaponInstance,
    pub source: FireSource,
    /// Caster damage multiplier (the caster's `Stats.damage`).
    pub caster_damage: f64,
    pub target: Option<DVec2>,
}

/// A weapon after definition lookup and stat resolution.
#[derive(Debug, Clone)]
pub struct ResolvedWeapon<'a> {
    pub def: &'a ItemDef,
    pub behavior: WeaponBehavior,
    pub damage: f64,
    pub range: f64,
    pub speed: f64,
}

/// Look up the definition, validate the behavior and compute final stats.
pub fn resolve<'a>(
    catalog: &'a ItemCatalog,
    request: &FireRequest<'a>,
    combat: &CombatConfig,
) -> Result<ResolvedWeapon<'a>, FireError> {
    let weapon = request.weapon;
    let def = catalog
        .get(&weapon.item_id)
        .or(weapon.fallback.as_ref())
        .ok_or_else(|| FireError::UnknownItem(weapon.item_id.clone()))?;

    let behavior =
        WeaponBehavior::parse(&def.behavior).ok_or_else(|| FireError::UnsupportedBehavior {
            item_id: def.id.clone(),
            behavior: def.behavior.clone(),
        })?;

    let mut damage = weapon.damage * request.caster_damage;
    let mut range = weapon.range;
    if request.source.siege {
        damage *= combat.siege_damage_mult;
        range *= combat.siege_range_mult;
    }

    if !behavior.is_melee() && !(weapon.speed > 0.0 && range > 0.0) {
        return Err(FireError::InvalidStats {
            item_id: def.id.clone(),
            reason: format!("ranged shot needs positive speed and range, got {} / {}", weapon.speed, range),
        });
    }

    Ok(ResolvedWeapon {
        def,
        behavior,
        damage,
        range,
        speed: weapon.speed,
    })
}

/// Fire a weapon. Returns the spawned entities; empty when the request is rejected.
pub fn fire(
    world: &mut World,
    catalog: &ItemCatalog,
    combat: &CombatConfig,
    attack_ids: &mut AttackId,
    request: &FireRequest,
    events: &mut Vec<SimEvent>,
) -> Vec<Entity> {
    let resolved = match resolve(catalog, request, combat) {
        Ok(resolved) => resolved,
        Err(err) => {
            warn!(%err, "weapon fire rejected");
            return Vec::new();
        }
    };

    let source = request.source;
    let plan = behavior::plan(resolved.behavior, resolved.def, resolved.speed);
    let aim = match request.target {
        Some(target) => (target.y - source.y).atan2(target.x - source.x),
        None => source.rotation,
    };

    let attack = resolved.def.attack_config.unwrap_or_default();
    let count = attack.count.unwrap_or(1).max(1);
    let spread = attack.spread.unwrap_or(DEFAULT_SPREAD);
    // One activation id shared by every hitbox of this swing.
    let attack_id = plan.hitbox.then(|| attack_ids.allocate());

    let aim_dir = DVec2::from_angle(aim);
    let origin = DVec2::new(source.x, source.y) + aim_dir.perp() * plan.lateral_offset;
    // Shots leaving an orbit slot still converge on the target.
    let aim = match request.target {
        Some(target) if plan.lateral_offset != 0.0 => {
            (target.y - origin.y).atan2(target.x - origin.x)
        }
        _ => aim,
    };
    let lifetime = plan.duration.millis(resolved.range, plan.speed);

    let mut spawned = Vec::with_capacity(count as usize);
    for slot in 0..count {
        let angle = aim + (slot as f64 - (count - 1) as f64 / 2.0) * spread;
        let position = origin + DVec2::from_angle(angle) * plan.forward_offset;
        let entity = spawn_shot(
            world,
            &plan,
            position,
            angle,
            resolved.damage * plan.damage_mult,
            source.owner,
            lifetime,
            attack_id,
        );
        spawned.push(entity);
    }

    events.push(SimEvent::WeaponFired {
        item_id: resolved.def.id.clone(),
        x: source.x,
        y: source.y,
        angle: aim,
    });
    if !plan.hitbox && source.owner == Owner::Player {
        let kick = -aim_dir * RECOIL_IMPULSE;
        events.push(SimEvent::Recoil {
            dx: kick.x,
            dy: kick.y,
        });
    }

    debug!(
        item = %resolved.def.id,
        behavior = resolved.behavior.as_str(),
        count,
        "weapon fired"
    );
    spawned
}

#[allow(clippy::too_many_arguments)]
fn spawn_shot(
    world: &mut World,
    plan: &BehaviorPlan,
    position: DVec2,
    angle: f64,
    damage: f64,
    owner: Owner,
    lifetime: f64,
    attack_id: Option<AttackId>,
) -> Entity {
    let mut builder = EntityBuilder::new();
    builder
        .add(Transform::new(position.x, position.y, angle))
        .add(Velocity::from_angle(angle, plan.speed))
        .add(Damage {
            value: damage,
            owner_id: owner,
        })
        .add(Lifetime::new(lifetime))
        .add(Collider {
            radius: plan.radius,
        });

    let sprite = SpriteConfig::new(plan.texture.clone(), plan.tint, 1.0);
    builder.add(SpriteConfig {
        visible: plan.visible,
        ..sprite
    });

    match attack_id {
        Some(attack_id) => builder.add(Hitbox { attack_id }),
        None => builder.add(ProjectileTag),
    };

    world.spawn(builder.build())
}
