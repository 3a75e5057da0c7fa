//! Per-behavior spawn plans.
//!
//! Each supported behavior decides projectile speed, where the entity appears
//! relative to the caster, its collision radius, visibility, lifetime and
//! damage multiplier. The set is closed; see `WeaponBehavior::parse`.

use ashfall_core::constants::*;
use ashfall_core::defs::ItemDef;
use ashfall_core::enums::WeaponBehavior;

/// How long a spawned entity lives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Duration {
    /// Fixed hitbox lifetime (milliseconds).
    Fixed(f64),
    /// Travel until the weapon's range is covered: `range / speed * 1000`.
    Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorPlan {
    pub speed: f64,
    /// Distance from the (possibly shifted) origin along the fire direction.
    pub forward_offset: f64,
    /// Sideways shift of the origin, perpendicular to the aim.
    pub lateral_offset: f64,
    pub radius: f64,
    pub visible: bool,
    pub damage_mult: f64,
    pub duration: Duration,
    pub texture: String,
    pub tint: u32,
    /// Melee hitboxes persist through hits; projectiles are consumed.
    pub hitbox: bool,
}

/// Build the spawn plan for `behavior`. `speed` is the instance's rolled speed.
pub fn plan(behavior: WeaponBehavior, def: &ItemDef, speed: f64) -> BehaviorPlan {
    let attack = def.attack_config.unwrap_or_default();
    let hitbox_radius = def.hitbox.map(|h| h.radius);
    let texture = def
        .texture
        .clone()
        .unwrap_or_else(|| behavior.as_str().to_string());

    match behavior {
        WeaponBehavior::MeleeSweep => BehaviorPlan {
            speed: 0.0,
            forward_offset: attack.offset_distance.unwrap_or(SWEEP_OFFSET),
            lateral_offset: 0.0,
            radius: hitbox_radius.unwrap_or(SWEEP_RADIUS),
            visible: false,
            damage_mult: MELEE_DAMAGE_MULT,
            duration: Duration::Fixed(attack.duration.unwrap_or(SWEEP_DURATION_MS)),
            texture,
            tint: 0xff_ffff,
            hitbox: true,
        },
        WeaponBehavior::MeleeThrust => BehaviorPlan {
            speed: 0.0,
            forward_offset: attack.offset_distance.unwrap_or(THRUST_OFFSET),
            lateral_offset: 0.0,
            radius: hitbox_radius.unwrap_or(THRUST_RADIUS),
            visible: false,
            damage_mult: MELEE_DAMAGE_MULT,
            duration: Duration::Fixed(attack.duration.unwrap_or(THRUST_DURATION_MS)),
            texture,
            tint: 0xff_ffff,
            hitbox: true,
        },
        WeaponBehavior::PistolShot => BehaviorPlan {
            speed,
            forward_offset: attack.offset_distance.unwrap_or(0.0),
            lateral_offset: 0.0,
            radius: hitbox_radius.unwrap_or(BULLET_RADIUS),
            visible: true,
            damage_mult: 1.0,
            duration: Duration::Range,
            texture,
            tint: 0xff_ee88,
            hitbox: false,
        },
        WeaponBehavior::DroneBeam => BehaviorPlan {
            speed,
            forward_offset: attack.offset_distance.unwrap_or(0.0),
            lateral_offset: def.orbit_config.map_or(DRONE_ORBIT_RADIUS, |o| o.radius),
            radius: hitbox_radius.unwrap_or(BEAM_RADIUS),
            visible: true,
            damage_mult: 1.0,
            duration: Duration::Range,
            texture,
            tint: 0x55_ddff,
            hitbox: false,
        },
    }
}

impl Duration {
    /// Lifetime in milliseconds for a shot with the given range and speed.
    pub fn millis(&self, range: f64, speed: f64) -> f64 {
        match *self {
            Duration::Fixed(ms) => ms,
            Duration::Range => range / speed * 1000.0,
        }
    }
}
