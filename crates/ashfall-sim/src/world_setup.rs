//! Entity spawn factories.
//!
//! Creates enemies, enemy projectiles and loot markers with the component
//! bundles the systems expect. Player weapon entities are built by `weapons`.

use hecs::{Entity, EntityBuilder, World};

use ashfall_ai::scaling::scale_for_wave;
use ashfall_core::components::*;
use ashfall_core::constants::*;
use ashfall_core::defs::EnemyDef;
use ashfall_core::enums::Owner;
use ashfall_core::types::{Transform, Velocity};

/// Default tint for enemies whose definition names none.
const ENEMY_TINT: u32 = 0xff_ffff;

/// Spawn an enemy from its definition, scaled to `wave`, at (x, y).
pub fn spawn_enemy(world: &mut World, def: &EnemyDef, wave: u32, x: f64, y: f64) -> Entity {
    let scaled = scale_for_wave(&def.stats, wave);
    let texture = def.texture.clone().unwrap_or_else(|| def.id.clone());

    let mut builder = EntityBuilder::new();
    builder
        .add(EnemyTag)
        .add(EnemyKind {
            def_id: def.id.clone(),
        })
        .add(Transform::at(x, y))
        .add(Velocity::ZERO)
        .add(Health::full(scaled.hp))
        .add(Stats {
            speed: scaled.speed,
            damage: def.stats.damage,
            attack_range: def.stats.attack_range,
            attack_speed: def.stats.attack_speed,
        })
        .add(AttackCooldown {
            last_hit_time: f64::NEG_INFINITY,
            cooldown: CONTACT_COOLDOWN_MS,
        })
        .add(Collider {
            radius: def.stats.radius.unwrap_or(DEFAULT_ENEMY_RADIUS),
        })
        .add(Mass {
            value: def.stats.mass,
        })
        .add(Knockback::default())
        .add(VisualEffect::default())
        .add(Value {
            amount: def.stats.exp,
        })
        .add(SpriteConfig::new(texture, def.tint.unwrap_or(ENEMY_TINT), 1.0));

    // Only ranged enemies get a fire cooldown tracker.
    if def.stats.attack_range > 0.0 && def.stats.attack_speed > 0.0 {
        builder.add(CombatState {
            last_attack_time: f64::NEG_INFINITY,
            cooldown: 1000.0 / def.stats.attack_speed,
        });
    }

    world.spawn(builder.build())
}

/// Spawn a hostile bolt aimed along `angle`. It despawns at `range`.
pub fn spawn_enemy_projectile(
    world: &mut World,
    x: f64,
    y: f64,
    angle: f64,
    damage: f64,
    range: f64,
) -> Entity {
    let lifetime = range / ENEMY_PROJECTILE_SPEED * 1000.0;
    world.spawn((
        ProjectileTag,
        Transform::new(x, y, angle),
        Velocity::from_angle(angle, ENEMY_PROJECTILE_SPEED),
        Damage {
            value: damage,
            owner_id: Owner::Enemy,
        },
        Lifetime::new(lifetime),
        Collider {
            radius: ENEMY_PROJECTILE_RADIUS,
        },
        SpriteConfig::new(ENEMY_PROJECTILE_TEXTURE, ENEMY_PROJECTILE_TINT, 1.0),
    ))
}

/// Spawn a loot marker worth `amount` at a death position.
pub fn spawn_loot(world: &mut World, x: f64, y: f64, amount: f64) -> Entity {
    world.spawn((
        LootTag,
        Transform::at(x, y),
        Value { amount },
        SpriteConfig::new(LOOT_TEXTURE, LOOT_TINT, 1.0),
    ))
}
