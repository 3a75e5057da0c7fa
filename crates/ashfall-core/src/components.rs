//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Owner;
use crate::types::AttackId;

/// Hit points. `current` may go negative before the death stage runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// AI and weapon tuning read by targeting and firing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Movement speed in units per second.
    pub speed: f64,
    /// Contact / projectile damage for enemies; damage multiplier for the player.
    pub damage: f64,
    /// Ranged attack reach. Zero means melee-only.
    pub attack_range: f64,
    /// Shots per second for ranged enemies.
    pub attack_speed: f64,
}

/// Ranged attack cooldown tracker (milliseconds).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatState {
    pub last_attack_time: f64,
    pub cooldown: f64,
}

/// Contact damage cooldown tracker (milliseconds).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackCooldown {
    pub last_hit_time: f64,
    pub cooldown: f64,
}

/// Carried by every hit-causing entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Damage {
    pub value: f64,
    pub owner_id: Owner,
}

/// Countdown in milliseconds. The entity is destroyed once `remaining <= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining: f64,
    pub total: f64,
}

/// Presentation hint mirrored by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteConfig {
    pub texture_id: String,
    /// 0xRRGGBB.
    pub tint: u32,
    pub scale: f64,
    /// Hitboxes are simulated but not drawn.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// Transient hit flash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualEffect {
    pub tint_flash: u32,
    /// Milliseconds left on the flash; never below zero.
    pub flash_timer: f64,
}

/// Circle used by every collision test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// Marks a melee hitbox and the activation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hitbox {
    pub attack_id: AttackId,
}

/// Accumulated external impulse in units per second, decays over time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Knockback {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    pub value: f64,
}

/// Worth of a loot marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub amount: f64,
}

/// Enemy definition id the entity was spawned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyKind {
    pub def_id: String,
}

/// Marks a player-controlled entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTag;

/// Marks a hostile entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyTag;

/// Marks a discrete travelling projectile (consumed on first hit).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileTag;

/// Marks a loot pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LootTag;

fn default_visible() -> bool {
    true
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Current health clamped for display.
    pub fn display(&self) -> f64 {
        self.current.clamp(0.0, self.max)
    }
}

impl Lifetime {
    pub fn new(total: f64) -> Self {
        Self {
            remaining: total,
            total,
        }
    }

    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

impl SpriteConfig {
    pub fn new(texture_id: impl Into<String>, tint: u32, scale: f64) -> Self {
        Self {
            texture_id: texture_id.into(),
            tint,
            scale,
            visible: true,
        }
    }

    pub fn hidden(texture_id: impl Into<String>) -> Self {
        Self {
            visible: false,
            ..Self::new(texture_id, 0xffffff, 1.0)
        }
    }
}
