//! Static item and enemy definitions, read as immutable configuration.
//!
//! Catalogs are keyed by string id and loaded from JSON data tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate definition id: {0}")]
    DuplicateId(String),
}

/// Unmodified stats of an item, before affix rolls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseStats {
    pub damage: f64,
    pub range: f64,
    /// Activations per second.
    pub fire_rate: f64,
    /// Projectile speed in units per second.
    pub speed: f64,
    pub crit_chance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitConfig {
    pub radius: f64,
    #[serde(default)]
    pub speed: f64,
}

/// Per-item overrides for multi-shot and melee placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttackConfig {
    pub count: Option<u32>,
    /// Radians between adjacent projectiles.
    pub spread: Option<f64>,
    /// Melee hitbox lifetime in milliseconds.
    pub duration: Option<f64>,
    /// Distance from the caster to the hitbox center.
    pub offset_distance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitboxConfig {
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDef {
    pub id: String,
    pub behavior: String,
    pub base_stats: BaseStats,
    #[serde(default)]
    pub orbit_config: Option<OrbitConfig>,
    #[serde(default)]
    pub attack_config: Option<AttackConfig>,
    #[serde(default)]
    pub hitbox: Option<HitboxConfig>,
    /// Texture hint for spawned projectiles.
    #[serde(default)]
    pub texture: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyStats {
    pub hp: f64,
    pub speed: f64,
    pub damage: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default)]
    pub exp: f64,
    /// Ranged attack reach; zero for melee-only enemies.
    #[serde(default)]
    pub attack_range: f64,
    /// Ranged shots per second.
    #[serde(default)]
    pub attack_speed: f64,
    #[serde(default)]
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnRules {
    #[serde(default)]
    pub min_wave: u32,
    #[serde(default)]
    pub cost: u32,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyDef {
    pub id: String,
    pub stats: EnemyStats,
    pub spawn_rules: SpawnRules,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub tint: Option<u32>,
}

/// An equipped weapon: an item id plus its pre-rolled (affix-adjusted) numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponInstance {
    pub item_id: String,
    pub damage: f64,
    pub range: f64,
    pub speed: f64,
    pub fire_rate: f64,
    /// Timestamp of the last activation (milliseconds).
    #[serde(default = "never_fired")]
    pub last_fired_ms: f64,
    /// Definition to use when `item_id` is missing from the catalog.
    #[serde(default)]
    pub fallback: Option<ItemDef>,
}

/// Item definitions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDef>,
}

/// Enemy definitions keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EnemyCatalog {
    order: Vec<String>,
    enemies: HashMap<String, EnemyDef>,
}

fn default_mass() -> f64 {
    1.0
}

fn default_weight() -> f64 {
    1.0
}

fn never_fired() -> f64 {
    f64::NEG_INFINITY
}

impl WeaponInstance {
    /// An instance with the item's unmodified base stats.
    pub fn from_def(def: &ItemDef) -> Self {
        Self {
            item_id: def.id.clone(),
            damage: def.base_stats.damage,
            range: def.base_stats.range,
            speed: def.base_stats.speed,
            fire_rate: def.base_stats.fire_rate,
            last_fired_ms: never_fired(),
            fallback: None,
        }
    }

    /// Milliseconds between activations. A non-positive fire rate never refires.
    pub fn cooldown_ms(&self) -> f64 {
        if self.fire_rate > 0.0 {
            1000.0 / self.fire_rate
        } else {
            f64::INFINITY
        }
    }

    pub fn ready(&self, now_ms: f64) -> bool {
        now_ms - self.last_fired_ms >= self.cooldown_ms()
    }
}

impl ItemCatalog {
    pub fn new(items: impl IntoIterator<Item = ItemDef>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for item in items {
            if catalog.items.contains_key(&item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            catalog.items.insert(item.id.clone(), item);
        }
        Ok(catalog)
    }

    /// Parse a JSON array of item definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<ItemDef> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl EnemyCatalog {
    pub fn new(enemies: impl IntoIterator<Item = EnemyDef>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for enemy in enemies {
            if catalog.enemies.contains_key(&enemy.id) {
                return Err(CatalogError::DuplicateId(enemy.id));
            }
            catalog.order.push(enemy.id.clone());
            catalog.enemies.insert(enemy.id.clone(), enemy);
        }
        Ok(catalog)
    }

    /// Parse a JSON array of enemy definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let enemies: Vec<EnemyDef> = serde_json::from_str(json)?;
        Self::new(enemies)
    }

    pub fn get(&self, id: &str) -> Option<&EnemyDef> {
        self.enemies.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyDef> {
        self.order.iter().filter_map(|id| self.enemies.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
