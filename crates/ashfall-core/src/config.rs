//! Tunable configuration, deserialized from JSON with per-field defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Wave spawner pacing and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub base_interval_ms: f64,
    pub min_interval_ms: f64,
    pub step_per_wave_ms: f64,
    /// Rejection-sampling budget per spawn cycle.
    pub max_attempts: u32,
    pub view_half_width: f64,
    pub view_half_height: f64,
    pub margin: f64,
}

/// Collision and damage tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub player_radius: f64,
    pub knockback_force: f64,
    pub knockback_decay_per_sec: f64,
    pub contact_knockback_force: f64,
    pub hit_flash_ms: f64,
    pub hit_flash_tint: u32,
    pub siege_damage_mult: f64,
    pub siege_range_mult: f64,
    pub loot_drop_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub decay_mult: f64,
    pub bounce_force: f64,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: BASE_SPAWN_INTERVAL_MS,
            min_interval_ms: MIN_SPAWN_INTERVAL_MS,
            step_per_wave_ms: SPAWN_INTERVAL_STEP_MS,
            max_attempts: SPAWN_ATTEMPTS,
            view_half_width: VIEW_HALF_WIDTH,
            view_half_height: VIEW_HALF_HEIGHT,
            margin: SPAWN_MARGIN,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            knockback_force: KNOCKBACK_FORCE,
            knockback_decay_per_sec: KNOCKBACK_DECAY_PER_SEC,
            contact_knockback_force: CONTACT_KNOCKBACK_FORCE,
            hit_flash_ms: HIT_FLASH_MS,
            hit_flash_tint: HIT_FLASH_TINT,
            siege_damage_mult: SIEGE_DAMAGE_MULT,
            siege_range_mult: SIEGE_RANGE_MULT,
            loot_drop_chance: LOOT_DROP_CHANCE,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            decay_mult: EXTRACT_DECAY_MULT,
            bounce_force: ZONE_BOUNCE_FORCE,
        }
    }
}

impl SpawnerConfig {
    /// Spawn interval for a wave: linear ramp, floor-clamped.
    pub fn interval_for_wave(&self, wave: u32) -> f64 {
        (self.base_interval_ms - wave as f64 * self.step_per_wave_ms).max(self.min_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_interval_ms <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_interval_ms must be positive, got {}",
                self.min_interval_ms
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1".into()));
        }
        for (name, value) in [
            ("view_half_width", self.view_half_width),
            ("view_half_height", self.view_half_height),
            ("margin", self.margin),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl CombatConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.loot_drop_chance) {
            return Err(ConfigError::Invalid(format!(
                "loot_drop_chance must be within [0, 1], got {}",
                self.loot_drop_chance
            )));
        }
        Ok(())
    }
}
