//! Wave-based enemy stat scaling.

use ashfall_core::constants::{WAVE_HP_SCALE, WAVE_SPEED_CAP, WAVE_SPEED_SCALE};
use ashfall_core::defs::EnemyStats;

/// Health and speed after wave scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledStats {
    pub hp: f64,
    pub speed: f64,
}

pub fn hp_multiplier(wave: u32) -> f64 {
    1.0 + WAVE_HP_SCALE * wave.saturating_sub(1) as f64
}

pub fn speed_multiplier(wave: u32) -> f64 {
    (1.0 + WAVE_SPEED_SCALE * wave.saturating_sub(1) as f64).min(WAVE_SPEED_CAP)
}

/// Scale an enemy definition's stats to the given wave. Waves 0 and 1 are unscaled.
pub fn scale_for_wave(stats: &EnemyStats, wave: u32) -> ScaledStats {
    ScaledStats {
        hp: stats.hp * hp_multiplier(wave),
        speed: stats.speed * speed_multiplier(wave),
    }
}
