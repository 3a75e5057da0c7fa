//! Simulation constants and tuning parameters.
//!
//! Times are milliseconds, distances are world units, speeds are units per second.

// --- Combat feedback ---

/// Hit-flash duration applied to a damaged enemy.
pub const HIT_FLASH_MS: f64 = 100.0;

/// Hit-flash tint (white).
pub const HIT_FLASH_TINT: u32 = 0xff_ffff;

/// Impulse applied to an enemy struck by a player attack.
pub const KNOCKBACK_FORCE: f64 = 240.0;

/// Exponential decay rate of accumulated knockback, per second.
pub const KNOCKBACK_DECAY_PER_SEC: f64 = 8.0;

/// Knockback below this magnitude snaps to zero.
pub const KNOCKBACK_EPSILON: f64 = 0.5;

/// Push applied to the player by an enemy contact hit.
pub const CONTACT_KNOCKBACK_FORCE: f64 = 300.0;

/// Default gap between contact hits from the same enemy.
pub const CONTACT_COOLDOWN_MS: f64 = 1000.0;

// --- Collision radii ---

pub const PLAYER_RADIUS: f64 = 16.0;
pub const DEFAULT_ENEMY_RADIUS: f64 = 14.0;
pub const BULLET_RADIUS: f64 = 6.0;
pub const BEAM_RADIUS: f64 = 4.0;

// --- Weapons ---

pub const SIEGE_DAMAGE_MULT: f64 = 1.25;
pub const SIEGE_RANGE_MULT: f64 = 1.5;

/// Melee hitboxes live only a few ticks; their damage is boosted to compensate.
pub const MELEE_DAMAGE_MULT: f64 = 1.5;

pub const SWEEP_OFFSET: f64 = 40.0;
pub const SWEEP_RADIUS: f64 = 48.0;
pub const SWEEP_DURATION_MS: f64 = 200.0;

pub const THRUST_OFFSET: f64 = 60.0;
pub const THRUST_RADIUS: f64 = 28.0;
pub const THRUST_DURATION_MS: f64 = 150.0;

/// Lateral distance of the escort drone from its owner.
pub const DRONE_ORBIT_RADIUS: f64 = 36.0;

/// Angle between adjacent multi-shot projectiles (radians).
pub const DEFAULT_SPREAD: f64 = 0.15;

/// Recoil impulse reported to the driver per ranged shot.
pub const RECOIL_IMPULSE: f64 = 40.0;

// --- Enemy ranged attacks ---

pub const ENEMY_PROJECTILE_SPEED: f64 = 260.0;
pub const ENEMY_PROJECTILE_RADIUS: f64 = 6.0;
pub const ENEMY_PROJECTILE_TEXTURE: &str = "enemy_bolt";
pub const ENEMY_PROJECTILE_TINT: u32 = 0xff_5533;

// --- Wave spawner ---

pub const BASE_SPAWN_INTERVAL_MS: f64 = 2000.0;
pub const MIN_SPAWN_INTERVAL_MS: f64 = 200.0;
pub const SPAWN_INTERVAL_STEP_MS: f64 = 100.0;

/// Placement attempts before a spawn cycle is skipped.
pub const SPAWN_ATTEMPTS: u32 = 10;

/// Half extents of the player's view; enemies spawn just beyond them.
pub const VIEW_HALF_WIDTH: f64 = 640.0;
pub const VIEW_HALF_HEIGHT: f64 = 360.0;
pub const SPAWN_MARGIN: f64 = 64.0;

/// Health grows by this fraction per wave past the first.
pub const WAVE_HP_SCALE: f64 = 0.15;
/// Speed grows by this fraction per wave past the first...
pub const WAVE_SPEED_SCALE: f64 = 0.03;
/// ...up to this multiplier.
pub const WAVE_SPEED_CAP: f64 = 1.6;

// --- Loot ---

pub const LOOT_DROP_CHANCE: f64 = 1.0;
pub const LOOT_TEXTURE: &str = "loot_orb";
pub const LOOT_TINT: u32 = 0x44_ff88;

// --- Extraction ---

pub const DEFAULT_EXTRACT_TIME_MS: f64 = 3000.0;

/// Progress drains this many times faster than it fills.
pub const EXTRACT_DECAY_MULT: f64 = 2.0;

/// Outward push applied to the player by a locked zone.
pub const ZONE_BOUNCE_FORCE: f64 = 400.0;
