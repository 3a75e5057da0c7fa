//! Pursuit and ranged-fire decision for a single enemy.
//!
//! Chase and kite/shoot are decided together so movement intent and fire
//! intent always read the same player position.

use glam::DVec2;

use ashfall_core::types::Velocity;

/// Input to the targeting decision for one enemy.
#[derive(Debug, Clone, Copy)]
pub struct ChaseContext {
    pub position: DVec2,
    pub player: DVec2,
    /// Units per second.
    pub speed: f64,
    /// Zero for melee-only enemies.
    pub attack_range: f64,
    pub now_ms: f64,
    /// `None` when the enemy carries no ranged cooldown tracker.
    pub ranged: Option<RangedCooldown>,
}

#[derive(Debug, Clone, Copy)]
pub struct RangedCooldown {
    pub last_attack_time: f64,
    pub cooldown: f64,
}

/// Output of the targeting decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseDecision {
    pub velocity: Velocity,
    /// Facing angle (radians), visual only.
    pub rotation: f64,
    /// Angle of a projectile to fire this tick, if any.
    pub fire_angle: Option<f64>,
}

/// Decide movement and fire for one enemy.
pub fn evaluate(ctx: &ChaseContext) -> ChaseDecision {
    let to_player = ctx.player - ctx.position;
    let dist_sq = to_player.length_squared();
    let rotation = to_player.y.atan2(to_player.x);

    if ctx.attack_range > 0.0 && dist_sq < ctx.attack_range * ctx.attack_range {
        let fire_angle = ctx
            .ranged
            .filter(|cd| ctx.now_ms > cd.last_attack_time + cd.cooldown)
            .map(|_| rotation);
        return ChaseDecision {
            velocity: Velocity::ZERO,
            rotation,
            fire_angle,
        };
    }

    let velocity = match to_player.try_normalize() {
        Some(dir) => Velocity::new(dir.x * ctx.speed, dir.y * ctx.speed),
        // Standing on the player
        None => Velocity::ZERO,
    };

    ChaseDecision {
        velocity,
        rotation,
        fire_angle: None,
    }
}
