//! Per-tick input, shared accumulators, and the outbox returned to the driver.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use ashfall_core::events::{KillEvent, SimEvent};
use ashfall_core::types::PlayerPose;

/// Everything the driver supplies for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Elapsed time since the previous tick (milliseconds).
    pub dt_ms: f64,
    /// Current simulation time (milliseconds).
    pub now_ms: f64,
    pub player: PlayerPose,
}

/// Results of one tick. The driver applies `player_damage` and
/// `player_knockback` once, after the pipeline has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickOutput {
    pub kills: Vec<KillEvent>,
    /// Total damage applied to enemies this tick.
    pub damage_dealt: f64,
    /// Enemies spawned by the wave spawner this tick.
    pub spawned: u32,
    pub player_damage: f64,
    pub player_knockback: DVec2,
    /// Zone whose extraction timer is full, if any.
    pub extracted: Option<u32>,
    pub events: Vec<SimEvent>,
}

/// Mutable state shared by systems within one tick.
#[derive(Debug)]
pub struct TickContext {
    pub input: TickInput,
    pub pending_player_damage: f64,
    pub pending_knockback: DVec2,
    pub damage_dealt: f64,
    pub kills: Vec<KillEvent>,
    pub spawned: u32,
    pub extracted: Option<u32>,
    pub events: Vec<SimEvent>,
}

impl TickInput {
    pub fn new(dt_ms: f64, now_ms: f64, player: PlayerPose) -> Self {
        Self {
            dt_ms,
            now_ms,
            player,
        }
    }

    pub fn dt_secs(&self) -> f64 {
        self.dt_ms / 1000.0
    }
}

impl TickContext {
    pub fn new(input: TickInput) -> Self {
        Self {
            input,
            pending_player_damage: 0.0,
            pending_knockback: DVec2::ZERO,
            damage_dealt: 0.0,
            kills: Vec::new(),
            spawned: 0,
            extracted: None,
            events: Vec::new(),
        }
    }

    pub fn player_position(&self) -> DVec2 {
        self.input.player.position()
    }

    pub fn into_output(self) -> TickOutput {
        TickOutput {
            kills: self.kills,
            damage_dealt: self.damage_dealt,
            spawned: self.spawned,
            player_damage: self.pending_player_damage,
            player_knockback: self.pending_knockback,
            extracted: self.extracted,
            events: self.events,
        }
    }
}
