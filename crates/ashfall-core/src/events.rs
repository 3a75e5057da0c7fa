//! One-way notifications emitted by the simulation for the renderer, audio and UI.

use serde::{Deserialize, Serialize};

use crate::enums::ExtractionState;

/// An enemy died. Consumed externally for score and drop decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillEvent {
    pub x: f64,
    pub y: f64,
    /// Texture or definition id of the dead entity.
    pub category: String,
    pub exp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Muzzle flash / swing at the caster.
    WeaponFired {
        item_id: String,
        x: f64,
        y: f64,
        angle: f64,
    },
    /// Recoil impulse for the player's ranged shot.
    Recoil { dx: f64, dy: f64 },
    EnemySpawned { def_id: String, x: f64, y: f64 },
    Kill(KillEvent),
    ZoneStateChanged { zone: u32, state: ExtractionState },
    /// A locked zone pushed the player back.
    ZoneBounced { zone: u32 },
    Extracted { zone: u32 },
}
