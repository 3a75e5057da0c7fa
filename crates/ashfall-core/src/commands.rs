//! Driver commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::defs::WeaponInstance;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Match control ---
    /// Activate the wave spawner (match start or reset).
    StartMatch,
    /// Return the wave spawner to inactive.
    StopMatch,
    /// Set the difficulty counter. Wave progression is gameplay policy owned by the caller.
    SetWave { wave: u32 },

    // --- Loadout ---
    EquipWeapon { weapon: WeaponInstance },
    UnequipAll,

    // --- Extraction ---
    OpenExtraction { zone: u32 },
    OpenAllExtraction,
    LockExtraction { zone: u32 },
}
