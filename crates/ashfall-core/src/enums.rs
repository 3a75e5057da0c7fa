//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Faction that produced a damage-carrying entity. Used only for friendly-fire exclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Owner {
    Enemy = 0,
    #[default]
    Player = 1,
}

/// Weapon behaviors the firing pipeline knows how to turn into entities.
///
/// Item definitions carry the behavior as a free-form string; anything that
/// does not parse into one of these is rejected at fire time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponBehavior {
    /// Wide arc hitbox placed in front of the caster.
    MeleeSweep,
    /// Narrow, longer-reaching hitbox.
    MeleeThrust,
    /// Single travelling bullet.
    PistolShot,
    /// Fast beam fired from an escort drone beside the caster.
    DroneBeam,
}

/// Extraction zone gate state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionState {
    #[default]
    Locked,
    Open,
}

/// Wave spawner run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnerState {
    #[default]
    Inactive,
    Active,
}

/// One of the four screen edges a spawn ring sits beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    North,
    East,
    South,
    West,
}

impl WeaponBehavior {
    /// Parse a data-table behavior string. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "melee_sweep" | "sweep" => Some(WeaponBehavior::MeleeSweep),
            "melee_thrust" | "thrust" => Some(WeaponBehavior::MeleeThrust),
            "pistol_shot" | "pistol" => Some(WeaponBehavior::PistolShot),
            "drone_beam" | "drone" => Some(WeaponBehavior::DroneBeam),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponBehavior::MeleeSweep => "melee_sweep",
            WeaponBehavior::MeleeThrust => "melee_thrust",
            WeaponBehavior::PistolShot => "pistol_shot",
            WeaponBehavior::DroneBeam => "drone_beam",
        }
    }

    pub fn is_melee(&self) -> bool {
        matches!(self, WeaponBehavior::MeleeSweep | WeaponBehavior::MeleeThrust)
    }
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::North,
        SpawnEdge::East,
        SpawnEdge::South,
        SpawnEdge::West,
    ];
}
