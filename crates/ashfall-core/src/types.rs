//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// World-space pose. x grows right, y grows down (screen space), rotation in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// Linear velocity in world units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Player pose supplied by the driver every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    /// Siege stance: boosts weapon damage and range.
    #[serde(default)]
    pub siege: bool,
}

/// Identifier of one weapon activation. Monotonic, never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttackId(pub u64);

impl Transform {
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Velocity of the given speed along an angle.
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        Self {
            x: angle.cos() * speed,
            y: angle.sin() * speed,
        }
    }

    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl PlayerPose {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            siege: false,
        }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl AttackId {
    /// Return the current id and advance the counter.
    pub fn allocate(&mut self) -> AttackId {
        let id = *self;
        self.0 += 1;
        id
    }
}
