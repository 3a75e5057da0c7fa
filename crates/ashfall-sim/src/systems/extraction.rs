//! Extraction zones: a per-zone LOCKED/OPEN gate with a dwell timer.
//!
//! An open zone fills while the player stands in it and drains at
//! `decay_mult` times the fill rate otherwise. A locked zone pushes the
//! player back out and tracks no progress.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::info;

use ashfall_core::config::ExtractionConfig;
use ashfall_core::enums::ExtractionState;
use ashfall_core::events::SimEvent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionZone {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Dwell time needed to extract (milliseconds).
    pub extract_time: f64,
    pub state: ExtractionState,
    /// Always within [0, extract_time].
    pub progress: f64,
    announced: bool,
}

/// What the zones did to the player this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoneReport {
    pub extracted: Option<u32>,
    /// Summed outward push from locked zones.
    pub bounce: DVec2,
}

impl ExtractionZone {
    pub fn new(id: u32, x: f64, y: f64, radius: f64, extract_time: f64) -> Self {
        Self {
            id,
            x,
            y,
            radius,
            extract_time,
            state: ExtractionState::Locked,
            progress: 0.0,
            announced: false,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn contains(&self, point: DVec2) -> bool {
        self.center().distance_squared(point) <= self.radius * self.radius
    }

    pub fn is_complete(&self) -> bool {
        self.state == ExtractionState::Open && self.progress >= self.extract_time
    }

    /// Returns true if the state changed.
    pub fn open(&mut self) -> bool {
        if self.state == ExtractionState::Open {
            return false;
        }
        self.state = ExtractionState::Open;
        info!(zone = self.id, "extraction zone open");
        true
    }

    /// Returns true if the state changed. Locking discards progress.
    pub fn lock(&mut self) -> bool {
        if self.state == ExtractionState::Locked {
            return false;
        }
        self.state = ExtractionState::Locked;
        self.progress = 0.0;
        self.announced = false;
        info!(zone = self.id, "extraction zone locked");
        true
    }
}

/// Advance every zone by `dt_ms` against the player position.
pub fn run(
    zones: &mut [ExtractionZone],
    player: DVec2,
    dt_ms: f64,
    config: &ExtractionConfig,
    events: &mut Vec<SimEvent>,
) -> ZoneReport {
    let mut report = ZoneReport::default();

    for zone in zones.iter_mut() {
        let inside = zone.contains(player);
        match zone.state {
            ExtractionState::Open => {
                zone.progress = if inside {
                    (zone.progress + dt_ms).min(zone.extract_time)
                } else {
                    (zone.progress - dt_ms * config.decay_mult).max(0.0)
                };

                if inside && zone.is_complete() {
                    report.extracted.get_or_insert(zone.id);
                    if !zone.announced {
                        zone.announced = true;
                        info!(zone = zone.id, "player extracted");
                        events.push(SimEvent::Extracted { zone: zone.id });
                    }
                }
            }
            ExtractionState::Locked => {
                if inside {
                    let outward = (player - zone.center())
                        .try_normalize()
                        .unwrap_or(DVec2::X);
                    report.bounce += outward * config.bounce_force;
                    events.push(SimEvent::ZoneBounced { zone: zone.id });
                }
            }
        }
    }

    report
}
