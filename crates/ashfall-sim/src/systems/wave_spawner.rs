//! Wave spawning system: one enemy per elapsed interval while active.
//!
//! The interval shrinks linearly with the wave number down to a floor.
//! Spawn points are drawn just outside the player's view on one of the four
//! edges and rejection-sampled against the terrain; when the retry budget is
//! spent the cycle is skipped. The wave number itself is advanced by the
//! caller.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use ashfall_ai::roster::pick_enemy;
use ashfall_core::config::SpawnerConfig;
use ashfall_core::defs::EnemyCatalog;
use ashfall_core::enums::{SpawnEdge, SpawnerState};
use ashfall_core::events::SimEvent;

use crate::terrain::Terrain;
use crate::world_setup::spawn_enemy;

/// Spawner state machine.
#[derive(Debug, Clone)]
pub struct WaveSpawner {
    pub state: SpawnerState,
    pub wave: u32,
    /// Milliseconds accumulated since the last spawn cycle.
    pub spawn_timer: f64,
    pub config: SpawnerConfig,
}

impl WaveSpawner {
    pub fn new(config: SpawnerConfig) -> Self {
        Self {
            state: SpawnerState::Inactive,
            wave: 0,
            spawn_timer: 0.0,
            config,
        }
    }

    /// Enter ACTIVE with a fresh timer (match start or reset).
    pub fn start(&mut self) {
        self.state = SpawnerState::Active;
        self.spawn_timer = 0.0;
        info!(wave = self.wave, "wave spawner active");
    }

    pub fn stop(&mut self) {
        self.state = SpawnerState::Inactive;
        self.spawn_timer = 0.0;
        info!("wave spawner inactive");
    }

    pub fn set_wave(&mut self, wave: u32) {
        self.wave = wave;
    }

    pub fn is_active(&self) -> bool {
        self.state == SpawnerState::Active
    }

    pub fn current_interval(&self) -> f64 {
        self.config.interval_for_wave(self.wave)
    }
}

impl Default for WaveSpawner {
    fn default() -> Self {
        Self::new(SpawnerConfig::default())
    }
}

/// Advance the spawn timer and spawn an enemy when the interval has elapsed.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut WaveSpawner,
    catalog: &EnemyCatalog,
    terrain: &dyn Terrain,
    view_center: DVec2,
    dt_ms: f64,
    events: &mut Vec<SimEvent>,
) -> Option<Entity> {
    if !spawner.is_active() {
        return None;
    }

    spawner.spawn_timer += dt_ms;
    if spawner.spawn_timer <= spawner.current_interval() {
        return None;
    }
    spawner.spawn_timer = 0.0;

    let Some(def) = pick_enemy(catalog, spawner.wave, rng) else {
        debug!(wave = spawner.wave, "no enemy eligible for wave, skipping spawn");
        return None;
    };

    let Some(point) = find_spawn_point(rng, &spawner.config, view_center, terrain) else {
        debug!(
            attempts = spawner.config.max_attempts,
            "no valid spawn point found, skipping spawn"
        );
        return None;
    };

    let entity = spawn_enemy(world, def, spawner.wave, point.x, point.y);
    events.push(SimEvent::EnemySpawned {
        def_id: def.id.clone(),
        x: point.x,
        y: point.y,
    });
    Some(entity)
}

/// Candidate point on the ring just beyond one edge of the view.
pub fn edge_point(rng: &mut ChaCha8Rng, config: &SpawnerConfig, center: DVec2, edge: SpawnEdge) -> DVec2 {
    let hw = config.view_half_width;
    let hh = config.view_half_height;
    let m = config.margin;
    match edge {
        SpawnEdge::North => DVec2::new(center.x + rng.gen_range(-hw..=hw), center.y - hh - m),
        SpawnEdge::South => DVec2::new(center.x + rng.gen_range(-hw..=hw), center.y + hh + m),
        SpawnEdge::East => DVec2::new(center.x + hw + m, center.y + rng.gen_range(-hh..=hh)),
        SpawnEdge::West => DVec2::new(center.x - hw - m, center.y + rng.gen_range(-hh..=hh)),
    }
}

/// Rejection-sample a ground point, at most `config.max_attempts` tries.
pub fn find_spawn_point(
    rng: &mut ChaCha8Rng,
    config: &SpawnerConfig,
    center: DVec2,
    terrain: &dyn Terrain,
) -> Option<DVec2> {
    for _ in 0..config.max_attempts {
        let edge = SpawnEdge::ALL[rng.gen_range(0..SpawnEdge::ALL.len())];
        let candidate = edge_point(rng, config, center, edge);
        if terrain.is_ground(candidate.x, candidate.y) {
            return Some(candidate);
        }
    }
    None
}
