//! Simulation engine: the combat core of the game.
//!
//! `Simulation` owns the hecs ECS world, processes driver commands, runs all
//! systems in a fixed order, and returns a `TickOutput` per tick. Completely
//! headless, so a given seed and input sequence reproduce the same run.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use ashfall_core::commands::SimCommand;
use ashfall_core::components::Stats;
use ashfall_core::config::{CombatConfig, ConfigError, ExtractionConfig, SpawnerConfig};
use ashfall_core::defs::{EnemyCatalog, ItemCatalog, WeaponInstance};
use ashfall_core::events::SimEvent;
use ashfall_core::types::AttackId;

use crate::context::{TickContext, TickInput, TickOutput};
use crate::systems;
use crate::systems::collision::HitLedger;
use crate::systems::extraction::ExtractionZone;
use crate::systems::wave_spawner::WaveSpawner;
use crate::terrain::{OpenGround, Terrain};
use crate::weapons::{self, FireRequest, FireSource};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub spawner: SpawnerConfig,
    pub combat: CombatConfig,
    pub extraction: ExtractionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawner: SpawnerConfig::default(),
            combat: CombatConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spawner.validate()?;
        self.combat.validate()
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct Simulation {
    world: World,
    rng: ChaCha8Rng,
    config: SimConfig,
    items: ItemCatalog,
    enemies: EnemyCatalog,
    terrain: Box<dyn Terrain>,
    spawner: WaveSpawner,
    zones: Vec<ExtractionZone>,
    next_zone_id: u32,
    loadout: Vec<WeaponInstance>,
    player_stats: Stats,
    hit_ledger: HitLedger,
    attack_ids: AttackId,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<Entity>,
    /// Events raised between ticks (commands, manual fire), flushed by the next tick.
    pending_events: Vec<SimEvent>,
    ticks: u64,
}

impl Simulation {
    /// Create a simulation over open ground with the given catalogs.
    pub fn new(config: SimConfig, items: ItemCatalog, enemies: EnemyCatalog) -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawner: WaveSpawner::new(config.spawner.clone()),
            config,
            items,
            enemies,
            terrain: Box::new(OpenGround),
            zones: Vec::new(),
            next_zone_id: 0,
            loadout: Vec::new(),
            player_stats: Stats {
                speed: 0.0,
                damage: 1.0,
                attack_range: 0.0,
                attack_speed: 0.0,
            },
            hit_ledger: HitLedger::default(),
            attack_ids: AttackId::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            pending_events: Vec::new(),
            ticks: 0,
        }
    }

    /// Replace the ground-validity query used for spawn placement.
    pub fn with_terrain(mut self, terrain: impl Terrain + 'static) -> Self {
        self.terrain = Box::new(terrain);
        self
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Register a locked extraction zone and return its id.
    pub fn add_zone(&mut self, x: f64, y: f64, radius: f64, extract_time: f64) -> u32 {
        let id = self.next_zone_id;
        self.next_zone_id += 1;
        self.zones.push(ExtractionZone::new(id, x, y, radius, extract_time));
        id
    }

    /// Fire a weapon on behalf of the driver, outside the auto-fire loop.
    ///
    /// Ignores the weapon cooldown. Presentation events are reported by the
    /// next tick. An unknown item or behavior spawns nothing.
    pub fn fire(
        &mut self,
        weapon: &WeaponInstance,
        source: FireSource,
        caster: &Stats,
        target: Option<DVec2>,
    ) -> Vec<Entity> {
        let request = FireRequest {
            weapon,
            source,
            caster_damage: caster.damage,
            target,
        };
        weapons::fire(
            &mut self.world,
            &self.items,
            &self.config.combat,
            &mut self.attack_ids,
            &request,
            &mut self.pending_events,
        )
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self, input: &TickInput) -> TickOutput {
        let input = sanitize(*input);
        let dt = input.dt_ms;

        self.process_commands();

        let mut ctx = TickContext::new(input);
        ctx.events.append(&mut self.pending_events);

        if systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &self.enemies,
            self.terrain.as_ref(),
            ctx.player_position(),
            dt,
            &mut ctx.events,
        )
        .is_some()
        {
            ctx.spawned += 1;
        }

        systems::targeting::run(&mut self.world, &mut ctx);
        systems::movement::run(&mut self.world, dt);
        systems::movement::apply_knockback(
            &mut self.world,
            dt,
            self.config.combat.knockback_decay_per_sec,
        );
        // Flashes started by this tick's hits keep their full duration in the output.
        systems::visual::run(&mut self.world, dt);

        systems::weapons::run(
            &mut self.world,
            &mut self.loadout,
            &self.items,
            &self.config.combat,
            &self.player_stats,
            &mut self.attack_ids,
            &mut ctx,
        );
        systems::collision::run(
            &mut self.world,
            &mut self.hit_ledger,
            &self.config.combat,
            &mut ctx,
            &mut self.despawn_buffer,
        );
        systems::death::run(&mut self.world, &mut self.rng, &self.config.combat, &mut ctx);

        systems::lifetime::run(&mut self.world, dt, &mut self.despawn_buffer);

        let player = ctx.player_position();
        let report = systems::extraction::run(
            &mut self.zones,
            player,
            dt,
            &self.config.extraction,
            &mut ctx.events,
        );
        ctx.extracted = report.extracted;
        ctx.pending_knockback += report.bounce;

        self.hit_ledger.prune(&self.world);
        self.ticks += 1;

        ctx.into_output()
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for drivers that place entities directly.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn spawner(&self) -> &WaveSpawner {
        &self.spawner
    }

    pub fn zones(&self) -> &[ExtractionZone] {
        &self.zones
    }

    pub fn zone(&self, id: u32) -> Option<&ExtractionZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    pub fn loadout(&self) -> &[WeaponInstance] {
        &self.loadout
    }

    pub fn player_stats(&self) -> &Stats {
        &self.player_stats
    }

    /// Get a read-only reference to the melee hit ledger.
    #[cfg(test)]
    pub fn hit_ledger(&self) -> &HitLedger {
        &self.hit_ledger
    }

    /// Replace the player's caster stats (level-ups are applied by the driver).
    pub fn set_player_stats(&mut self, stats: Stats) {
        self.player_stats = stats;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single driver command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::StartMatch => self.spawner.start(),
            SimCommand::StopMatch => self.spawner.stop(),
            SimCommand::SetWave { wave } => {
                debug!(wave, "wave set");
                self.spawner.set_wave(wave);
            }
            SimCommand::EquipWeapon { weapon } => {
                if self.items.get(&weapon.item_id).is_none() && weapon.fallback.is_none() {
                    warn!(item = %weapon.item_id, "cannot equip unknown item");
                    return;
                }
                self.loadout.push(weapon);
            }
            SimCommand::UnequipAll => self.loadout.clear(),
            SimCommand::OpenExtraction { zone } => self.set_zone_open(zone, true),
            SimCommand::OpenAllExtraction => {
                let ids: Vec<u32> = self.zones.iter().map(|zone| zone.id).collect();
                for id in ids {
                    self.set_zone_open(id, true);
                }
            }
            SimCommand::LockExtraction { zone } => self.set_zone_open(zone, false),
        }
    }

    fn set_zone_open(&mut self, id: u32, open: bool) {
        let Some(zone) = self.zones.iter_mut().find(|zone| zone.id == id) else {
            warn!(zone = id, "no extraction zone with this id");
            return;
        };
        let changed = if open { zone.open() } else { zone.lock() };
        if changed {
            self.pending_events.push(SimEvent::ZoneStateChanged {
                zone: id,
                state: zone.state,
            });
        }
    }
}

/// A tick never runs backwards or on a non-finite step.
fn sanitize(mut input: TickInput) -> TickInput {
    if !input.dt_ms.is_finite() || input.dt_ms < 0.0 {
        warn!(dt_ms = input.dt_ms, "invalid tick delta, treating as zero");
        input.dt_ms = 0.0;
    }
    input
}
