//! End-to-end scenarios and properties driven through the public API.

use hecs::{Entity, World};
use proptest::prelude::*;

use ashfall_sim::context::TickContext;
use ashfall_sim::core::commands::SimCommand;
use ashfall_sim::core::components::*;
use ashfall_sim::core::config::{CombatConfig, ExtractionConfig, SpawnerConfig};
use ashfall_sim::core::defs::{EnemyCatalog, ItemCatalog, WeaponInstance};
use ashfall_sim::core::enums::Owner;
use ashfall_sim::core::events::SimEvent;
use ashfall_sim::core::types::{PlayerPose, Transform, Velocity};
use ashfall_sim::systems::collision::{self, HitLedger};
use ashfall_sim::systems::extraction::{self, ExtractionZone};
use ashfall_sim::{ComponentStore, SimConfig, Simulation, TickInput};

const ITEMS_JSON: &str = r#"[
    {
        "id": "service_pistol",
        "behavior": "pistol",
        "baseStats": { "damage": 12, "range": 350, "fireRate": 3, "speed": 700 }
    },
    {
        "id": "spear",
        "behavior": "thrust",
        "baseStats": { "damage": 25, "range": 90, "fireRate": 1 }
    },
    {
        "id": "seeker_drone",
        "behavior": "drone_beam",
        "baseStats": { "damage": 6, "range": 300, "fireRate": 4, "speed": 450 },
        "orbitConfig": { "radius": 30, "speed": 2 }
    }
]"#;

const ENEMIES_JSON: &str = r#"[
    {
        "id": "husk",
        "stats": { "hp": 40, "speed": 70, "damage": 10, "mass": 3, "exp": 4 },
        "spawnRules": { "minWave": 0, "cost": 1 },
        "texture": "husk_walk"
    }
]"#;

fn sim() -> Simulation {
    Simulation::new(
        SimConfig::default(),
        ItemCatalog::from_json(ITEMS_JSON).unwrap(),
        EnemyCatalog::from_json(ENEMIES_JSON).unwrap(),
    )
}

fn equip(id: &str) -> SimCommand {
    let items = ItemCatalog::from_json(ITEMS_JSON).unwrap();
    SimCommand::EquipWeapon {
        weapon: WeaponInstance::from_def(items.get(id).unwrap()),
    }
}

fn at(now_ms: f64, dt_ms: f64, x: f64, y: f64) -> TickInput {
    TickInput::new(dt_ms, now_ms, PlayerPose::new(x, y))
}

fn target(world: &mut World, x: f64, y: f64, hp: f64) -> Entity {
    world.spawn((
        EnemyTag,
        Transform::at(x, y),
        Health::full(hp),
        Collider { radius: 14.0 },
    ))
}

fn shot(world: &mut World, x: f64, y: f64, value: f64, owner: Owner) -> Entity {
    world.spawn((
        ProjectileTag,
        Transform::at(x, y),
        Velocity::ZERO,
        Damage {
            value,
            owner_id: owner,
        },
        Collider { radius: 6.0 },
        Lifetime::new(1000.0),
    ))
}

#[test]
fn match_with_spawns_kills_and_extraction() {
    let mut sim = sim();
    let zone = sim.add_zone(0.0, 0.0, 60.0, 1500.0);
    sim.queue_commands([
        SimCommand::SetWave { wave: 2 },
        SimCommand::StartMatch,
        equip("service_pistol"),
        equip("seeker_drone"),
    ]);

    let mut spawned = 0;
    let mut kills = Vec::new();
    let mut now = 0.0;
    for _ in 0..600 {
        let out = sim.tick(&at(now, 16.0, 0.0, 0.0));
        spawned += out.spawned;
        kills.extend(out.kills);
        now += 16.0;
    }

    assert!(spawned > 0);
    assert!(!kills.is_empty(), "auto-fire should have killed something");
    assert!(kills.iter().all(|k| k.category == "husk_walk" && k.exp == 4.0));
    assert!(sim.world().query::<&LootTag>().iter().count() >= kills.len());

    sim.queue_command(SimCommand::OpenExtraction { zone });
    let mut extracted = None;
    for _ in 0..200 {
        let out = sim.tick(&at(now, 16.0, 0.0, 0.0));
        now += 16.0;
        if out.extracted.is_some() {
            extracted = out.extracted;
            break;
        }
    }
    assert_eq!(extracted, Some(zone));
}

#[test]
fn thrust_hitbox_and_drone_offsets() {
    let mut sim = sim();
    let caster = Stats {
        speed: 0.0,
        damage: 1.0,
        attack_range: 0.0,
        attack_speed: 0.0,
    };
    let items = ItemCatalog::from_json(ITEMS_JSON).unwrap();
    let source = ashfall_sim::weapons::FireSource {
        x: 100.0,
        y: 100.0,
        rotation: 0.0,
        owner: Owner::Player,
        siege: false,
    };

    let spear = WeaponInstance::from_def(items.get("spear").unwrap());
    let hitbox = sim.fire(&spear, source, &caster, None)[0];
    let t = sim.world().component::<Transform>(hitbox).unwrap();
    assert!((t.x - 160.0).abs() < 1e-9);
    assert!(sim.world().has_component::<Hitbox>(hitbox));

    let drone = WeaponInstance::from_def(items.get("seeker_drone").unwrap());
    let beam = sim.fire(&drone, source, &caster, None)[0];
    let t = sim.world().component::<Transform>(beam).unwrap();
    // Fired from the orbit slot beside the caster, perpendicular to the aim.
    assert!((t.x - 100.0).abs() < 1e-9);
    assert!((t.y - 130.0).abs() < 1e-9);
    assert!(sim.world().has_component::<ProjectileTag>(beam));

    let out = sim.tick(&at(0.0, 16.0, 0.0, 0.0));
    let fired = out
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::WeaponFired { .. }))
        .count();
    let recoils = out
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::Recoil { .. }))
        .count();
    assert_eq!(fired, 2);
    assert_eq!(recoils, 1, "only the ranged shot kicks");
}

#[test]
fn enemy_ranged_fire_never_hurts_enemies() {
    let mut world = World::new();
    let victim = target(&mut world, 0.0, 0.0, 50.0);
    for i in 0..10 {
        shot(&mut world, i as f64, 0.0, 25.0, Owner::Enemy);
    }

    let mut ctx = TickContext::new(at(0.0, 16.0, 1000.0, 1000.0));
    collision::run(
        &mut world,
        &mut HitLedger::default(),
        &CombatConfig::default(),
        &mut ctx,
        &mut Vec::new(),
    );

    assert_eq!(world.component::<Health>(victim).unwrap().current, 50.0);
    assert_eq!(ctx.damage_dealt, 0.0);
}

proptest! {
    #[test]
    fn health_only_drops_by_player_damage(
        batches in prop::collection::vec(
            prop::collection::vec((1u8..50, any::<bool>()), 0..8),
            1..10,
        )
    ) {
        let mut world = World::new();
        let enemy = target(&mut world, 0.0, 0.0, 100_000.0);
        let mut expected = 100_000.0;
        let mut previous = expected;

        for batch in batches {
            for &(value, from_player) in &batch {
                let owner = if from_player { Owner::Player } else { Owner::Enemy };
                shot(&mut world, 1.0, 0.0, value as f64, owner);
                if from_player {
                    expected -= value as f64;
                }
            }

            // Player far away so enemy bolts stay in flight.
            let mut ctx = TickContext::new(at(0.0, 16.0, 5000.0, 5000.0));
            collision::run(
                &mut world,
                &mut HitLedger::default(),
                &CombatConfig::default(),
                &mut ctx,
                &mut Vec::new(),
            );

            let current = world.component::<Health>(enemy).unwrap().current;
            prop_assert!(current <= previous);
            prop_assert_eq!(current, expected);
            previous = current;
        }
    }

    #[test]
    fn enemy_owned_damage_never_reaches_enemies(
        offsets in prop::collection::vec((-15.0f64..15.0, -15.0f64..15.0, 1.0f64..500.0), 1..20)
    ) {
        let mut world = World::new();
        let enemy = target(&mut world, 0.0, 0.0, 100.0);
        for (dx, dy, value) in offsets {
            shot(&mut world, dx, dy, value, Owner::Enemy);
        }

        let mut ctx = TickContext::new(at(0.0, 16.0, 5000.0, 5000.0));
        collision::run(
            &mut world,
            &mut HitLedger::default(),
            &CombatConfig::default(),
            &mut ctx,
            &mut Vec::new(),
        );

        prop_assert_eq!(world.component::<Health>(enemy).unwrap().current, 100.0);
    }

    #[test]
    fn spawn_interval_never_below_floor(wave in 0u32..10_000) {
        let config = SpawnerConfig::default();
        let interval = config.interval_for_wave(wave);
        prop_assert!(interval >= config.min_interval_ms);
        prop_assert!(interval <= config.base_interval_ms);
    }

    #[test]
    fn extraction_progress_stays_in_bounds(
        steps in prop::collection::vec((any::<bool>(), 0.0f64..500.0), 1..100)
    ) {
        let mut zone = ExtractionZone::new(0, 0.0, 0.0, 40.0, 3000.0);
        zone.open();
        let config = ExtractionConfig::default();

        for (inside, dt) in steps {
            let player = if inside { glam::DVec2::ZERO } else { glam::DVec2::new(200.0, 0.0) };
            extraction::run(std::slice::from_mut(&mut zone), player, dt, &config, &mut Vec::new());
            prop_assert!(zone.progress >= 0.0);
            prop_assert!(zone.progress <= zone.extract_time);
        }
    }
}
