//! Tests for targeting decisions, scaling and roster selection.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ashfall_core::defs::{EnemyCatalog, EnemyDef, EnemyStats, SpawnRules};

use crate::roster::{eligible, pick_enemy};
use crate::scaling::{hp_multiplier, scale_for_wave, speed_multiplier};
use crate::targeting::{evaluate, ChaseContext, RangedCooldown};

fn ctx(position: DVec2, player: DVec2) -> ChaseContext {
    ChaseContext {
        position,
        player,
        speed: 100.0,
        attack_range: 0.0,
        now_ms: 0.0,
        ranged: None,
    }
}

fn enemy(id: &str, min_wave: u32, weight: f64) -> EnemyDef {
    EnemyDef {
        id: id.to_string(),
        stats: EnemyStats {
            hp: 40.0,
            speed: 50.0,
            damage: 5.0,
            mass: 1.0,
            exp: 2.0,
            attack_range: 0.0,
            attack_speed: 0.0,
            radius: None,
        },
        spawn_rules: SpawnRules {
            min_wave,
            cost: 1,
            weight,
        },
        texture: None,
        tint: None,
    }
}

// ---- Targeting ----

#[test]
fn test_melee_enemy_chases_at_full_speed() {
    let decision = evaluate(&ctx(DVec2::new(0.0, 0.0), DVec2::new(300.0, 400.0)));
    assert!((decision.velocity.speed() - 100.0).abs() < 1e-9);
    assert!((decision.velocity.x - 60.0).abs() < 1e-9);
    assert!((decision.velocity.y - 80.0).abs() < 1e-9);
    assert!(decision.fire_angle.is_none());
    assert!((decision.rotation - (400.0f64).atan2(300.0)).abs() < 1e-12);
}

#[test]
fn test_enemy_on_top_of_player_stops() {
    let decision = evaluate(&ctx(DVec2::new(5.0, 5.0), DVec2::new(5.0, 5.0)));
    assert_eq!(decision.velocity.speed(), 0.0);
}

#[test]
fn test_ranged_enemy_stops_and_fires_inside_range() {
    let mut c = ctx(DVec2::ZERO, DVec2::new(100.0, 0.0));
    c.attack_range = 150.0;
    c.now_ms = 5000.0;
    c.ranged = Some(RangedCooldown {
        last_attack_time: 3000.0,
        cooldown: 1000.0,
    });

    let decision = evaluate(&c);
    assert_eq!(decision.velocity.speed(), 0.0);
    assert_eq!(decision.fire_angle, Some(0.0));
}

#[test]
fn test_ranged_enemy_holds_fire_during_cooldown() {
    let mut c = ctx(DVec2::ZERO, DVec2::new(0.0, 100.0));
    c.attack_range = 150.0;
    c.now_ms = 3500.0;
    c.ranged = Some(RangedCooldown {
        last_attack_time: 3000.0,
        cooldown: 1000.0,
    });

    let decision = evaluate(&c);
    assert_eq!(decision.velocity.speed(), 0.0, "still holds position");
    assert!(decision.fire_angle.is_none());
}

#[test]
fn test_cooldown_boundary_is_strict() {
    let mut c = ctx(DVec2::ZERO, DVec2::new(10.0, 0.0));
    c.attack_range = 50.0;
    c.now_ms = 4000.0;
    c.ranged = Some(RangedCooldown {
        last_attack_time: 3000.0,
        cooldown: 1000.0,
    });
    assert!(evaluate(&c).fire_angle.is_none());

    c.now_ms = 4000.5;
    assert!(evaluate(&c).fire_angle.is_some());
}

#[test]
fn test_ranged_enemy_outside_range_chases() {
    let mut c = ctx(DVec2::ZERO, DVec2::new(400.0, 0.0));
    c.attack_range = 150.0;
    c.ranged = Some(RangedCooldown {
        last_attack_time: 0.0,
        cooldown: 0.0,
    });
    let decision = evaluate(&c);
    assert!((decision.velocity.x - 100.0).abs() < 1e-9);
    assert!(decision.fire_angle.is_none());
}

// ---- Scaling ----

#[test]
fn test_first_wave_unscaled() {
    assert_eq!(hp_multiplier(0), 1.0);
    assert_eq!(hp_multiplier(1), 1.0);
    assert_eq!(speed_multiplier(1), 1.0);
}

#[test]
fn test_scaling_grows_and_speed_caps() {
    let def = enemy("grunt", 0, 1.0);
    let w5 = scale_for_wave(&def.stats, 5);
    assert!((w5.hp - 40.0 * 1.6).abs() < 1e-9);
    assert!((w5.speed - 50.0 * 1.12).abs() < 1e-9);

    let w100 = scale_for_wave(&def.stats, 100);
    assert!(w100.hp > w5.hp);
    assert!((w100.speed - 50.0 * 1.6).abs() < 1e-9);
}

// ---- Roster ----

#[test]
fn test_roster_respects_min_wave() {
    let catalog = EnemyCatalog::new(vec![enemy("early", 0, 1.0), enemy("late", 4, 1.0)]).unwrap();
    let ids: Vec<&str> = eligible(&catalog, 2).iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["early"]);
    assert_eq!(eligible(&catalog, 4).len(), 2);
}

#[test]
fn test_roster_skips_zero_weight() {
    let catalog = EnemyCatalog::new(vec![enemy("never", 0, 0.0), enemy("always", 0, 2.0)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        assert_eq!(pick_enemy(&catalog, 1, &mut rng).unwrap().id, "always");
    }
}

#[test]
fn test_roster_empty_pool() {
    let catalog = EnemyCatalog::new(vec![enemy("late", 10, 1.0)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    assert!(pick_enemy(&catalog, 1, &mut rng).is_none());
    assert!(pick_enemy(&EnemyCatalog::default(), 1, &mut rng).is_none());
}

#[test]
fn test_roster_is_deterministic_per_seed() {
    let catalog = EnemyCatalog::new(vec![
        enemy("a", 0, 1.0),
        enemy("b", 0, 3.0),
        enemy("c", 0, 6.0),
    ])
    .unwrap();
    let picks = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..20)
            .map(|_| pick_enemy(&catalog, 1, &mut rng).unwrap().id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(99), picks(99));
}
