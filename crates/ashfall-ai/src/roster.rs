//! Weighted enemy selection for the wave spawner.

use rand::seq::SliceRandom;
use rand::Rng;

use ashfall_core::defs::{EnemyCatalog, EnemyDef};

/// Definitions allowed to appear at `wave`.
pub fn eligible(catalog: &EnemyCatalog, wave: u32) -> Vec<&EnemyDef> {
    catalog
        .iter()
        .filter(|def| def.spawn_rules.min_wave <= wave && def.spawn_rules.weight > 0.0)
        .collect()
}

/// Pick one enemy definition for `wave`, weighted by `spawn_rules.weight`.
/// Returns `None` when nothing is eligible.
pub fn pick_enemy<'a, R: Rng + ?Sized>(
    catalog: &'a EnemyCatalog,
    wave: u32,
    rng: &mut R,
) -> Option<&'a EnemyDef> {
    let pool = eligible(catalog, wave);
    pool.choose_weighted(rng, |def| def.spawn_rules.weight)
        .ok()
        .copied()
}
