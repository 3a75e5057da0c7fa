//! Death system: removes entities whose health reached zero.
//!
//! This is the only place health-based removal happens. Each death emits a
//! kill notification and may leave a loot marker behind.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use ashfall_core::components::{EnemyKind, Health, PlayerTag, SpriteConfig, Value};
use ashfall_core::config::CombatConfig;
use ashfall_core::events::{KillEvent, SimEvent};
use ashfall_core::types::Transform;

use crate::context::TickContext;
use crate::world::ComponentStore;
use crate::world_setup::spawn_loot;

struct Corpse {
    entity: Entity,
    x: f64,
    y: f64,
    category: String,
    value: Option<f64>,
}

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, combat: &CombatConfig, ctx: &mut TickContext) {
    let corpses: Vec<Corpse> = world
        .query::<(
            &Health,
            &Transform,
            Option<&SpriteConfig>,
            Option<&EnemyKind>,
            Option<&Value>,
            Option<&PlayerTag>,
        )>()
        .iter()
        .filter(|(_, (health, _, _, _, _, player))| health.is_dead() && player.is_none())
        .map(|(entity, (_, t, sprite, kind, value, _))| Corpse {
            entity,
            x: t.x,
            y: t.y,
            category: sprite
                .map(|s| s.texture_id.clone())
                .or_else(|| kind.map(|k| k.def_id.clone()))
                .unwrap_or_else(|| "unknown".to_string()),
            value: value.map(|v| v.amount),
        })
        .collect();

    let drop_chance = combat.loot_drop_chance.clamp(0.0, 1.0);
    for corpse in corpses {
        if !world.destroy_entity(corpse.entity) {
            continue;
        }

        let kill = KillEvent {
            x: corpse.x,
            y: corpse.y,
            category: corpse.category,
            exp: corpse.value.unwrap_or(0.0),
        };
        trace!(category = %kill.category, x = kill.x, y = kill.y, "enemy killed");

        if let Some(amount) = corpse.value {
            if rng.gen_bool(drop_chance) {
                spawn_loot(world, corpse.x, corpse.y, amount);
            }
        }

        ctx.events.push(SimEvent::Kill(kill.clone()));
        ctx.kills.push(kill);
    }
}
