//! Hit-flash countdown. Cosmetic only.

use hecs::World;

use ashfall_core::components::VisualEffect;

pub fn run(world: &mut World, dt_ms: f64) {
    for (_entity, effect) in world.query_mut::<&mut VisualEffect>() {
        if effect.flash_timer > 0.0 {
            effect.flash_timer = (effect.flash_timer - dt_ms).max(0.0);
        }
    }
}
