//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` plus the tick context.
//! They never call each other; the engine runs them in a fixed order.

pub mod collision;
pub mod death;
pub mod extraction;
pub mod lifetime;
pub mod movement;
pub mod targeting;
pub mod visual;
pub mod wave_spawner;
pub mod weapons;
