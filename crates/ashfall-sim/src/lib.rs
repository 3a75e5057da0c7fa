//! Combat simulation engine for Ashfall.
//!
//! Owns the hecs ECS world, runs the per-tick system pipeline in a fixed
//! order, and returns a `TickOutput` outbox for the driver to apply.

pub mod context;
pub mod engine;
pub mod systems;
pub mod terrain;
pub mod weapons;
pub mod world;
pub mod world_setup;

pub use ashfall_core as core;
pub use context::{TickInput, TickOutput};
pub use engine::{SimConfig, Simulation};
pub use world::ComponentStore;
