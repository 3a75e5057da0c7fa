//! Enemy AI for Ashfall.
//!
//! Pure decision functions for pursuit, ranged fire, wave-based stat scaling
//! and roster selection. No ECS dependency; operates on plain data.

pub mod roster;
pub mod scaling;
pub mod targeting;

pub use ashfall_core as core;

#[cfg(test)]
mod tests;
