//! Core types and definitions for the Ashfall combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, static definitions, events, configuration and constants.
//! It has no dependency on the ECS or on any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod defs;
pub mod enums;
pub mod events;
pub mod types;
