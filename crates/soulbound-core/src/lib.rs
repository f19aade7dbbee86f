//! Core types and definitions for the SOULBOUND combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! fighter/projectile/particle data, telemetry, boss profiles, commands,
//! events, snapshots, and constants. It has no dependency on any runtime
//! framework.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod profile;
pub mod state;
pub mod telemetry;
pub mod types;
