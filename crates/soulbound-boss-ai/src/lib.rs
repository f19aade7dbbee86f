//! Enemy AI policies for SOULBOUND.
//!
//! Pure functions that compute per-tick decisions for the enemy fighter
//! from plain data. No ECS dependency, and every probability roll goes
//! through an injected `Rng`, so each rule is unit-testable with a seeded
//! source.

pub mod drone;
pub mod params;
pub mod rules;
