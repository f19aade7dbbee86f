//! Simulation engine for SOULBOUND.
//!
//! Owns the fighters and the hecs world of transient entities, runs
//! systems at a fixed tick rate, and produces GameStateSnapshots for
//! the frontend.

pub mod arena;
pub mod engine;
pub mod systems;

pub use engine::SimulationEngine;
pub use soulbound_core as core;

#[cfg(test)]
mod tests;
