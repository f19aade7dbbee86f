//! Headless application shell for SOULBOUND.
//!
//! Wires the simulation engine to a fixed-rate game loop thread, the
//! profile generator boundary, and the snapshot channels a frontend
//! would subscribe to.

pub mod game_loop;
pub mod generator;
pub mod state;

pub use soulbound_core as core;
