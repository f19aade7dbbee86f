//! Systems run by the engine each tick.
//!
//! Fighters are plain engine-owned state passed in by reference; the hecs
//! world carries only projectiles and particles. Systems hold no state of
//! their own.

pub mod combat;
pub mod enemy;
pub mod particles;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod telemetry;
