//! Drone policy — the simple training-phase opponent.
//!
//! Holds a distance band, faces the player, and fires the occasional slow
//! shot. Deliberately beatable; its job is to make the player show their
//! habits.

use rand::Rng;

use soulbound_core::constants::*;

/// What the drone sees this tick.
#[derive(Debug, Clone, Copy)]
pub struct DroneContext {
    /// Signed horizontal distance, player center minus enemy center.
    pub dist_x: f32,
    pub abs_dist: f32,
    pub attack_cooldown: u32,
}

/// The drone's decision for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DronePlan {
    /// Horizontal acceleration toward/away from the player.
    pub drive: f32,
    pub face_right: bool,
    /// Fire a shot and take `DRONE_FIRE_COOLDOWN`.
    pub fire: bool,
}

/// Evaluate the drone policy for one tick.
pub fn evaluate(ctx: &DroneContext, rng: &mut impl Rng) -> DronePlan {
    let toward = if ctx.dist_x > 0.0 { 1.0 } else { -1.0 };

    let drive = if ctx.abs_dist > DRONE_FAR_DISTANCE {
        toward * DRONE_ACCEL
    } else if ctx.abs_dist < DRONE_NEAR_DISTANCE {
        -toward * DRONE_ACCEL
    } else {
        0.0
    };

    let fire = ctx.attack_cooldown == 0 && rng.gen::<f64>() < DRONE_FIRE_CHANCE;

    DronePlan {
        drive,
        face_right: ctx.dist_x > 0.0,
        fire,
    }
}
