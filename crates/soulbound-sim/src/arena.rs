//! Spawn factories for setting up each phase of a session.

use hecs::World;

use soulbound_core::constants::*;
use soulbound_core::entities::Fighter;
use soulbound_core::profile::BossProfile;

/// Spawn the player at their corner with full health.
pub fn spawn_player() -> Fighter {
    Fighter::spawn(PLAYER_SPAWN_X, PLAYER_MAX_HP, PLAYER_COLOR, true)
}

/// Spawn the training drone.
pub fn spawn_drone() -> Fighter {
    Fighter::spawn(ENEMY_SPAWN_X, DRONE_MAX_HP, DRONE_COLOR, false)
}

/// Spawn the boss, tinted with its profile color. Boss health is fixed;
/// profile stats scale behavior, not durability.
pub fn spawn_boss(profile: &BossProfile) -> Fighter {
    Fighter::spawn(ENEMY_SPAWN_X, BOSS_MAX_HP, &profile.stats.color_hex, false)
}

/// Remove every projectile and particle left over from the previous phase.
pub fn clear_transients(world: &mut World) {
    world.clear();
}
