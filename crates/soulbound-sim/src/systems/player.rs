//! Player controller system.
//!
//! Reads the held-key state at tick start and applies movement, jumps, and
//! attack starts. Attack starts share one cooldown, melee winning when both
//! keys are held.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use soulbound_core::constants::*;
use soulbound_core::entities::{Fighter, Projectile};
use soulbound_core::enums::{ActionState, InputKey, ProjectileOwner};
use soulbound_core::telemetry::PlayerStats;

use super::particles;

/// Held state of the logical input keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub melee: bool,
    pub ranged: bool,
}

impl InputState {
    pub fn apply(&mut self, key: InputKey, pressed: bool) {
        match key {
            InputKey::Left => self.left = pressed,
            InputKey::Right => self.right = pressed,
            InputKey::Jump => self.jump = pressed,
            InputKey::Melee => self.melee = pressed,
            InputKey::Ranged => self.ranged = pressed,
        }
    }
}

/// Apply one tick of player input. Counters only accumulate while the
/// telemetry phase is recording.
pub fn run(
    player: &mut Fighter,
    world: &mut World,
    input: &InputState,
    rng: &mut ChaCha8Rng,
    stats: &mut PlayerStats,
    recording: bool,
) {
    if input.left {
        player.vel.x = (player.vel.x - PLAYER_ACCEL).max(-PLAYER_MAX_SPEED);
        player.facing_right = false;
    }
    if input.right {
        player.vel.x = (player.vel.x + PLAYER_ACCEL).min(PLAYER_MAX_SPEED);
        player.facing_right = true;
    }

    // Held jump re-fires on landing.
    if input.jump && player.grounded {
        player.vel.y = JUMP_FORCE;
        player.grounded = false;
        let (x, y) = (player.center_x(), player.pos.y + player.size.h);
        particles::spawn_dust(world, rng, x, y, &player.color);
        if recording {
            stats.jumps += 1;
        }
    }

    if player.attack_cooldown == 0 {
        if input.melee {
            player.action = ActionState::Attacking {
                window: PLAYER_MELEE_COOLDOWN - PLAYER_ATTACK_CLEAR,
            };
            player.attack_cooldown = PLAYER_MELEE_COOLDOWN;
            let x = if player.facing_right {
                player.pos.x + player.size.w
            } else {
                player.pos.x
            };
            let y = player.center_y();
            particles::spawn_dust(world, rng, x, y, &player.color);
            if recording {
                stats.melee_attacks += 1;
            }
        } else if input.ranged {
            world.spawn(Projectile::fired_from(
                ProjectileOwner::Player,
                player.pos,
                player.size,
                player.facing_right,
                PLAYER_PROJECTILE_SPEED,
            ));
            player.attack_cooldown = PLAYER_RANGED_COOLDOWN;
            if recording {
                stats.shots_fired += 1;
            }
        }
    }
}
