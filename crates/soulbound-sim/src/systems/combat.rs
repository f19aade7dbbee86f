//! Melee resolution.
//!
//! Player swing checks first, then the enemy swing. A landed hit consumes
//! the swing, so one press deals damage at most once.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use soulbound_core::constants::*;
use soulbound_core::entities::{Fighter, Projectile};
use soulbound_core::enums::{ActionState, ProjectileOwner};
use soulbound_core::telemetry::PlayerStats;
use soulbound_core::types::Position;

use super::particles;

#[allow(clippy::too_many_arguments)]
pub fn resolve_melee(
    player: &mut Fighter,
    enemy: &mut Fighter,
    world: &mut World,
    rng: &mut ChaCha8Rng,
    enemy_damage: f32,
    stats: &mut PlayerStats,
    recording: bool,
) {
    let mut bursts: Vec<(f32, f32, String)> = Vec::new();

    if player.action.is_attacking()
        && enemy.hp > 0.0
        && swing_connects(player, enemy, PLAYER_MELEE_RANGE)
    {
        let push = if player.facing_right { 1.0 } else { -1.0 };
        enemy.hp -= PLAYER_MELEE_DAMAGE;
        enemy.vel.x = push * PLAYER_MELEE_KNOCKBACK;
        enemy.vel.y = PLAYER_MELEE_POP;
        player.action = ActionState::Idle;
        bursts.push((enemy.center_x(), enemy.center_y(), enemy.color.clone()));
        if recording {
            stats.hits_landed += 1;
        }
    }

    // An enemy swing whiffs while one of its own shots is still passing
    // close by, so the player is never hit by melee and projectile at once.
    if enemy.action.is_attacking()
        && player.hp > 0.0
        && !own_shot_nearby(world, enemy)
        && swing_connects(enemy, player, ENEMY_MELEE_RANGE)
    {
        let push = if enemy.facing_right { 1.0 } else { -1.0 };
        player.hp -= enemy_damage;
        player.vel.x = push * ENEMY_MELEE_KNOCKBACK;
        player.vel.y = ENEMY_MELEE_POP;
        enemy.action = ActionState::Idle;
        bursts.push((player.center_x(), player.center_y(), player.color.clone()));
        if recording {
            stats.hits_taken += 1;
        }
    }

    for (x, y, color) in bursts {
        particles::spawn_burst(world, rng, x, y, &color);
    }
}

/// Whether a swing reaches the defender. The hit interval extends from the
/// attacker's leading edge in its facing direction only; nothing lands
/// behind the attacker's back.
fn swing_connects(attacker: &Fighter, defender: &Fighter, range: f32) -> bool {
    let (lo, hi) = if attacker.facing_right {
        let origin = attacker.pos.x + attacker.size.w;
        (origin, origin + range)
    } else {
        let origin = attacker.pos.x;
        (origin - range, origin)
    };
    hi >= defender.pos.x
        && lo <= defender.pos.x + defender.size.w
        && (defender.center_y() - attacker.center_y()).abs() < FIGHTER_HEIGHT
}

/// Whether an active enemy shot is within guard range of the enemy itself.
fn own_shot_nearby(world: &World, enemy: &Fighter) -> bool {
    for (_entity, (proj, pos)) in world.query::<(&Projectile, &Position)>().iter() {
        if proj.owner == ProjectileOwner::Enemy && proj.active {
            let center = pos.x + proj.size.w / 2.0;
            if (center - enemy.center_x()).abs() < PHANTOM_MELEE_GUARD_RANGE {
                return true;
            }
        }
    }
    false
}
