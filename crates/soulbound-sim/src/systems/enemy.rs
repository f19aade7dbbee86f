//! Enemy controller system.
//!
//! Bridges the pure AI policies to the simulation: builds their context
//! from fighter and world state, then applies the returned plan as
//! velocity impulses, action starts, and projectile spawns.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use soulbound_boss_ai::drone::{self, DroneContext};
use soulbound_boss_ai::params::TacticalParams;
use soulbound_boss_ai::rules::{self, Mobility, TacticalContext};

use soulbound_core::constants::*;
use soulbound_core::entities::{Fighter, Projectile};
use soulbound_core::enums::{ActionState, ProjectileOwner};
use soulbound_core::types::{Position, Velocity};

use super::particles;

/// Run the training drone policy for one tick.
pub fn run_drone(enemy: &mut Fighter, player: &Fighter, world: &mut World, rng: &mut ChaCha8Rng) {
    let ctx = DroneContext {
        dist_x: player.center_x() - enemy.center_x(),
        abs_dist: player.distance_to(enemy),
        attack_cooldown: enemy.attack_cooldown,
    };
    let plan = drone::evaluate(&ctx, rng);

    enemy.vel.x += plan.drive;
    enemy.facing_right = plan.face_right;
    if plan.fire {
        world.spawn(Projectile::fired_from(
            ProjectileOwner::Enemy,
            enemy.pos,
            enemy.size,
            enemy.facing_right,
            DRONE_PROJECTILE_SPEED,
        ));
        enemy.attack_cooldown = DRONE_FIRE_COOLDOWN;
    }
}

/// Run the tactical boss policy.
///
/// The stalemate counter is tracked every tick; the rule table runs on
/// decision ticks scheduled from the profile's reaction time, or immediately
/// when a stalemate passes the threshold.
#[allow(clippy::too_many_arguments)]
pub fn run_boss(
    enemy: &mut Fighter,
    player: &Fighter,
    world: &mut World,
    rng: &mut ChaCha8Rng,
    params: &TacticalParams,
    tick: u64,
    next_decision_tick: &mut u64,
) {
    let low_motion =
        enemy.vel.x.abs() < STALEMATE_SPEED && enemy.action == ActionState::Idle;
    if low_motion {
        enemy.stalemate_ticks += 1;
    } else {
        enemy.stalemate_ticks = 0;
    }

    // A standoff past the threshold forces a decision through the gate.
    let forced = enemy.stalemate_ticks > STALEMATE_THRESHOLD;
    if tick < *next_decision_tick && !forced {
        return;
    }
    *next_decision_tick = tick + params.reaction_interval(rng);

    let ctx = TacticalContext {
        tick,
        dist_x: player.center_x() - enemy.center_x(),
        abs_dist: player.distance_to(enemy),
        player_y: player.pos.y,
        enemy_y: enemy.pos.y,
        enemy_grounded: enemy.grounded,
        enemy_action: enemy.action,
        enemy_attack_cooldown: enemy.attack_cooldown,
        enemy_dash_cooldown: enemy.dash_cooldown,
        stalemate_ticks: enemy.stalemate_ticks,
        player_attacking: player.action.is_attacking(),
        incoming_shot: incoming_shot(world, enemy),
    };
    let plan = rules::evaluate(&ctx, params, rng);

    if let Some(face_right) = plan.face_right {
        enemy.facing_right = face_right;
    }
    if plan.reset_stalemate {
        enemy.stalemate_ticks = 0;
    }

    match plan.mobility {
        Some(Mobility::Dash { vx }) => {
            enemy.vel.x = vx;
            enemy.action = ActionState::Dashing;
            enemy.dash_cooldown = DASH_COOLDOWN;
            particles::spawn_dash_trail(world, rng, enemy);
        }
        Some(Mobility::Hop { vy }) => {
            enemy.vel.y = vy;
            enemy.grounded = false;
            let (x, y) = (enemy.center_x(), enemy.pos.y + enemy.size.h);
            particles::spawn_dust(world, rng, x, y, &enemy.color);
        }
        None => {
            enemy.vel.x += plan.drive;
        }
    }

    if let Some(cooldown) = plan.melee {
        enemy.action = ActionState::Attacking {
            window: cooldown.saturating_sub(ENEMY_ATTACK_CLEAR),
        };
        enemy.attack_cooldown = cooldown;
    } else if let Some(cooldown) = plan.fire {
        world.spawn(Projectile::fired_from(
            ProjectileOwner::Enemy,
            enemy.pos,
            enemy.size,
            enemy.facing_right,
            BOSS_PROJECTILE_SPEED,
        ));
        enemy.attack_cooldown = cooldown;
    }
}

/// Whether an active player shot is inside the awareness window and closing.
fn incoming_shot(world: &World, enemy: &Fighter) -> bool {
    for (_entity, (proj, pos, vel)) in
        world.query::<(&Projectile, &Position, &Velocity)>().iter()
    {
        if proj.owner != ProjectileOwner::Player || !proj.active {
            continue;
        }
        let center = pos.x + proj.size.w / 2.0;
        let dx = enemy.center_x() - center;
        if dx.abs() < PROJECTILE_AWARENESS_RANGE && dx.signum() == vel.x.signum() {
            return true;
        }
    }
    false
}
