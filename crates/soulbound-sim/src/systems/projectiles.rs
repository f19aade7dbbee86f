//! Projectile flight and impact resolution.
//!
//! Advances every active projectile, deactivates on arena exit or impact,
//! and purges inactive projectiles the same tick so a spent shot is never
//! visible in a snapshot.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use soulbound_core::constants::*;
use soulbound_core::entities::{Fighter, Projectile};
use soulbound_core::enums::ProjectileOwner;
use soulbound_core::telemetry::PlayerStats;
use soulbound_core::types::{boxes_overlap, Position, Velocity};

use super::particles;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: &mut Fighter,
    enemy: &mut Fighter,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<Entity>,
    enemy_damage: f32,
    stats: &mut PlayerStats,
    recording: bool,
) {
    let mut trails: Vec<(f32, f32, String)> = Vec::new();
    let mut bursts: Vec<(f32, f32, String)> = Vec::new();

    for (_entity, (proj, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        if !proj.active {
            continue;
        }

        pos.x += vel.x;
        pos.y += vel.y;

        if pos.x + proj.size.w < 0.0 || pos.x > ARENA_WIDTH {
            proj.active = false;
            continue;
        }

        let (victim, damage) = match proj.owner {
            ProjectileOwner::Player => (&mut *enemy, PLAYER_PROJECTILE_DAMAGE),
            ProjectileOwner::Enemy => (&mut *player, enemy_damage),
        };

        if victim.hp > 0.0 && boxes_overlap(*pos, proj.size, victim.pos, victim.size) {
            victim.hp -= damage;
            // Only the player's shots push; enemy fire is pure chip damage.
            if proj.owner == ProjectileOwner::Player {
                victim.vel.x += vel.x.signum() * PROJECTILE_KNOCKBACK;
            }
            proj.active = false;
            bursts.push((victim.center_x(), victim.center_y(), victim.color.clone()));
            if recording {
                match proj.owner {
                    ProjectileOwner::Player => stats.hits_landed += 1,
                    ProjectileOwner::Enemy => stats.hits_taken += 1,
                }
            }
            continue;
        }

        let color = match proj.owner {
            ProjectileOwner::Player => &player.color,
            ProjectileOwner::Enemy => &enemy.color,
        };
        trails.push((
            pos.x + proj.size.w / 2.0,
            pos.y + proj.size.h / 2.0,
            color.clone(),
        ));
    }

    despawn_buffer.clear();
    for (entity, proj) in world.query_mut::<&Projectile>() {
        if !proj.active {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for (x, y, color) in trails {
        particles::spawn_trail(world, x, y, &color);
    }
    for (x, y, color) in bursts {
        particles::spawn_burst(world, rng, x, y, &color);
    }
}
