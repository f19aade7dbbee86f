//! Particle lifecycle: spawn helpers, per-tick decay, and despawn.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use soulbound_core::constants::*;
use soulbound_core::entities::{Fighter, Particle};
use soulbound_core::types::{Position, Velocity};

/// Particles spawned per impact burst.
const BURST_COUNT: usize = 12;

/// Lifetime of a projectile trail mote (ticks).
const TRAIL_LIFE: f32 = 8.0;

const TRAIL_SIZE: f32 = 3.0;

/// Advance particles and despawn the expired.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (particle, pos, vel)) in
        world.query_mut::<(&mut Particle, &mut Position, &Velocity)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        particle.life -= 1.0;
        if particle.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Radial burst at an impact point, tinted with the victim's color.
pub fn spawn_burst(world: &mut World, rng: &mut ChaCha8Rng, x: f32, y: f32, color: &str) {
    for _ in 0..BURST_COUNT {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(0.5..3.0);
        world.spawn((
            Particle {
                life: PARTICLE_LIFE_BASE + rng.gen_range(0.0..PARTICLE_LIFE_JITTER),
                color: color.to_string(),
                size: rng.gen_range(1.0..4.0),
            },
            Position::new(x, y),
            Velocity::new(angle.cos() * speed, angle.sin() * speed),
        ));
    }
}

/// Streak left behind a fighter entering a dash.
pub fn spawn_dash_trail(world: &mut World, rng: &mut ChaCha8Rng, fighter: &Fighter) {
    for _ in 0..DASH_PARTICLE_COUNT {
        let x = fighter.pos.x + rng.gen_range(0.0..fighter.size.w);
        let y = fighter.pos.y + rng.gen_range(0.0..fighter.size.h);
        world.spawn((
            Particle {
                life: DASH_PARTICLE_LIFE,
                color: fighter.color.clone(),
                size: DASH_PARTICLE_SIZE,
            },
            Position::new(x, y),
            Velocity::default(),
        ));
    }
}

/// Small dust kick at a fighter's feet on jump, or at the fist on a swing.
pub fn spawn_dust(world: &mut World, rng: &mut ChaCha8Rng, x: f32, y: f32, color: &str) {
    for _ in 0..4 {
        world.spawn((
            Particle {
                life: 10.0 + rng.gen_range(0.0..6.0),
                color: color.to_string(),
                size: 2.0,
            },
            Position::new(x + rng.gen_range(-6.0..6.0), y + rng.gen_range(-4.0..4.0)),
            Velocity::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.5..0.0)),
        ));
    }
}

/// Single mote marking a projectile's path.
pub fn spawn_trail(world: &mut World, x: f32, y: f32, color: &str) {
    world.spawn((
        Particle {
            life: TRAIL_LIFE,
            color: color.to_string(),
            size: TRAIL_SIZE,
        },
        Position::new(x, y),
        Velocity::default(),
    ));
}
