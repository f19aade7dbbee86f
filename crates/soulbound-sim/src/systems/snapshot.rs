//! Snapshot builder: flattens the world into the serializable view sent to
//! the frontend after every tick.

use hecs::World;

use soulbound_core::entities::{Fighter, Particle, Projectile};
use soulbound_core::enums::{GamePhase, ProjectileOwner};
use soulbound_core::events::GameEvent;
use soulbound_core::profile::BossProfile;
use soulbound_core::state::{
    FighterView, GameStateSnapshot, HudView, ParticleView, ProjectileView,
};
use soulbound_core::telemetry::PlayerStats;
use soulbound_core::types::{Position, SimTime};

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    player: &Fighter,
    enemy: &Fighter,
    profile: Option<&BossProfile>,
    stats: &PlayerStats,
    player_won: Option<bool>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let mut projectiles = Vec::new();
    for (_entity, (proj, pos)) in world.query::<(&Projectile, &Position)>().iter() {
        if proj.active {
            projectiles.push(ProjectileView {
                pos: *pos,
                size: proj.size,
                from_player: proj.owner == ProjectileOwner::Player,
            });
        }
    }

    let mut particles = Vec::new();
    for (_entity, (particle, pos)) in world.query::<(&Particle, &Position)>().iter() {
        particles.push(ParticleView {
            pos: *pos,
            color: particle.color.clone(),
            size: particle.size,
            life: particle.life,
        });
    }

    GameStateSnapshot {
        time: *time,
        phase,
        player: fighter_view(player),
        enemy: fighter_view(enemy),
        projectiles,
        particles,
        hud: HudView {
            boss_name: profile.map(|p| p.name.clone()),
            boss_title: profile.map(|p| p.title.clone()),
            boss_color: profile.map(|p| p.stats.color_hex.clone()),
            stats: stats.clone(),
            player_won,
        },
        events,
    }
}

fn fighter_view(fighter: &Fighter) -> FighterView {
    FighterView {
        pos: fighter.pos,
        size: fighter.size,
        vel: fighter.vel,
        color: fighter.color.clone(),
        hp: fighter.display_hp(),
        max_hp: fighter.max_hp,
        facing_right: fighter.facing_right,
        attacking: fighter.action.is_attacking(),
        dashing: fighter.action.is_dashing(),
        grounded: fighter.grounded,
    }
}
