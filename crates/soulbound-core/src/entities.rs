//! Fighter state and hecs components for projectiles and particles.
//!
//! The two fighters are plain engine-owned structs; only the spawn-on-event,
//! decay-to-zero entities (projectiles, particles) live in the ECS world.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{ActionState, ProjectileOwner};
use crate::types::{Position, Size, Velocity};

/// One combatant (player or enemy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub pos: Position,
    pub size: Size,
    pub vel: Velocity,
    /// Body color hex, used for particles and rendering.
    pub color: String,
    pub hp: f32,
    pub max_hp: f32,
    pub action: ActionState,
    /// Shared melee/ranged cooldown (ticks, saturating at 0).
    pub attack_cooldown: u32,
    /// Ticks until the next dash is allowed (saturating at 0).
    pub dash_cooldown: u32,
    pub facing_right: bool,
    pub grounded: bool,
    /// Consecutive low-motion ticks, for stalemate detection.
    pub stalemate_ticks: u32,
}

impl Fighter {
    /// Spawn a fighter standing on the ground at the given x.
    pub fn spawn(x: f32, hp: f32, color: &str, facing_right: bool) -> Self {
        Self {
            pos: Position::new(x, GROUND_Y - FIGHTER_HEIGHT),
            size: Size::new(FIGHTER_WIDTH, FIGHTER_HEIGHT),
            vel: Velocity::default(),
            color: color.to_string(),
            hp,
            max_hp: hp,
            action: ActionState::Idle,
            attack_cooldown: 0,
            dash_cooldown: 0,
            facing_right,
            grounded: true,
            stalemate_ticks: 0,
        }
    }

    /// Horizontal center of the bounding box.
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.w / 2.0
    }

    /// Vertical center of the bounding box.
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.h / 2.0
    }

    /// Health clamped to zero for display.
    pub fn display_hp(&self) -> f32 {
        self.hp.max(0.0)
    }

    /// Center-to-center horizontal distance to another fighter.
    pub fn distance_to(&self, other: &Fighter) -> f32 {
        (self.center_x() - other.center_x()).abs()
    }
}

/// Projectile component. Lives alongside `Position` and `Velocity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: ProjectileOwner,
    pub size: Size,
    /// Cleared on arena exit or impact; purged the same tick.
    pub active: bool,
}

impl Projectile {
    /// Standard shot fired from a fighter's leading edge at mid-height.
    /// Returns the component bundle ready for `world.spawn`.
    pub fn fired_from(
        owner: ProjectileOwner,
        shooter_pos: Position,
        shooter_size: Size,
        facing_right: bool,
        speed: f32,
    ) -> (Projectile, Position, Velocity) {
        let x = if facing_right {
            shooter_pos.x + shooter_size.w
        } else {
            shooter_pos.x - PROJECTILE_SIZE
        };
        let y = shooter_pos.y + shooter_size.h / 2.0 - PROJECTILE_SIZE / 2.0;
        let vx = if facing_right { speed } else { -speed };
        (
            Projectile {
                owner,
                size: Size::new(PROJECTILE_SIZE, PROJECTILE_SIZE),
                active: true,
            },
            Position::new(x, y),
            Velocity::new(vx, 0.0),
        )
    }
}

/// Transient visual particle. Lives alongside `Position` and `Velocity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Remaining life in ticks; despawned at zero.
    pub life: f32,
    pub color: String,
    pub size: f32,
}
