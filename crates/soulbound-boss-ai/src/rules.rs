//! Tactical policy — a prioritized rule table for the boss fight.
//!
//! Each rule is a pure function `(context, params, rng) -> Option<...>`,
//! evaluated in a fixed order. The first mobility rule that commits the
//! enemy to a dash or hop short-circuits the later mobility rules;
//! positioning and attack selection then run on top of that commitment.
//! Cooldowns prevent conflicting commitments across ticks.

use rand::Rng;

use soulbound_core::constants::*;
use soulbound_core::enums::{ActionState, MovementStyle, PreferredDistance};

use crate::params::TacticalParams;

/// Snapshot of everything the tactical policy is allowed to see this tick.
#[derive(Debug, Clone)]
pub struct TacticalContext {
    pub tick: u64,
    /// Signed horizontal distance, player center minus enemy center.
    pub dist_x: f32,
    /// Absolute horizontal distance between centers.
    pub abs_dist: f32,
    /// Top edges, for aerial reads.
    pub player_y: f32,
    pub enemy_y: f32,
    pub enemy_grounded: bool,
    pub enemy_action: ActionState,
    pub enemy_attack_cooldown: u32,
    pub enemy_dash_cooldown: u32,
    pub stalemate_ticks: u32,
    /// Player swing currently able to connect.
    pub player_attacking: bool,
    /// An active player projectile is inside the awareness window and closing.
    pub incoming_shot: bool,
}

impl TacticalContext {
    /// Direction sign toward the player.
    fn toward(&self) -> f32 {
        if self.dist_x > 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    fn can_dash(&self) -> bool {
        self.enemy_dash_cooldown == 0 && !self.enemy_action.is_dashing()
    }
}

/// A mobility commitment produced by at most one rule per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mobility {
    /// Set vx to this impulse and enter the dashing state.
    Dash { vx: f32 },
    /// Set vy to this impulse and leave the ground.
    Hop { vy: f32 },
}

/// The full decision for one tick, applied by the simulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TacticalPlan {
    /// New facing, unless mid-dash.
    pub face_right: Option<bool>,
    pub mobility: Option<Mobility>,
    /// Horizontal acceleration from positioning.
    pub drive: f32,
    /// Start a melee swing with this cooldown.
    pub melee: Option<u32>,
    /// Fire a projectile and take this cooldown.
    pub fire: Option<u32>,
    /// The stalemate breaker fired; zero the counter.
    pub reset_stalemate: bool,
}

/// Whether the stalemate override forces an action this tick.
pub fn stalemate_forced(ctx: &TacticalContext) -> bool {
    ctx.stalemate_ticks > STALEMATE_THRESHOLD
}

/// Evaluate the rule table for one gated tick.
pub fn evaluate(
    ctx: &TacticalContext,
    params: &TacticalParams,
    rng: &mut impl Rng,
) -> TacticalPlan {
    let mut plan = TacticalPlan::default();

    // 1. Facing: always track the player unless mid-dash.
    if !ctx.enemy_action.is_dashing() {
        plan.face_right = Some(ctx.dist_x > 0.0);
    }

    // 2-6. Mobility rules, first commitment wins.
    let mut mobility =
        defensive_reflex(ctx, rng).or_else(|| projectile_evasion(ctx, params));
    if stalemate_forced(ctx) {
        if mobility.is_none() {
            mobility = stalemate_breaker(ctx, rng);
        }
        plan.reset_stalemate = true;
    }
    plan.mobility = mobility;

    // 7. Positioning (may add the long-range closing dash).
    if plan.mobility.is_none() && !ctx.enemy_action.is_dashing() {
        let (drive, closing_dash) = positioning(ctx, params);
        plan.drive = drive;
        plan.mobility = closing_dash;
    }

    // 8. Attack selection.
    if plan.mobility.is_none() && !ctx.enemy_action.is_dashing() {
        attack_selection(ctx, params, rng, &mut plan);
    }

    // 9. Aerial tactics.
    if plan.mobility.is_none() && ctx.enemy_grounded {
        plan.mobility = aerial_tactics(ctx, params, rng);
    }

    plan
}

/// Rule: the player is swinging within melee pressure range and the enemy
/// has not committed to anything — probabilistically back-dash, cross-up,
/// or hop away.
pub fn defensive_reflex(ctx: &TacticalContext, rng: &mut impl Rng) -> Option<Mobility> {
    let under_pressure = ctx.player_attacking
        && ctx.abs_dist < PRESSURE_RANGE
        && ctx.enemy_action == ActionState::Idle;
    if !under_pressure || !ctx.can_dash() {
        return None;
    }

    let roll: f64 = rng.gen();
    if roll < 0.3 {
        Some(Mobility::Dash {
            vx: -ctx.toward() * DASH_SPEED,
        })
    } else if roll < 0.5 {
        // Cross-up: dash through the player instead of away.
        Some(Mobility::Dash {
            vx: ctx.toward() * DASH_SPEED,
        })
    } else if roll < 0.7 {
        Some(Mobility::Hop {
            vy: JUMP_FORCE * DEFENSIVE_HOP_FACTOR,
        })
    } else {
        None
    }
}

/// Rule: an incoming player shot is closing — dash through it if the style
/// favors dashing, otherwise hop over it.
pub fn projectile_evasion(ctx: &TacticalContext, params: &TacticalParams) -> Option<Mobility> {
    if !ctx.incoming_shot {
        return None;
    }
    if params.movement_style == MovementStyle::DashHeavy && ctx.can_dash() {
        Some(Mobility::Dash {
            vx: ctx.toward() * DASH_SPEED,
        })
    } else if ctx.enemy_grounded {
        Some(Mobility::Hop { vy: JUMP_FORCE })
    } else {
        None
    }
}

/// Rule: forced out of a stalemate — random dash or hop.
pub fn stalemate_breaker(ctx: &TacticalContext, rng: &mut impl Rng) -> Option<Mobility> {
    let roll: f64 = rng.gen();
    if roll < 0.5 && ctx.can_dash() {
        let dir = if rng.gen::<f64>() > 0.5 { 1.0 } else { -1.0 };
        Some(Mobility::Dash {
            vx: dir * DASH_SPEED,
        })
    } else if ctx.enemy_grounded {
        Some(Mobility::Hop { vy: JUMP_FORCE })
    } else {
        None
    }
}

/// Rule: drive toward or away from the oscillating target band, biased by
/// aggression. A dash-heavy style may open with a long-range closing dash.
pub fn positioning(ctx: &TacticalContext, params: &TacticalParams) -> (f32, Option<Mobility>) {
    let target = params.target_distance(ctx.tick);
    let bias = params.chase_bias();
    let speed_mod = params.speed_multiplier
        * if ctx.enemy_action.is_dashing() {
            DASH_DRIVE_FACTOR
        } else {
            1.0
        };

    if ctx.abs_dist > target - bias {
        let drive = ctx.toward() * BOSS_DRIVE_ACCEL * speed_mod;
        let closing_dash = if params.movement_style == MovementStyle::DashHeavy
            && ctx.abs_dist > CLOSING_DASH_RANGE
            && ctx.can_dash()
        {
            Some(Mobility::Dash {
                vx: ctx.toward() * CLOSING_DASH_SPEED,
            })
        } else {
            None
        };
        (drive, closing_dash)
    } else if ctx.abs_dist < target - BAND_HYSTERESIS - bias {
        (-ctx.toward() * BOSS_DRIVE_ACCEL * speed_mod, None)
    } else {
        (0.0, None)
    }
}

/// Rule: melee inside reach, otherwise a probabilistic shot when roughly at
/// the preferred distance (or always eligible for far-preferring bosses).
pub fn attack_selection(
    ctx: &TacticalContext,
    params: &TacticalParams,
    rng: &mut impl Rng,
    plan: &mut TacticalPlan,
) {
    if ctx.enemy_attack_cooldown > 0 || ctx.enemy_action.is_dashing() {
        return;
    }

    if ctx.abs_dist < BOSS_MELEE_REACH {
        plan.melee = Some(params.melee_cooldown());
        return;
    }

    let target = params.target_distance(ctx.tick);
    let in_position = (ctx.abs_dist - target).abs() < IN_POSITION_WINDOW;
    if params.projectile_rate > PROJECTILE_RATE_FLOOR
        && (in_position || params.preferred_distance == PreferredDistance::Far)
        && rng.gen::<f64>() < f64::from(params.projectile_rate) * PROJECTILE_RATE_SCALE
    {
        plan.fire = Some(params.ranged_cooldown());
    }
}

/// Rule: aerial styles hop at random; any style hops to punish a player
/// hanging close overhead.
pub fn aerial_tactics(
    ctx: &TacticalContext,
    params: &TacticalParams,
    rng: &mut impl Rng,
) -> Option<Mobility> {
    if params.movement_style == MovementStyle::Aerial && rng.gen::<f64>() < AERIAL_HOP_CHANCE {
        return Some(Mobility::Hop { vy: JUMP_FORCE });
    }
    if ctx.player_y < ctx.enemy_y - PUNISH_HEIGHT && ctx.abs_dist < PUNISH_RANGE {
        return Some(Mobility::Hop {
            vy: JUMP_FORCE * PUNISH_HOP_FACTOR,
        });
    }
    None
}
