//! Boss profile adapter.
//!
//! Maps an externally supplied `BossProfile` into the numeric parameters the
//! tactical policy consumes. The adapter also supplies the deterministic
//! fallback, so the policy never runs with undefined parameters.

use rand::Rng;

use soulbound_core::constants::*;
use soulbound_core::enums::{AggressionLevel, MovementStyle, PreferredDistance};
use soulbound_core::profile::BossProfile;

/// Tactical parameters consumed by the rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct TacticalParams {
    pub preferred_distance: PreferredDistance,
    pub movement_style: MovementStyle,
    pub aggression_level: AggressionLevel,
    pub speed_multiplier: f32,
    /// Base reaction interval in ticks (jitter is added per decision).
    pub reaction_time: u32,
    pub projectile_rate: f32,
    pub damage_multiplier: f32,
}

impl TacticalParams {
    /// Adapt a boss profile into controller parameters.
    pub fn from_profile(profile: &BossProfile) -> Self {
        Self {
            preferred_distance: profile.tactics.preferred_distance,
            movement_style: profile.tactics.movement_style,
            aggression_level: profile.tactics.aggression_level,
            speed_multiplier: profile.stats.speed_multiplier,
            reaction_time: profile.stats.reaction_time,
            projectile_rate: profile.stats.projectile_rate,
            damage_multiplier: profile.stats.damage_multiplier,
        }
    }

    /// Parameters of the fixed fallback profile.
    pub fn fallback() -> Self {
        Self::from_profile(&BossProfile::fallback())
    }

    /// Numeric distance band for the preferred-distance category.
    pub fn base_target_distance(&self) -> f32 {
        match self.preferred_distance {
            PreferredDistance::Close => TARGET_DISTANCE_CLOSE,
            PreferredDistance::Mid => TARGET_DISTANCE_MID,
            PreferredDistance::Far => TARGET_DISTANCE_FAR,
        }
    }

    /// Target distance at a given tick: the base band oscillated
    /// sinusoidally for unpredictability.
    pub fn target_distance(&self, tick: u64) -> f32 {
        let oscillation =
            (tick as f32 / OSCILLATION_PERIOD).sin() * OSCILLATION_AMPLITUDE;
        self.base_target_distance() + oscillation
    }

    /// Inward/outward bias on the band: rush-down closes in, defensive
    /// backs off.
    pub fn chase_bias(&self) -> f32 {
        match self.aggression_level {
            AggressionLevel::RushDown => CHASE_BIAS,
            AggressionLevel::Defensive => -CHASE_BIAS,
            AggressionLevel::Balanced => 0.0,
        }
    }

    pub fn melee_cooldown(&self) -> u32 {
        match self.aggression_level {
            AggressionLevel::RushDown => BOSS_MELEE_COOLDOWN_RUSH,
            _ => BOSS_MELEE_COOLDOWN,
        }
    }

    pub fn ranged_cooldown(&self) -> u32 {
        match self.aggression_level {
            AggressionLevel::RushDown => BOSS_RANGED_COOLDOWN_RUSH,
            _ => BOSS_RANGED_COOLDOWN,
        }
    }

    /// Effective reaction interval for this decision: the profile's base
    /// reaction time plus small random jitter, never below one tick.
    pub fn reaction_interval(&self, rng: &mut impl Rng) -> u64 {
        let base = self.reaction_time.max(1) as f64;
        let jitter: f64 = rng.gen_range(0.0..REACTION_JITTER);
        (base + jitter).floor().max(1.0) as u64
    }
}
