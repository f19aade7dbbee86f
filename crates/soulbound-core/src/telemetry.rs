//! Training-phase telemetry.
//!
//! Counters accumulate during TRAINING only, are handed off read-only when
//! the phase completes, and reset on restart.

use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// Per-session behavioral counters, all monotonically non-decreasing while
/// training runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub jumps: u32,
    pub melee_attacks: u32,
    pub shots_fired: u32,
    /// Running sum of center-to-center distance, for later averaging.
    pub distance_sum: f64,
    pub frames_recorded: u32,
    /// Ticks spent moving toward the enemy.
    pub aggression_ticks: u32,
    /// Ticks spent moving away from the enemy.
    pub retreat_ticks: u32,
    pub hits_landed: u32,
    pub hits_taken: u32,
    /// Ticks spent airborne.
    pub air_ticks: u32,
}

/// Derived metrics handed to the profile generator collaborator.
///
/// All values are finite even for degenerate telemetry: a zero frame count
/// is substituted with 1 before division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    /// Average center-to-center distance held (pixels).
    pub avg_distance: f64,
    /// Fraction of recorded ticks spent closing in.
    pub aggression_ratio: f64,
    /// Fraction of recorded ticks spent backing off.
    pub retreat_ratio: f64,
    pub jumps_per_sec: f64,
    pub melee_per_sec: f64,
    pub shots_per_sec: f64,
    pub air_ticks: u32,
}

impl ProfileMetrics {
    pub fn from_stats(stats: &PlayerStats) -> Self {
        let frames = f64::from(stats.frames_recorded).max(1.0);
        let seconds = if stats.frames_recorded == 0 {
            1.0
        } else {
            f64::from(stats.frames_recorded) / f64::from(TICK_RATE)
        };
        Self {
            avg_distance: stats.distance_sum / frames,
            aggression_ratio: f64::from(stats.aggression_ticks) / frames,
            retreat_ratio: f64::from(stats.retreat_ticks) / frames,
            jumps_per_sec: f64::from(stats.jumps) / seconds,
            melee_per_sec: f64::from(stats.melee_attacks) / seconds,
            shots_per_sec: f64::from(stats.shots_fired) / seconds,
            air_ticks: stats.air_ticks,
        }
    }
}
