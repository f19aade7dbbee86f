//! Telemetry recording system.
//!
//! Samples player behavior once per training tick, after the player's
//! physics step. All counters are monotonic while recording runs.

use soulbound_core::entities::Fighter;
use soulbound_core::telemetry::PlayerStats;

/// Record one frame of behavioral telemetry.
pub fn record(stats: &mut PlayerStats, player: &Fighter, enemy: &Fighter) {
    stats.frames_recorded += 1;
    stats.distance_sum += f64::from(player.distance_to(enemy));

    // Classified by sign, so even a slow drift counts.
    if player.vel.x != 0.0 {
        let toward = (enemy.center_x() - player.center_x()).signum();
        if player.vel.x.signum() == toward {
            stats.aggression_ticks += 1;
        } else {
            stats.retreat_ticks += 1;
        }
    }

    if !player.grounded {
        stats.air_ticks += 1;
    }
}
