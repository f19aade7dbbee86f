//! Events emitted by the simulation for the surrounding shell.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::telemetry::PlayerStats;

/// Notifications drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The phase machine advanced.
    PhaseChanged { phase: GamePhase },
    /// Training completed; carries the frozen telemetry snapshot that
    /// drives profile generation.
    TrainingComplete { stats: PlayerStats },
    /// A fight ended. `player_won` selects the end-of-run narrative.
    GameOver { player_won: bool },
}
