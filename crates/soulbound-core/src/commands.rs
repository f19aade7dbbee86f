//! Player commands sent from the surrounding shell to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::InputKey;
use crate::profile::BossProfile;

/// All inputs the engine accepts between ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// A logical key changed state. The key map is read at tick start.
    Input { key: InputKey, pressed: bool },

    /// Begin the training phase (from INTRO).
    StartTraining,
    /// Begin the boss fight (from ANALYSIS). Falls back to the default
    /// profile if none has arrived.
    StartBossFight,
    /// Return to INTRO from GAME_OVER, clearing session state.
    Restart,

    /// One-shot delivery of the resolved boss profile while in ANALYSIS.
    ProfileReady { profile: BossProfile },
}
