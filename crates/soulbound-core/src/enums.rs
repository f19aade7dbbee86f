//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state machine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Intro,
    Training,
    /// Waiting state while the boss profile request is in flight.
    Analysis,
    BossFight,
    GameOver,
}

/// What a fighter is committed to this instant.
///
/// A tagged variant instead of independent booleans: a fighter cannot be
/// attacking and dashing at the same time by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionState {
    #[default]
    Idle,
    /// Swing in progress; `window` is the remaining active ticks.
    /// A landed hit consumes the swing by returning to `Idle`.
    Attacking { window: u32 },
    /// Dash in progress; ends when horizontal speed decays below
    /// `DASH_END_SPEED`.
    Dashing,
}

impl ActionState {
    /// Whether a swing is currently able to connect.
    pub fn is_attacking(&self) -> bool {
        matches!(self, ActionState::Attacking { window } if *window > 0)
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self, ActionState::Dashing)
    }
}

/// Which combatant owns a projectile. Self-collision is excluded by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// Logical input keys polled by the player controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKey {
    Left,
    Right,
    Jump,
    Melee,
    Ranged,
}

/// Narrative/tactical category of a boss profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossArchetype {
    Shadow,
    Tank,
    Sniper,
    Berserker,
    #[default]
    Counter,
}

/// Distance band the boss tries to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferredDistance {
    Close,
    #[default]
    Mid,
    Far,
}

/// How the boss prefers to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementStyle {
    #[default]
    Grounded,
    Aerial,
    DashHeavy,
}

/// How hard the boss presses the attack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggressionLevel {
    Defensive,
    #[default]
    Balanced,
    RushDown,
}
