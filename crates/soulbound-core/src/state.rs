//! Game state snapshot — the complete visible state published each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::telemetry::PlayerStats;
use crate::types::{Position, Size, SimTime, Velocity};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: FighterView,
    pub enemy: FighterView,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub hud: HudView,
    /// Events since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// One fighter's render/HUD state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FighterView {
    pub pos: Position,
    pub size: Size,
    pub vel: Velocity,
    pub color: String,
    /// Clamped to zero for display.
    pub hp: f32,
    pub max_hp: f32,
    pub facing_right: bool,
    pub attacking: bool,
    pub dashing: bool,
    pub grounded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pos: Position,
    pub size: Size,
    pub from_player: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Position,
    pub color: String,
    pub size: f32,
    /// Remaining life in ticks, for alpha fade-out.
    pub life: f32,
}

/// HUD values outside the arena itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    /// Boss name once a profile is active (boss fight and after).
    pub boss_name: Option<String>,
    pub boss_title: Option<String>,
    pub boss_color: Option<String>,
    /// Live telemetry, shown by the analysis terminal.
    pub stats: PlayerStats,
    /// Set when the session has ended; selects the closing narrative.
    pub player_won: Option<bool>,
}
