//! Boss behavior profiles.
//!
//! A profile is produced once per training completion by the external
//! generator collaborator and is immutable for the rest of the session.
//! The deterministic fallback covers generator failure and the case where
//! the boss fight starts before a profile has arrived.

use serde::{Deserialize, Serialize};

use crate::enums::{AggressionLevel, BossArchetype, MovementStyle, PreferredDistance};

/// The three enumerated axes that parameterize the tactical policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossTactics {
    #[serde(rename = "preferredDistance")]
    pub preferred_distance: PreferredDistance,
    #[serde(rename = "movementStyle")]
    pub movement_style: MovementStyle,
    #[serde(rename = "aggressionLevel")]
    pub aggression_level: AggressionLevel,
}

/// Numeric stat block on a boss profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossNumbers {
    /// Movement speed scale, roughly 0.8 to 1.5.
    #[serde(rename = "speedMultiplier")]
    pub speed_multiplier: f32,
    /// Jump preference 0.0 to 1.0 (flavor; aerial style drives actual hops).
    #[serde(rename = "jumpFrequency")]
    pub jump_frequency: f32,
    /// Base reaction interval in ticks between discretionary decisions.
    #[serde(rename = "reactionTime")]
    pub reaction_time: u32,
    #[serde(rename = "damageMultiplier")]
    pub damage_multiplier: f32,
    /// Shooting preference 0.0 to 1.0.
    #[serde(rename = "projectileRate")]
    pub projectile_rate: f32,
    #[serde(rename = "colorHex")]
    pub color_hex: String,
}

/// A complete boss profile: identity, narrative text, and tactics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossProfile {
    pub name: String,
    pub title: String,
    pub archetype: BossArchetype,
    pub description: String,
    pub dialogue_intro: String,
    pub dialogue_win: String,
    pub dialogue_lose: String,
    pub strategy_analysis: String,
    pub tactics: BossTactics,
    pub stats: BossNumbers,
}

impl BossProfile {
    /// The fixed balanced profile used whenever generation fails or no
    /// profile is available at boss-fight entry.
    pub fn fallback() -> Self {
        Self {
            name: "Sombra Estilhaçada".to_string(),
            title: "O Reflexo Padrão".to_string(),
            archetype: BossArchetype::Counter,
            description: "Uma manifestação do Vazio, surgindo quando a conexão \
                          espiritual falha. Ele imita movimentos básicos sem alma."
                .to_string(),
            dialogue_intro: "Eu sou aquilo que você teme se tornar...".to_string(),
            dialogue_win: "Sua luz se apaga.".to_string(),
            dialogue_lose: "O espelho... se quebra...".to_string(),
            strategy_analysis: "A alma do herói parece equilibrada, então a Sombra \
                                adotará uma postura de espelhamento direto."
                .to_string(),
            tactics: BossTactics {
                preferred_distance: PreferredDistance::Mid,
                movement_style: MovementStyle::Grounded,
                aggression_level: AggressionLevel::Balanced,
            },
            stats: BossNumbers {
                speed_multiplier: 1.1,
                jump_frequency: 0.5,
                reaction_time: 15,
                damage_multiplier: 1.0,
                projectile_rate: 0.3,
                color_hex: "#9333ea".to_string(),
            },
        }
    }
}
