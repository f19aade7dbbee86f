//! Boss profile generation boundary.
//!
//! The engine never talks to a generator directly: the game loop hands the
//! frozen training metrics to a `ProfileGenerator` on a worker thread and
//! forwards whatever comes back as a `ProfileReady` command. Any failure
//! resolves to the fixed fallback profile, so the boss fight can always
//! start.

use log::warn;
use thiserror::Error;

use soulbound_core::enums::{
    AggressionLevel, BossArchetype, MovementStyle, PreferredDistance,
};
use soulbound_core::profile::{BossNumbers, BossProfile, BossTactics};
use soulbound_core::telemetry::ProfileMetrics;

/// Errors a profile generator may surface.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("profile service unavailable: {0}")]
    Unavailable(String),
    #[error("malformed profile payload: {0}")]
    InvalidResponse(String),
}

/// Produces one boss profile from training metrics.
pub trait ProfileGenerator: Send + Sync {
    fn generate(&self, metrics: &ProfileMetrics) -> Result<BossProfile, GeneratorError>;
}

/// Run a generation attempt and fall back on any failure.
pub fn resolve_profile(generator: &dyn ProfileGenerator, metrics: &ProfileMetrics) -> BossProfile {
    match generator.generate(metrics) {
        Ok(profile) => profile,
        Err(err) => {
            warn!("profile generation failed, using fallback: {err}");
            BossProfile::fallback()
        }
    }
}

/// Average distance above which the player is read as a keepaway fighter.
const KEEPAWAY_DISTANCE: f64 = 280.0;

/// Aggression ratio above which the player is read as a brawler.
const BRAWLER_AGGRESSION: f64 = 0.35;

/// Deterministic local generator.
///
/// Picks the archetype that counters the observed playstyle: keepaway
/// shooters get chased down, brawlers get kited, anything else gets
/// mirrored.
pub struct OfflineGenerator;

impl ProfileGenerator for OfflineGenerator {
    fn generate(&self, metrics: &ProfileMetrics) -> Result<BossProfile, GeneratorError> {
        Ok(counter_profile(metrics))
    }
}

fn counter_profile(metrics: &ProfileMetrics) -> BossProfile {
    let keepaway = metrics.avg_distance > KEEPAWAY_DISTANCE
        || metrics.shots_per_sec > metrics.melee_per_sec * 1.5;
    let brawler =
        metrics.aggression_ratio > BRAWLER_AGGRESSION && metrics.melee_per_sec >= metrics.shots_per_sec;

    if keepaway {
        BossProfile {
            name: "Caçador do Vazio".to_string(),
            title: "A Fome que Corre".to_string(),
            archetype: BossArchetype::Berserker,
            description: "Uma fera nascida da distância que o herói insiste em manter. \
                          Ela não conhece paciência, apenas perseguição."
                .to_string(),
            dialogue_intro: "Você atira de longe... eu como a distância.".to_string(),
            dialogue_win: "Nenhum lugar era longe o bastante.".to_string(),
            dialogue_lose: "A caçada... termina...".to_string(),
            strategy_analysis: "O herói luta à distância, então o Caçador fechará o \
                                espaço com avanços constantes e pressão corpo a corpo."
                .to_string(),
            tactics: BossTactics {
                preferred_distance: PreferredDistance::Close,
                movement_style: MovementStyle::DashHeavy,
                aggression_level: AggressionLevel::RushDown,
            },
            stats: BossNumbers {
                speed_multiplier: 1.35,
                jump_frequency: 0.3,
                reaction_time: 10,
                damage_multiplier: 1.15,
                projectile_rate: 0.15,
                color_hex: "#dc2626".to_string(),
            },
        }
    } else if brawler {
        BossProfile {
            name: "Olho do Abismo".to_string(),
            title: "O Vigia Distante".to_string(),
            archetype: BossArchetype::Sniper,
            description: "Um observador que aprendeu a temer os punhos do herói e \
                          decidiu nunca mais estar ao alcance deles."
                .to_string(),
            dialogue_intro: "Aproxime-se... se conseguir.".to_string(),
            dialogue_win: "Você nunca me tocou.".to_string(),
            dialogue_lose: "Perto demais... você chegou perto demais...".to_string(),
            strategy_analysis: "O herói avança sem hesitar, então o Olho manterá a \
                                distância e punirá cada aproximação com projéteis."
                .to_string(),
            tactics: BossTactics {
                preferred_distance: PreferredDistance::Far,
                movement_style: MovementStyle::Grounded,
                aggression_level: AggressionLevel::Defensive,
            },
            stats: BossNumbers {
                speed_multiplier: 0.95,
                jump_frequency: 0.6,
                reaction_time: 18,
                damage_multiplier: 1.0,
                projectile_rate: 0.85,
                color_hex: "#0ea5e9".to_string(),
            },
        }
    } else {
        BossProfile {
            name: "Sombra Espelhada".to_string(),
            title: "O Outro Eu".to_string(),
            archetype: BossArchetype::Shadow,
            description: "Um reflexo moldado por um estilo sem extremos. Ele espera, \
                          observa e responde na mesma medida."
                .to_string(),
            dialogue_intro: "Eu lutarei como você luta.".to_string(),
            dialogue_win: "O reflexo venceu o original.".to_string(),
            dialogue_lose: "Então é assim... que eu termino...".to_string(),
            strategy_analysis: "O estilo do herói é equilibrado, então a Sombra \
                                espelhará seu ritmo a média distância."
                .to_string(),
            tactics: BossTactics {
                preferred_distance: PreferredDistance::Mid,
                movement_style: MovementStyle::Grounded,
                aggression_level: AggressionLevel::Balanced,
            },
            stats: BossNumbers {
                speed_multiplier: 1.1,
                jump_frequency: 0.5,
                reaction_time: 14,
                damage_multiplier: 1.0,
                projectile_rate: 0.4,
                color_hex: "#a855f7".to_string(),
            },
        }
    }
}
