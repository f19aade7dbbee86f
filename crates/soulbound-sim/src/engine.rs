//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the two fighters, the hecs world of transient
//! entities, and the phase machine. It processes player commands at tick
//! boundaries, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use soulbound_boss_ai::params::TacticalParams;

use soulbound_core::commands::PlayerCommand;
use soulbound_core::constants::*;
use soulbound_core::entities::Fighter;
use soulbound_core::enums::GamePhase;
use soulbound_core::events::GameEvent;
use soulbound_core::profile::BossProfile;
use soulbound_core::state::GameStateSnapshot;
use soulbound_core::telemetry::PlayerStats;
use soulbound_core::types::SimTime;

use crate::arena;
use crate::systems;
use crate::systems::player::InputState;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the fighters and all sim state.
pub struct SimulationEngine {
    world: World,
    player: Fighter,
    enemy: Fighter,
    input: InputState,
    phase: GamePhase,
    time: SimTime,
    rng: ChaCha8Rng,
    stats: PlayerStats,
    /// Profile delivered while waiting in analysis, if any.
    received_profile: Option<BossProfile>,
    /// Profile the current boss was built from.
    active_profile: Option<BossProfile>,
    params: Option<TacticalParams>,
    next_decision_tick: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    player_won: Option<bool>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            player: arena::spawn_player(),
            enemy: arena::spawn_drone(),
            input: InputState::default(),
            phase: GamePhase::default(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            stats: PlayerStats::default(),
            received_profile: None,
            active_profile: None,
            params: None,
            next_decision_tick: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player_won: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if matches!(self.phase, GamePhase::Training | GamePhase::BossFight) {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.player,
            &self.enemy,
            self.active_profile.as_ref(),
            &self.stats,
            self.player_won,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Fighter {
        &self.player
    }

    pub fn enemy(&self) -> &Fighter {
        &self.enemy
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Mutable fighter access for test scenarios.
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Fighter {
        &mut self.player
    }

    #[cfg(test)]
    pub fn enemy_mut(&mut self) -> &mut Fighter {
        &mut self.enemy
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Input { key, pressed } => {
                self.input.apply(key, pressed);
            }
            PlayerCommand::StartTraining => {
                if self.phase == GamePhase::Intro {
                    self.player = arena::spawn_player();
                    self.enemy = arena::spawn_drone();
                    arena::clear_transients(&mut self.world);
                    self.stats = PlayerStats::default();
                    self.time = SimTime::default();
                    self.set_phase(GamePhase::Training);
                }
            }
            PlayerCommand::StartBossFight => {
                if self.phase == GamePhase::Analysis {
                    let profile = self
                        .received_profile
                        .clone()
                        .unwrap_or_else(BossProfile::fallback);
                    self.params = Some(TacticalParams::from_profile(&profile));
                    self.player = arena::spawn_player();
                    self.enemy = arena::spawn_boss(&profile);
                    self.active_profile = Some(profile);
                    arena::clear_transients(&mut self.world);
                    self.time = SimTime::default();
                    self.next_decision_tick = 0;
                    self.set_phase(GamePhase::BossFight);
                }
            }
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.player = arena::spawn_player();
                    self.enemy = arena::spawn_drone();
                    arena::clear_transients(&mut self.world);
                    self.input = InputState::default();
                    self.stats = PlayerStats::default();
                    self.received_profile = None;
                    self.active_profile = None;
                    self.params = None;
                    self.player_won = None;
                    self.time = SimTime::default();
                    self.set_phase(GamePhase::Intro);
                }
            }
            PlayerCommand::ProfileReady { profile } => {
                // One-shot: a late or duplicate delivery is dropped.
                if self.phase == GamePhase::Analysis && self.received_profile.is_none() {
                    self.received_profile = Some(profile);
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let recording = self.phase == GamePhase::Training;

        // 1. Player controller + physics.
        systems::player::run(
            &mut self.player,
            &mut self.world,
            &self.input,
            &mut self.rng,
            &mut self.stats,
            recording,
        );
        systems::physics::run(&mut self.player);

        // 2. Telemetry sampling and training completion.
        if recording {
            systems::telemetry::record(&mut self.stats, &self.player, &self.enemy);
            if self.stats.frames_recorded > TRAINING_MIN_FRAMES && self.enemy.hp <= 0.0 {
                self.events.push(GameEvent::TrainingComplete {
                    stats: self.stats.clone(),
                });
                self.set_phase(GamePhase::Analysis);
                return;
            }
        }

        // 3. Enemy controller + physics. A downed drone stops acting but
        //    its body still integrates.
        if self.enemy.hp > 0.0 {
            match self.phase {
                GamePhase::Training => systems::enemy::run_drone(
                    &mut self.enemy,
                    &self.player,
                    &mut self.world,
                    &mut self.rng,
                ),
                GamePhase::BossFight => {
                    if let Some(params) = &self.params {
                        systems::enemy::run_boss(
                            &mut self.enemy,
                            &self.player,
                            &mut self.world,
                            &mut self.rng,
                            params,
                            self.time.tick,
                            &mut self.next_decision_tick,
                        );
                    }
                }
                _ => {}
            }
        }
        systems::physics::run(&mut self.enemy);

        // 4. Projectile flight and impacts.
        let projectile_damage = self.enemy_projectile_damage();
        systems::projectiles::run(
            &mut self.world,
            &mut self.player,
            &mut self.enemy,
            &mut self.rng,
            &mut self.despawn_buffer,
            projectile_damage,
            &mut self.stats,
            recording,
        );

        // 5. Melee resolution.
        let melee_damage = self.enemy_melee_damage();
        systems::combat::resolve_melee(
            &mut self.player,
            &mut self.enemy,
            &mut self.world,
            &mut self.rng,
            melee_damage,
            &mut self.stats,
            recording,
        );

        // 6. Particle decay.
        systems::particles::run(&mut self.world, &mut self.despawn_buffer);

        // 7. Terminal checks.
        if self.player.hp <= 0.0 {
            self.finish_fight(false);
        } else if self.phase == GamePhase::BossFight && self.enemy.hp <= 0.0 {
            self.finish_fight(true);
        }
    }

    fn enemy_melee_damage(&self) -> f32 {
        match self.phase {
            GamePhase::BossFight => {
                let multiplier = self.params.as_ref().map_or(1.0, |p| p.damage_multiplier);
                BOSS_MELEE_DAMAGE * multiplier
            }
            _ => DRONE_MELEE_DAMAGE,
        }
    }

    fn enemy_projectile_damage(&self) -> f32 {
        match self.phase {
            GamePhase::BossFight => {
                let multiplier = self.params.as_ref().map_or(1.0, |p| p.damage_multiplier);
                BOSS_PROJECTILE_DAMAGE * multiplier
            }
            _ => DRONE_PROJECTILE_DAMAGE,
        }
    }

    fn finish_fight(&mut self, player_won: bool) {
        self.player_won = Some(player_won);
        self.events.push(GameEvent::GameOver { player_won });
        self.set_phase(GamePhase::GameOver);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.events.push(GameEvent::PhaseChanged { phase });
    }
}
