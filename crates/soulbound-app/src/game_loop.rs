//! Game loop thread — runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; snapshots go out on a
//! second channel and into the shared slot for synchronous polling. When a
//! training session completes, the loop hands the frozen telemetry to the
//! profile generator on a worker thread and feeds the result back to itself
//! as a `ProfileReady` command.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{info, warn};

use soulbound_core::commands::PlayerCommand;
use soulbound_core::constants::TICK_RATE;
use soulbound_core::events::GameEvent;
use soulbound_core::state::GameStateSnapshot;
use soulbound_core::telemetry::{PlayerStats, ProfileMetrics};
use soulbound_sim::engine::{SimConfig, SimulationEngine};

use crate::generator::{self, ProfileGenerator};
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the shell to use.
pub fn spawn_game_loop(
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: SharedSnapshot,
    generator: Arc<dyn ProfileGenerator>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let loop_tx = cmd_tx.clone();

    std::thread::Builder::new()
        .name("soulbound-game-loop".into())
        .spawn(move || {
            run_game_loop(cmd_rx, loop_tx, snapshot_tx, &latest_snapshot, generator);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    loop_tx: mpsc::Sender<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    generator: Arc<dyn ProfileGenerator>,
) {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. React to simulation events
        for event in &snapshot.events {
            match event {
                GameEvent::PhaseChanged { phase } => {
                    info!("phase changed to {phase:?}");
                }
                GameEvent::TrainingComplete { stats } => {
                    request_profile(stats, Arc::clone(&generator), loop_tx.clone());
                }
                GameEvent::GameOver { player_won } => {
                    info!("session over, player_won={player_won}");
                }
            }
        }

        // 4. Publish the snapshot
        let _ = snapshot_tx.send(snapshot.clone());
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Kick off profile generation on a worker thread and feed the result back
/// as a command. The boss fight can start before the result arrives; the
/// engine falls back on its own in that case.
fn request_profile(
    stats: &PlayerStats,
    generator: Arc<dyn ProfileGenerator>,
    tx: mpsc::Sender<GameLoopCommand>,
) {
    let metrics = ProfileMetrics::from_stats(stats);
    let spawned = std::thread::Builder::new()
        .name("soulbound-profile-gen".into())
        .spawn(move || {
            let profile = generator::resolve_profile(generator.as_ref(), &metrics);
            info!("profile ready: {}", profile.name);
            let _ = tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::ProfileReady {
                profile,
            }));
        });
    if spawned.is_err() {
        warn!("could not spawn profile worker; the boss will use the fallback");
    }
}
