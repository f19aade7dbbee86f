//! Headless demo session: scripted inputs through a full
//! training / analysis / boss-fight cycle, logging phase transitions.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::info;

use soulbound_app::game_loop;
use soulbound_app::generator::OfflineGenerator;
use soulbound_app::state::GameLoopCommand;
use soulbound_core::commands::PlayerCommand;
use soulbound_core::enums::{GamePhase, InputKey};

/// Give up on the demo session after this long.
const SESSION_TIMEOUT: Duration = Duration::from_secs(120);

fn main() {
    env_logger::init();

    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let latest = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(snapshot_tx, latest, Arc::new(OfflineGenerator));

    let send = |command: PlayerCommand| {
        let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(command));
    };

    // Charge forward and attack everything; crude, but it finishes training.
    send(PlayerCommand::StartTraining);
    for key in [InputKey::Right, InputKey::Melee, InputKey::Ranged] {
        send(PlayerCommand::Input { key, pressed: true });
    }

    let deadline = Instant::now() + SESSION_TIMEOUT;
    let mut phase = GamePhase::Intro;
    while Instant::now() < deadline {
        let snapshot = match snapshot_rx.recv_timeout(Duration::from_secs(1)) {
            Ok(snapshot) => snapshot,
            Err(_) => break,
        };
        if snapshot.phase == phase {
            continue;
        }
        phase = snapshot.phase;
        match phase {
            GamePhase::Analysis => {
                // Leave the generator a moment to deliver before starting.
                std::thread::sleep(Duration::from_millis(200));
                send(PlayerCommand::StartBossFight);
            }
            GamePhase::GameOver => {
                if let Some(name) = &snapshot.hud.boss_name {
                    info!("faced {name}");
                }
                break;
            }
            _ => {}
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}
